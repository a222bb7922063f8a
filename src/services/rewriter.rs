// Single-line substitution inside the catalog file

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::Result;

/// Replace every line of the file at `path` that matches one of `patterns`
/// with `replacement`, and write the full line set back in place.
///
/// Matching strips all space characters from the line first, so
/// `myGame = "1.2.3"` and `myGame="1.2.3"` both match `myGame="<shape>"`
/// patterns. The original, unstripped line is replaced wholesale. Every
/// matching line is replaced; untouched lines are written back unchanged.
///
/// Returns `true` when at least one replacement occurred. The write is not
/// atomic: an interruption mid-write can leave a truncated file, the caller
/// is assumed to own the file for the duration of the command.
pub fn replace_matching_lines(path: &Path, replacement: &str, patterns: &[Regex]) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let ends_with_newline = content.ends_with('\n');

    let new_lines: Vec<&str> = content
        .lines()
        .map(|line| {
            let stripped = line.replace(' ', "");
            if patterns.iter().any(|re| re.is_match(&stripped)) {
                replacement
            } else {
                line
            }
        })
        .collect();

    let replaced = new_lines.contains(&replacement);

    let mut output = new_lines.join("\n");
    if ends_with_newline {
        output.push('\n');
    }
    fs::write(path, output)?;

    Ok(replaced)
}
