// Input validation for catalog operations

use std::fs;
use std::path::Path;

use crate::models::pattern::{self, VersionPattern, EXPECTED_FILE_NAME, UNSPECIFIED};
use crate::utils::error::{Result, VercatError};

/// True when the string carries no usable value.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Reject the `unspecified` sentinel where a concrete value is required.
/// `what` names the parameter for the error message.
pub fn ensure_specified(value: &str, what: &str) -> Result<()> {
    if is_unspecified(value) {
        return Err(VercatError::MissingValue(format!(
            "the {} must be specified",
            what
        )));
    }
    Ok(())
}

/// True when `value` equals the `unspecified` sentinel.
pub fn is_unspecified(value: &str) -> bool {
    value.eq_ignore_ascii_case(UNSPECIFIED)
}

fn is_valid_catalog_file(file: &Path) -> bool {
    file.is_file()
        && file
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.eq_ignore_ascii_case(EXPECTED_FILE_NAME))
}

fn alias_occurs_in(content: &str, alias: &str) -> bool {
    content.lines().any(|line| line.contains(alias))
}

/// Validate the catalog file, the alias and the version value against the
/// accepted shape set.
///
/// All three checks run, nothing short-circuits. A single failing check is
/// raised as its specific error kind; several failing checks are combined
/// into one `ValidationError` listing every failing condition.
pub fn validate_catalog(
    file: &Path,
    alias: &str,
    version: &str,
    patterns: &[VersionPattern],
) -> Result<()> {
    let valid_file = is_valid_catalog_file(file);

    // An unreadable file counts as "alias not found"; the file check above
    // reports the underlying problem.
    let valid_alias = !is_blank(alias)
        && fs::read_to_string(file)
            .map(|content| alias_occurs_in(&content, alias))
            .unwrap_or(false);

    let valid_version = !is_blank(version) && pattern::matches_any(version, patterns);

    let mut failures = Vec::new();
    if !valid_file {
        failures.push(VercatError::InvalidFile(format!(
            "the file [{}] must exist and be named [{}]",
            file.display(),
            EXPECTED_FILE_NAME
        )));
    }
    if !valid_alias {
        failures.push(VercatError::InvalidAlias(format!(
            "the alias [{}] could not be found in the catalog file",
            alias
        )));
    }
    if !valid_version {
        failures.push(VercatError::InvalidVersion(format!(
            "the version [{}] must match one of: {}",
            version,
            pattern::shape_list(patterns)
        )));
    }

    match failures.len() {
        0 => Ok(()),
        1 => Err(failures.remove(0)),
        _ => {
            let combined: Vec<String> = failures.iter().map(|e| e.to_string()).collect();
            Err(VercatError::ValidationError(combined.join("; ")))
        }
    }
}
