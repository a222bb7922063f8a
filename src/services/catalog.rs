// The two catalog operations: set a literal version, bump to the next one

use std::path::Path;

use crate::models::pattern::{alias_line_patterns, VersionPattern};
use crate::models::version::{Version, VersionParseError};
use crate::services::{rewriter, validator};
use crate::utils::error::{Result, VercatError};

fn replacement_line(alias: &str, version: &str) -> String {
    format!("{} = \"{}\"", alias, version)
}

fn replacement_failed(alias: &str) -> VercatError {
    VercatError::ReplacementFailed(format!(
        "no catalog line for alias [{}] matched - the format must be {} = \"<version>\"",
        alias, alias
    ))
}

/// Write the literal `version` for `alias` into the catalog file.
///
/// The full shape set applies, so development markers (`DEV`, `PLACEHOLDER`)
/// are valid values here. The operation is a pure function of its inputs;
/// the caller owns any further version state.
pub fn set_version(file: &Path, alias: &str, version: &str) -> Result<()> {
    validator::ensure_specified(alias, "alias")?;
    validator::ensure_specified(version, "project version")?;
    validator::validate_catalog(file, alias, version, VersionPattern::all())?;

    let patterns = alias_line_patterns(alias, VersionPattern::all());
    let replaced =
        rewriter::replace_matching_lines(file, &replacement_line(alias, version), &patterns)?;
    if replaced {
        Ok(())
    } else {
        Err(replacement_failed(alias))
    }
}

/// Compute the version after `current`, write it for `alias` into the
/// catalog file and return it.
///
/// `current` must take a numeric shape; development markers are rejected
/// here because they carry no arithmetic meaning.
pub fn update_version(file: &Path, alias: &str, current: &str) -> Result<String> {
    validator::ensure_specified(alias, "alias")?;
    validator::ensure_specified(current, "project version")?;
    validator::validate_catalog(file, alias, current, VersionPattern::without_dev())?;

    let next = current
        .parse::<Version>()
        .map_err(|err| match err {
            VersionParseError::UnknownTag(_) => VercatError::InvalidTag(err.to_string()),
            other => VercatError::InvalidVersion(other.to_string()),
        })?
        .next()
        .to_string();

    let patterns = alias_line_patterns(alias, VersionPattern::all());
    let replaced =
        rewriter::replace_matching_lines(file, &replacement_line(alias, &next), &patterns)?;
    if replaced {
        Ok(next)
    } else {
        Err(replacement_failed(alias))
    }
}
