// Common error types for vercat

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum VercatError {
    IoError(std::io::Error),
    /// The catalog file is missing or not named `libs.versions.toml`.
    InvalidFile(String),
    /// The alias is blank or does not occur anywhere in the catalog file.
    InvalidAlias(String),
    /// The version value is blank or matches none of the accepted shapes.
    InvalidVersion(String),
    /// A pre-release suffix that is neither RELEASE nor SNAPSHOT.
    InvalidTag(String),
    /// The `unspecified` sentinel was passed where a concrete value is required.
    MissingValue(String),
    /// No line in the catalog file matched any accepted pattern for the alias.
    ReplacementFailed(String),
    /// More than one of {file, alias, version} failed validation; the message
    /// lists every failing condition.
    ValidationError(String),
}

impl fmt::Display for VercatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VercatError::IoError(err) => write!(f, "IO error: {}", err),
            VercatError::InvalidFile(msg) => write!(f, "Invalid file: {}", msg),
            VercatError::InvalidAlias(msg) => write!(f, "Invalid alias: {}", msg),
            VercatError::InvalidVersion(msg) => write!(f, "Invalid version: {}", msg),
            VercatError::InvalidTag(msg) => write!(f, "Invalid tag: {}", msg),
            VercatError::MissingValue(msg) => write!(f, "Missing value: {}", msg),
            VercatError::ReplacementFailed(msg) => write!(f, "Replacement failed: {}", msg),
            VercatError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl Error for VercatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VercatError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VercatError {
    fn from(err: std::io::Error) -> Self {
        VercatError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, VercatError>;
