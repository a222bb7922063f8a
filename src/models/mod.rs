// Domain types for the version catalog

pub mod pattern;
pub mod version;

pub use pattern::{VersionPattern, EXPECTED_FILE_NAME, UNSPECIFIED};
pub use version::{Tag, Version, VersionParseError};
