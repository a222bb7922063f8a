// vercat - version-catalog bump and content-digest tool
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::{Tag, Version, VersionParseError, VersionPattern};
pub use utils::error::{Result, VercatError};
