use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::pattern::UNSPECIFIED;
use crate::services::catalog;
use crate::utils::error::{Result, VercatError};

/// Bump an alias to its next version and print the result
#[derive(Debug, Args)]
pub struct UpdateVersionCommand {
    /// Path to the libs.versions.toml catalog file
    #[arg(long, default_value = "libs.versions.toml")]
    pub file: PathBuf,

    /// Alias whose version entry will be bumped
    #[arg(long, default_value = UNSPECIFIED)]
    pub alias: String,

    /// Current version value (numeric shape; DEV/PLACEHOLDER are rejected)
    #[arg(long = "project-version", default_value = UNSPECIFIED)]
    pub version: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the update-version command
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateVersionResponse {
    pub status: String,
    pub alias: String,
    pub previous_version: String,
    pub next_version: String,
    pub file: String,
}

impl UpdateVersionCommand {
    /// Execute the update-version command. The new version string is the
    /// command's output; the caller owns whatever state it feeds.
    pub fn execute(&self) -> Result<()> {
        let next = catalog::update_version(&self.file, &self.alias, &self.version)?;

        if self.json {
            let response = UpdateVersionResponse {
                status: "success".to_string(),
                alias: self.alias.clone(),
                previous_version: self.version.clone(),
                next_version: next,
                file: self.file.display().to_string(),
            };
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                VercatError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;
            println!("{}", json_output);
        } else {
            println!("{}", next);
        }

        Ok(())
    }
}
