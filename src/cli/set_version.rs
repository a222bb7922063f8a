use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::pattern::UNSPECIFIED;
use crate::services::catalog;
use crate::utils::error::{Result, VercatError};

/// Write a literal version value for an alias into the catalog file
#[derive(Debug, Args)]
pub struct SetVersionCommand {
    /// Path to the libs.versions.toml catalog file
    #[arg(long, default_value = "libs.versions.toml")]
    pub file: PathBuf,

    /// Alias whose version entry will be rewritten
    #[arg(long, default_value = UNSPECIFIED)]
    pub alias: String,

    /// Version value to write (numeric shape, DEV or PLACEHOLDER)
    #[arg(long = "project-version", default_value = UNSPECIFIED)]
    pub version: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the set-version command
#[derive(Debug, Serialize, Deserialize)]
pub struct SetVersionResponse {
    pub status: String,
    pub alias: String,
    pub version: String,
    pub file: String,
}

impl SetVersionCommand {
    /// Execute the set-version command
    pub fn execute(&self) -> Result<()> {
        catalog::set_version(&self.file, &self.alias, &self.version)?;

        if self.json {
            let response = SetVersionResponse {
                status: "success".to_string(),
                alias: self.alias.clone(),
                version: self.version.clone(),
                file: self.file.display().to_string(),
            };
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                VercatError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;
            println!("{}", json_output);
        } else {
            println!(
                "Set {} to \"{}\" in {}",
                self.alias,
                self.version,
                self.file.display()
            );
        }

        Ok(())
    }
}
