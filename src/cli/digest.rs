use clap::Args;
use std::path::PathBuf;

use crate::services::digest::{self, DEFAULT_MAX_DEPTH};
use crate::utils::error::Result;

/// Print SHA-1/SHA-256 content digests for files and directory trees
#[derive(Debug, Args)]
pub struct DigestCommand {
    /// Files or directories to digest
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Maximum directory depth to descend; deeper entries are skipped
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Optional heading printed before the digest lines
    #[arg(long)]
    pub message: Option<String>,
}

impl DigestCommand {
    /// Execute the digest command. Any unreadable file aborts the whole
    /// report rather than being skipped.
    pub fn execute(&self) -> Result<()> {
        if let Some(message) = &self.message {
            if !message.is_empty() {
                println!("{}", message);
            }
        }

        for path in &self.paths {
            for file_digest in digest::digest_target(path, self.max_depth)? {
                println!("{}", file_digest);
            }
        }

        Ok(())
    }
}
