// CLI module for command-line interface

pub mod digest;
pub mod set_version;
pub mod update_version;

use clap::{Parser, Subcommand};

use crate::utils::error::Result;

use self::digest::DigestCommand;
use self::set_version::SetVersionCommand;
use self::update_version::UpdateVersionCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "vercat")]
#[command(about = "Version-catalog bump and content-digest tool for libs.versions.toml files")]
#[command(long_about = r#"vercat reads and rewrites a single version entry inside a Gradle-style
dependency catalog (libs.versions.toml) and computes content digests over
file sets for provenance logging.

The catalog is matched line by line, not parsed as TOML: the entry for an
alias must take the form  alias = "value"  with a value in one of the
accepted shapes (1-3 dotted integers, optionally -SNAPSHOT/-RELEASE, or the
development markers DEV and PLACEHOLDER).

Examples:
  vercat set-version --alias myGame --project-version 1.2.3
  vercat update-version --alias myGame --project-version 1.2.3
  vercat digest build/libs app.jar --message "Artifact digests:""#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Write a literal version value for an alias into the catalog file
    #[command(name = "set-version")]
    #[command(long_about = r#"Validate the catalog file, the alias and the version value, then rewrite
every catalog line of the form  alias = "<accepted shape>"  to carry the
given value verbatim. All other lines are written back byte-identical.

Development markers (DEV, PLACEHOLDER) are accepted here.

Examples:
  vercat set-version --alias myGame --project-version 1.2.3
  vercat set-version --file gradle/libs.versions.toml --alias myGame --project-version DEV"#)]
    SetVersion(SetVersionCommand),

    /// Bump an alias to its next version and print the result
    #[command(name = "update-version")]
    #[command(long_about = r#"Compute the version that follows the given one, rewrite the alias entry in
the catalog file, and print the new version on stdout for the caller to
persist elsewhere.

Increment rules: the lowest component advances and carries past 999 into the
next-higher component (1.0.999 -> 1.1.0, 1.999.999 -> 2.0.0); an all-zero
version becomes 1.0.0. A -RELEASE tag reopens as -SNAPSHOT; -SNAPSHOT is
kept. Development markers are rejected here.

Examples:
  vercat update-version --alias myGame --project-version 1.0.999
  vercat update-version --alias myGame --project-version 1.0.0-RELEASE --json"#)]
    UpdateVersion(UpdateVersionCommand),

    /// Print SHA-1/SHA-256 content digests for files and directory trees
    #[command(long_about = r#"Compute SHA-1 and SHA-256 over the raw bytes of each given file and emit
one line per file:

  <absolute-path> [SHA-1]: <hex> [SHA-256]: <hex>

Directories are walked with a bounded depth (default 100); entries past the
bound are skipped silently. A named target that does not exist is an error,
and any unreadable file aborts the whole report.

Examples:
  vercat digest build/libs
  vercat digest app.jar sources.jar --message "Artifact digests:"
  vercat digest src --max-depth 3"#)]
    Digest(DigestCommand),
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::SetVersion(cmd) => cmd.execute(),
            Commands::UpdateVersion(cmd) => cmd.execute(),
            Commands::Digest(cmd) => cmd.execute(),
        }
    }
}
