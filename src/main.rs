// vercat - version-catalog bump and content-digest tool
// Main CLI entry point

use clap::Parser;
use std::process;
use vercat::cli::{Cli, CliDispatcher};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = CliDispatcher::execute(cli.command) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
