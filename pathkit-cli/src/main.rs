//! Main entry point for the pathkit CLI.
//!
//! This is the command-line interface to the pathkit library. It provides
//! commands for inspecting paths:
//! - `normalize`, `absolute`, `abbreviate`: rewrite paths lexically
//! - `ls`, `walk`, `glob`: list what exists on disk
//! - `info`, `readlink`, `matches`: query a single path

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log events through the stderr logger
    let logger = pathkit::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("WARN: logging unavailable: {e}");
    }

    let global = cli.global_options();

    // Execute the command
    let result = match &cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Abbreviate(cmd) => cmd.execute(&global),
        cli::Command::Components(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Info(cmd) => cmd.execute(&global),
        cli::Command::Readlink(cmd) => cmd.execute(&global),
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Walk(cmd) => cmd.execute(&global),
        cli::Command::Glob(cmd) => cmd.execute(&global),
        cli::Command::Matches(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !(global.quiet && e.exit_code() == 1) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
