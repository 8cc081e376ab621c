//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathkit";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Installation hints on stderr, so stdout stays a clean script.
fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!(
                "#   pathkit completions bash > ~/.local/share/bash-completion/completions/pathkit"
            );
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(pathkit completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   pathkit completions zsh > ~/.zsh/completions/_pathkit");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            eprintln!("# Or add to ~/.zshrc:");
            eprintln!("#   eval \"$(pathkit completions zsh)\"");
        }
        Shell::Fish => {
            eprintln!("#   pathkit completions fish > ~/.config/fish/completions/pathkit.fish");
            eprintln!("# Or add to config.fish:");
            eprintln!("#   pathkit completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   pathkit completions powershell > $PROFILE");
            eprintln!("# Or run:");
            eprintln!("#   pathkit completions powershell | Out-String | Invoke-Expression");
        }
        _ => {}
    }

    eprintln!();
}
