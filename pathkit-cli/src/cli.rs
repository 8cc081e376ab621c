//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbbreviateCommand, AbsoluteCommand, CompletionsCommand, ComponentsCommand, GlobCommand,
    InfoCommand, JoinCommand, LsCommand, MatchesCommand, NormalizeCommand, ParentCommand,
    ReadlinkCommand, WalkCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand, ValueEnum};
use pathkit::{OutputFormat, Path};

/// Command-line tool for inspecting and manipulating filesystem paths.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(version, about = "Inspect and manipulate filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read an extra configuration file
    #[arg(long, value_name = "FILE", global = true, env = "PATHKIT_CONFIG")]
    pub config: Option<Path>,

    /// Output format
    #[arg(long, value_enum, global = true, env = "PATHKIT_FORMAT")]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The options every command receives.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            config: self.config.clone(),
            format: self.format.map(OutputFormat::from),
        }
    }
}

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One result per line
    Plain,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Lexically normalize paths
    Normalize(NormalizeCommand),

    /// Make paths absolute against the current directory
    Absolute(AbsoluteCommand),

    /// Replace a leading home directory with ~
    Abbreviate(AbbreviateCommand),

    /// Split a path into its components
    Components(ComponentsCommand),

    /// Show the parent of a path
    Parent(ParentCommand),

    /// Append paths to a base path
    Join(JoinCommand),

    /// Describe a path and what the filesystem says about it
    Info(InfoCommand),

    /// Show where a symlink points
    Readlink(ReadlinkCommand),

    /// List the entries of a directory
    Ls(LsCommand),

    /// Recursively list a directory
    Walk(WalkCommand),

    /// List paths matching a glob pattern
    Glob(GlobCommand),

    /// Exit successfully if two paths name the same location
    Matches(MatchesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
