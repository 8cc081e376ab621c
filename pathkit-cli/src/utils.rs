//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and output formatting.

use crate::error::CliError;
use pathkit::{Config, ConfigBuilder, OutputFormat, Path};
use serde::Serialize;
use std::io::{self, Write};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file layered above the discovered ones.
    pub config: Option<Path>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

impl GlobalOptions {
    /// The output format to use: the command-line flag if given, otherwise
    /// whatever the configuration says.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or_else(|| config.output_format())
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The `--config` file
/// 3. Discovered configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref file) = global.config {
        builder = builder.with_file(file.clone());
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Print a list of paths: one per line, or a JSON array.
pub fn print_paths(format: OutputFormat, paths: &[Path]) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            let mut stdout = io::stdout().lock();
            for path in paths {
                writeln!(stdout, "{path}")?;
            }
            Ok(())
        }
        OutputFormat::Json => print_json(paths),
    }
}

/// Print a single path: as a line, or a JSON string.
pub fn print_path(format: OutputFormat, path: &Path) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            println!("{path}");
            Ok(())
        }
        OutputFormat::Json => print_json(path),
    }
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
