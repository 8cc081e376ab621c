//! Commands that rewrite paths without touching the filesystem.

use crate::error::CliError;
use crate::utils::{load_configuration, print_paths, GlobalOptions};
use clap::Args;
use pathkit::Path;

/// Lexically normalize each path (expand `~`, resolve `.` and `..`).
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<Path>,
}

impl NormalizeCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let normalized: Vec<Path> = self.paths.iter().map(Path::normalize).collect();
        print_paths(global.output_format(&config), &normalized)
    }
}

/// Make each path absolute against the current directory.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Paths to resolve
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<Path>,
}

impl AbsoluteCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let absolute: Vec<Path> = self.paths.iter().map(Path::absolute).collect();
        print_paths(global.output_format(&config), &absolute)
    }
}

/// Rewrite paths under the home directory to start with `~`.
#[derive(Args)]
pub struct AbbreviateCommand {
    /// Paths to abbreviate
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<Path>,
}

impl AbbreviateCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let abbreviated: Vec<Path> = self.paths.iter().map(Path::abbreviate).collect();
        print_paths(global.output_format(&config), &abbreviated)
    }
}
