//! Commands that take a path apart or put one together.

use crate::error::CliError;
use crate::utils::{load_configuration, print_json, print_path, GlobalOptions};
use clap::Args;
use pathkit::{OutputFormat, Path};

/// Split a path into its components.
#[derive(Args)]
pub struct ComponentsCommand {
    /// Path to split
    pub path: Path,
}

impl ComponentsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let components = self.path.components();
        match global.output_format(&config) {
            OutputFormat::Plain => {
                for component in &components {
                    println!("{component}");
                }
                Ok(())
            }
            OutputFormat::Json => print_json(&components),
        }
    }
}

/// Show the parent of a path (`path + ".."`).
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to show
    pub path: Path,
}

impl ParentCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        print_path(global.output_format(&config), &self.path.parent())
    }
}

/// Append each path in turn to a base path.
#[derive(Args)]
pub struct JoinCommand {
    /// Starting path
    pub base: Path,

    /// Paths to append, left to right
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<Path>,
}

impl JoinCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let joined = self
            .paths
            .iter()
            .fold(self.base.clone(), |joined, path| joined + path);
        print_path(global.output_format(&config), &joined)
    }
}
