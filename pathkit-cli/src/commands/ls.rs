//! Command listing a directory.

use crate::error::CliError;
use crate::utils::{load_configuration, print_paths, GlobalOptions};
use clap::Args;
use pathkit::Path;

/// List the entries of a directory, sorted by name.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(default_value = ".")]
    pub dir: Path,

    /// Leave out entries whose name starts with `.`
    #[arg(long)]
    pub no_hidden: bool,
}

impl LsCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut children = self.dir.children()?;
        if self.no_hidden {
            children.retain(|child| !child.last_component().starts_with('.'));
        }
        print_paths(global.output_format(&config), &children)
    }
}
