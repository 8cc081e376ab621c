//! Command resolving a symlink.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, GlobalOptions};
use clap::Args;
use pathkit::Path;

/// Show where a symlink points.
///
/// Relative targets are shown joined to the link's directory.
#[derive(Args)]
pub struct ReadlinkCommand {
    /// Symlink to resolve
    pub path: Path,

    /// Normalize the destination
    #[arg(long)]
    pub normalize: bool,
}

impl ReadlinkCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut destination = self.path.symlink_destination()?;
        if self.normalize {
            destination = destination.normalize();
        }
        print_path(global.output_format(&config), &destination)
    }
}
