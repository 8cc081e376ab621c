//! Command matching a glob pattern.

use crate::error::CliError;
use crate::utils::{load_configuration, print_paths, GlobalOptions};
use clap::Args;
use pathkit::Path;

/// List existing paths matching a shell pattern (`*`, `?`, `[...]`).
///
/// Results are absolute and sorted. Matching rules come from the
/// configuration.
#[derive(Args)]
pub struct GlobCommand {
    /// Pattern to match
    pub pattern: String,

    /// Match the pattern relative to this directory
    #[arg(long = "in", value_name = "DIR")]
    pub dir: Option<Path>,
}

impl GlobCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let pattern = match &self.dir {
            Some(dir) => dir + self.pattern.as_str(),
            None => Path::new(self.pattern.as_str()),
        };
        let matches = Path::glob_with(pattern.as_str(), config.glob_options())?;
        print_paths(global.output_format(&config), &matches)
    }
}
