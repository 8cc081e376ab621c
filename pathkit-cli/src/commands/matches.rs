//! Command comparing two paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::Path;

/// Exit successfully if both paths name the same location once made
/// absolute; exit with status 1 otherwise.
#[derive(Args)]
pub struct MatchesCommand {
    /// First path
    pub path: Path,

    /// Second path
    pub other: Path,
}

impl MatchesCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.path.matches(self.other.clone()) {
            if !global.quiet {
                println!("{} matches {}", self.path, self.other);
            }
            return Ok(());
        }

        Err(CliError::SemanticFailure(format!(
            "{} does not match {}",
            self.path, self.other
        )))
    }
}
