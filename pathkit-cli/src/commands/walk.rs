//! Command walking a directory tree.

use crate::error::CliError;
use crate::utils::{load_configuration, print_json, GlobalOptions};
use clap::Args;
use pathkit::{OutputFormat, Path, WalkOptions};

/// Recursively list a directory, depth first and sorted by name.
///
/// Walk defaults come from the configuration; flags override them.
#[derive(Args)]
pub struct WalkCommand {
    /// Directory to walk
    #[arg(default_value = ".")]
    pub dir: Path,

    /// Do not descend into directories with this name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub prune: Vec<String>,

    /// Maximum depth below DIR
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Skip entries whose name starts with `.`
    #[arg(long)]
    pub no_hidden: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,
}

impl WalkCommand {
    fn options(&self, defaults: WalkOptions) -> Result<WalkOptions, CliError> {
        let mut options = defaults;
        if self.no_hidden {
            options.include_hidden = false;
        }
        if self.follow_links {
            options.follow_links = true;
        }
        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err(CliError::InvalidArguments(
                    "--max-depth must be at least 1".to_string(),
                ));
            }
            options.max_depth = Some(depth);
        }
        Ok(options)
    }

    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let options = self.options(config.walk_options())?;
        let format = global.output_format(&config);

        let mut walker = self.dir.walk_with(options)?;
        let mut collected = Vec::new();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            // Pruned directories are listed themselves; their contents are not.
            if self.prune.iter().any(|name| name == entry.last_component()) {
                walker.skip_descendants();
            }
            match format {
                OutputFormat::Plain => println!("{entry}"),
                OutputFormat::Json => collected.push(entry),
            }
        }

        if format == OutputFormat::Json {
            print_json(&collected)?;
        }
        Ok(())
    }
}
