//! Command describing a single path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_json, GlobalOptions};
use clap::Args;
use pathkit::{OutputFormat, Path};
use serde::Serialize;

/// Describe a path and what the filesystem says about it.
#[derive(Args)]
pub struct InfoCommand {
    /// Path to describe
    pub path: Path,
}

#[derive(Debug, Serialize)]
struct PathInfo {
    path: Path,
    normalized: Path,
    absolute: Path,
    last_component: String,
    extension: Option<String>,
    exists: bool,
    is_directory: bool,
    is_file: bool,
    is_symlink: bool,
    is_readable: bool,
    is_writable: bool,
    is_executable: bool,
    is_deletable: bool,
}

impl PathInfo {
    fn gather(path: &Path) -> Self {
        Self {
            path: path.clone(),
            normalized: path.normalize(),
            absolute: path.absolute(),
            last_component: path.last_component().to_string(),
            extension: path.extension().map(str::to_string),
            exists: path.exists(),
            is_directory: path.is_directory(),
            is_file: path.is_file(),
            is_symlink: path.is_symlink(),
            is_readable: path.is_readable(),
            is_writable: path.is_writable(),
            is_executable: path.is_executable(),
            is_deletable: path.is_deletable(),
        }
    }

    fn print_plain(&self) {
        println!("path: {}", self.path);
        println!("normalized: {}", self.normalized);
        println!("absolute: {}", self.absolute);
        println!("last_component: {}", self.last_component);
        println!("extension: {}", self.extension.as_deref().unwrap_or("-"));
        println!("exists: {}", self.exists);
        println!("directory: {}", self.is_directory);
        println!("file: {}", self.is_file);
        println!("symlink: {}", self.is_symlink);
        println!("readable: {}", self.is_readable);
        println!("writable: {}", self.is_writable);
        println!("executable: {}", self.is_executable);
        println!("deletable: {}", self.is_deletable);
    }
}

impl InfoCommand {
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let info = PathInfo::gather(&self.path);
        match global.output_format(&config) {
            OutputFormat::Plain => {
                info.print_plain();
                Ok(())
            }
            OutputFormat::Json => print_json(&info),
        }
    }
}
