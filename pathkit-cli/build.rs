//! Build script for pathkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and manipulate filesystem paths")
        .long_about(
            "Command-line tool for lexical path manipulation and simple filesystem queries",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read an extra configuration file")
                .value_name("FILE")
                .global(true)
                .env("PATHKIT_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["plain", "json"])
                .global(true)
                .env("PATHKIT_FORMAT"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Lexically normalize paths")
                .long_about("Expand ~ and resolve . and .. without touching the filesystem"),
            Command::new("absolute")
                .about("Make paths absolute against the current directory")
                .long_about("Join relative paths to the current directory and normalize them"),
            Command::new("abbreviate")
                .about("Replace a leading home directory with ~")
                .long_about("Rewrite paths inside the home directory to start with ~"),
            Command::new("components")
                .about("Split a path into its components")
                .long_about("Print each component, including a leading / or ~"),
            Command::new("parent")
                .about("Show the parent of a path")
                .long_about("Print the path with .. appended"),
            Command::new("join")
                .about("Append paths to a base path")
                .long_about("Append each path in turn; absolute paths replace the base"),
            Command::new("info")
                .about("Describe a path and what the filesystem says about it")
                .long_about("Show components, absolute form, type and permission checks"),
            Command::new("readlink")
                .about("Show where a symlink points")
                .long_about("Print a symlink destination, joined to the link's directory"),
            Command::new("ls")
                .about("List the entries of a directory")
                .long_about("Print the entries of a directory sorted by name"),
            Command::new("walk")
                .about("Recursively list a directory")
                .long_about("Depth-first listing with pruning, depth and hidden-file controls"),
            Command::new("glob")
                .about("List paths matching a glob pattern")
                .long_about("Print absolute paths matching a shell pattern, sorted"),
            Command::new("matches")
                .about("Exit successfully if two paths name the same location")
                .long_about("Compare two paths after making both absolute; exit 1 on mismatch"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathkit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
