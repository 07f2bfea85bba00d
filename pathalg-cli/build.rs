//! Build script for pathalg-cli.
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
fn build_cli() -> Command {
    Command::new("pathalg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and relativize logical paths")
        .long_about(
            "Resolve, normalize and relativize paths under Unix or Windows path grammars \
             without touching the filesystem",
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
            Arg::new("platform")
                .long("platform")
                .help("Path grammar to use (unix or windows); defaults to the host's")
                .value_name("PLATFORM")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["plain", "json"])
                .default_value("plain")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a path against a base")
                .long_about("Resolve PATH against BASE and print the normalized result"),
            Command::new("relative")
                .about("Compute the relative path between two absolute paths")
                .long_about("Print the path leading from BASE to TARGET"),
            Command::new("is-absolute")
                .about("Check whether a path is absolute")
                .long_about("Print true or false and exit 1 when the assertion fails"),
            Command::new("clean")
                .about("Normalize a path")
                .long_about("Collapse '.', '..' and repeated separators in a path"),
            Command::new("show-platform")
                .about("Show the selected path grammar")
                .long_about("Print the platform and separator commands will use"),
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

    fs::write(man_dir.join("pathalg.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
