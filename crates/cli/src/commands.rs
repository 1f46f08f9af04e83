//! Clap command definition for the `qeivau` binary.

use clap::{Arg, Command};

/// Build the process-level argument parser.
pub fn build_cli() -> Command {
    Command::new("qeivau")
        .about("Interactive shell for a qeivau tagged store")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Store file to load at startup and save to by default"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("TOML store configuration"),
        )
        .arg(
            Arg::new("strict-maps")
                .long("strict-maps")
                .help("Reject malformed map text instead of skipping bad entries")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("atomic")
                .long("atomic")
                .help("Persist through a temp file and rename")
                .action(clap::ArgAction::SetTrue),
        )
}
