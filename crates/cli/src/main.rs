//! qeivau CLI - interactive shell for a tagged store.
//!
//! Two modes:
//! - **REPL mode**: `qeivau [flags]` with a TTY on stdin
//! - **Pipe mode**: `echo "set k v" | qeivau` - line-by-line from stdin
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use qeivau_storage::{PersistMode, StoreConfig, StoreError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::CliCommand;
use state::{CliError, SessionState};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };
    debug!(?config, "Resolved store config");

    let file = matches.get_one::<String>("file").map(PathBuf::from);
    let mut state = SessionState::new(&config, file.clone());

    if let Some(path) = file.as_deref() {
        if let Err(e) = load_initial(&mut state, path) {
            eprintln!("{}", format::format_error(&e));
            process::exit(1);
        }
    }

    if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state);
    } else {
        let exit_code = repl::run_pipe(&mut state);
        process::exit(exit_code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then command-line flags on top.
fn load_config(matches: &clap::ArgMatches) -> Result<StoreConfig, StoreError> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => StoreConfig::from_file(Path::new(path))?,
        None => StoreConfig::default(),
    };
    if matches.get_flag("strict-maps") {
        config = config.with_strict_maps(true);
    }
    if matches.get_flag("atomic") {
        config = config.with_persist_mode(PersistMode::Atomic);
    }
    Ok(config)
}

/// Load the `--file` store if it exists; a missing file starts empty.
fn load_initial(state: &mut SessionState, path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        debug!(path = %path.display(), "Store file does not exist yet, starting empty");
        return Ok(());
    }
    state.execute(CliCommand::Load {
        path: path.to_string_lossy().into_owned(),
    })?;
    Ok(())
}
