//! Session wrapper around a tagged store.
//!
//! Holds the store and the default file for `save`. Typed-in values are
//! decoded with the store's own tagged codec.

use std::path::PathBuf;

use qeivau_core::{TaggedCodec, Value, ValueCodec};
use qeivau_storage::{StoreConfig, StoreError, TaggedStore};
use thiserror::Error;
use tracing::debug;

use crate::parse::CliCommand;

/// Errors surfaced to the shell user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command was understood but cannot run as given
    #[error("{0}")]
    Usage(String),

    /// Store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Command succeeded with nothing to show
    Ok,
    /// Value for a `get`
    Value(Value),
    /// `get` on an absent key
    NotFound,
    /// Answer to `has`
    Bool(bool),
    /// `remove` deleted the key
    Removed,
    /// Answer to `keys`, sorted
    Keys(Vec<String>),
    /// `load` installed this many entries
    Loaded(usize),
    /// `help` was requested
    Help,
    /// Session should end
    Exit,
}

/// Shell session state.
pub struct SessionState {
    store: TaggedStore,
    file: Option<PathBuf>,
}

impl SessionState {
    /// Create a session with an empty store built from `config`.
    pub fn new(config: &StoreConfig, file: Option<PathBuf>) -> Self {
        Self {
            store: TaggedStore::from_config(config),
            file,
        }
    }

    /// Default file for `save` without an argument.
    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    /// Sorted keys, used by the prompt completer.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = self.store.keys();
        keys.sort();
        keys
    }

    /// Codec used for both parsing input and rendering output.
    pub fn codec(&self) -> &TaggedCodec {
        self.store.codec()
    }

    /// Execute one command.
    pub fn execute(&mut self, cmd: CliCommand) -> Result<Output, CliError> {
        match cmd {
            CliCommand::Set { key, value } => {
                if key.is_empty() {
                    return Err(CliError::Usage("Key must not be empty".to_string()));
                }
                let value = self
                    .store
                    .codec()
                    .decode(&value)
                    .map_err(|source| StoreError::Deserialization {
                        key: key.clone(),
                        source,
                    })?;
                self.store.set(key, value);
                Ok(Output::Ok)
            }
            CliCommand::Get { key } => Ok(match self.store.get(&key) {
                Some(value) => Output::Value(value.clone()),
                None => Output::NotFound,
            }),
            CliCommand::Remove { key } => Ok(if self.store.remove(&key) {
                Output::Removed
            } else {
                Output::NotFound
            }),
            CliCommand::Has { key } => Ok(Output::Bool(self.store.has(&key))),
            CliCommand::Keys => Ok(Output::Keys(self.keys())),
            CliCommand::Save { path } => {
                let path = match path.map(PathBuf::from).or_else(|| self.file.clone()) {
                    Some(path) => path,
                    None => {
                        return Err(CliError::Usage(
                            "No file to save to. Use 'save <file>' or start with --file."
                                .to_string(),
                        ))
                    }
                };
                self.store.persist(&path)?;
                debug!(path = %path.display(), "Saved session store");
                self.file = Some(path);
                Ok(Output::Ok)
            }
            CliCommand::Load { path } => {
                let path = PathBuf::from(path);
                let loaded = self.store.load(&path)?;
                self.file = Some(path);
                Ok(Output::Loaded(loaded))
            }
            CliCommand::Clear => {
                self.store.clear();
                Ok(Output::Ok)
            }
            CliCommand::Help => Ok(Output::Help),
            CliCommand::Exit => Ok(Output::Exit),
        }
    }
}
