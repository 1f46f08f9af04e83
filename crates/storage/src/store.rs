//! Store: typed key-value map with file persistence
//!
//! ## Design
//!
//! `Store<C>` owns a hash map from key to `C::Value` and delegates all
//! textual conversion to its codec `C`. The map itself is plain in-memory
//! state; nothing touches disk outside `persist` and `load`.
//!
//! ## Persistence
//!
//! - `persist` renders every entry first, then writes the whole file in one
//!   call. Key validation happens before the destination is opened, so an
//!   unpersistable key never truncates an existing file.
//! - `load` is additive: keys absent from the file are left alone. It stops
//!   at the first failing line and keeps entries installed from earlier
//!   lines (no rollback).
//!
//! ## Thread Safety
//!
//! No internal locking. Mutation takes `&mut self`; callers sharing a store
//! across threads must wrap it themselves.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use qeivau_core::ValueCodec;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::config::{PersistMode, StoreConfig};
use crate::error::{Result, StoreError};
use crate::format::{format_line, parse_line, validate_key};

/// Typed key-value store
///
/// # Example
///
/// ```
/// use qeivau_storage::IntStore;
///
/// let mut store = IntStore::new();
/// store.set("age", 30);
/// assert_eq!(store.get("age"), Some(&30));
/// assert!(store.remove("age"));
/// assert!(!store.has("age"));
/// ```
#[derive(Debug, Clone)]
pub struct Store<C: ValueCodec> {
    entries: FxHashMap<String, C::Value>,
    codec: C,
    persist_mode: PersistMode,
}

impl<C: ValueCodec + Default> Store<C> {
    /// Create an empty store with the default codec
    pub fn new() -> Self {
        Self::with_codec(C::default())
    }
}

impl<C: ValueCodec + Default> Default for Store<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ValueCodec> Store<C> {
    /// Create an empty store with an explicit codec
    pub fn with_codec(codec: C) -> Self {
        Self {
            entries: FxHashMap::default(),
            codec,
            persist_mode: PersistMode::Direct,
        }
    }

    /// Create an empty store with an explicit codec and configuration
    pub fn with_config(codec: C, config: &StoreConfig) -> Self {
        Self::with_codec(codec).with_persist_mode(config.persist_mode)
    }

    /// Set persist mode (builder pattern)
    pub fn with_persist_mode(mut self, mode: PersistMode) -> Self {
        self.persist_mode = mode;
        self
    }

    /// Get the codec
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Get the persist mode
    pub fn persist_mode(&self) -> PersistMode {
        self.persist_mode
    }

    // ========== Map Operations ==========

    /// Insert or overwrite the value for `key`
    pub fn set(&mut self, key: impl Into<String>, value: C::Value) {
        self.entries.insert(key.into(), value);
    }

    /// Get the value for `key`, or `None` if absent
    pub fn get(&self, key: &str) -> Option<&C::Value> {
        self.entries.get(key)
    }

    /// Remove `key`. Returns true iff it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Check if `key` is present
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, in unspecified order
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over entries, in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &C::Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ========== Persistence ==========

    /// Render the whole store in the persisted text format.
    ///
    /// # Errors
    ///
    /// `KeyEmpty` / `InvalidKey` for keys that cannot be loaded back, and
    /// `InvalidValue` when an encoded value contains a line break.
    pub fn to_text(&self) -> Result<String> {
        let mut out = String::new();
        for (key, value) in &self.entries {
            validate_key(key)?;
            let encoded = self.codec.encode(value);
            if encoded.contains(&['\n', '\r'][..]) {
                return Err(StoreError::InvalidValue(key.clone()));
            }
            out.push_str(&format_line(key, self.codec.tag_for(value), &encoded));
        }
        Ok(out)
    }

    /// Write every entry to `path`, one `key:type=value` line each.
    ///
    /// The file is overwritten wholesale.
    ///
    /// # Errors
    ///
    /// - `FileOpen` if the destination cannot be opened for writing
    /// - `KeyEmpty` / `InvalidKey` / `InvalidValue`, see [`Store::to_text`]
    /// - `Io` if writing fails after the file was opened
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_text()?;

        match self.persist_mode {
            PersistMode::Direct => write_direct(path, &text)?,
            PersistMode::Atomic => write_atomic(path, &text)?,
        }

        debug!(
            path = %path.display(),
            entries = self.entries.len(),
            mode = ?self.persist_mode,
            codec = self.codec.codec_id(),
            "Persisted store"
        );
        Ok(())
    }

    /// Read entries from `path` and install them.
    ///
    /// Returns the number of entries installed.
    ///
    /// # Errors
    ///
    /// - `FileOpen` if `path` cannot be opened for reading
    /// - any error from [`Store::load_from_reader`]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Opened store file for loading");

        let loaded = self.load_from_reader(BufReader::new(file)).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Load aborted");
            e
        })?;

        debug!(path = %path.display(), entries = loaded, "Loaded store");
        Ok(loaded)
    }

    /// Read entries from any buffered reader and install them.
    ///
    /// Lines are processed in order; the first failing line aborts the load
    /// and entries from earlier lines stay installed.
    ///
    /// # Errors
    ///
    /// - `MalformedLine` / `KeyEmpty` for lines without `key:type=value`
    /// - `TypeMismatch` if the tag is not accepted by the codec
    /// - `Deserialization` if the value text does not decode
    /// - `Io` if reading fails
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut loaded = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let (key, value) = self.decode_line(&line, index + 1)?;
            self.entries.insert(key, value);
            loaded += 1;
        }
        Ok(loaded)
    }

    fn decode_line(&self, text: &str, line_no: usize) -> Result<(String, C::Value)> {
        let line = parse_line(text, line_no)?;

        if !self.codec.accepts_tag(line.tag) {
            return Err(StoreError::TypeMismatch {
                key: line.key.to_string(),
                expected: self.codec.expected_tag().to_string(),
                found: line.tag.to_string(),
            });
        }

        let value =
            self.codec
                .decode(line.encoded)
                .map_err(|source| StoreError::Deserialization {
                    key: line.key.to_string(),
                    source,
                })?;

        Ok((line.key.to_string(), value))
    }
}

fn write_direct(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|source| StoreError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn write_synced(mut file: File, text: &str) -> io::Result<()> {
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let temp_path = temp_path(path);

    // Clean up stale temp file from a previous failed attempt
    if temp_path.exists() {
        warn!(path = %temp_path.display(), "Removing stale temp file");
        let _ = fs::remove_file(&temp_path);
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|source| StoreError::FileOpen {
            path: temp_path.clone(),
            source,
        })?;

    let written = write_synced(file, text).and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = written {
        warn!(
            temp_path = %temp_path.display(),
            error = %e,
            "Atomic persist failed, cleaning up temp file"
        );
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::Io(e));
    }
    Ok(())
}
