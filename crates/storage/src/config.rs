//! Store configuration via TOML
//!
//! Collaborators that open stores from a command line or a service usually
//! want the persistence knobs in a file rather than in code. `StoreConfig`
//! reads them from TOML; every field has a default, so an empty file is a
//! valid configuration.

use std::path::Path;

use qeivau_core::{MapParsing, TaggedCodec};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// How `persist` writes the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistMode {
    /// Truncate and write the destination in place.
    ///
    /// A crash mid-write leaves a partial file.
    #[default]
    Direct,
    /// Write a sibling `<file>.tmp`, fsync it, then rename over the
    /// destination.
    Atomic,
}

/// Store configuration.
///
/// # Example
///
/// ```toml
/// # "direct" (default) or "atomic"
/// persist_mode = "atomic"
///
/// # Reject map text lacking braces or containing pieces without ':'
/// strict_maps = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// How `persist` writes files.
    #[serde(default)]
    pub persist_mode: PersistMode,
    /// Strict map parsing for tagged stores.
    #[serde(default)]
    pub strict_maps: bool,
}

impl StoreConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set persist mode (builder pattern).
    pub fn with_persist_mode(mut self, mode: PersistMode) -> Self {
        self.persist_mode = mode;
        self
    }

    /// Enable or disable strict map parsing (builder pattern).
    pub fn with_strict_maps(mut self, strict: bool) -> Self {
        self.strict_maps = strict;
        self
    }

    /// Map parsing rules implied by `strict_maps`.
    pub fn map_parsing(&self) -> MapParsing {
        if self.strict_maps {
            MapParsing::Strict
        } else {
            MapParsing::Lenient
        }
    }

    /// Tagged codec configured with this config's map parsing.
    pub fn tagged_codec(&self) -> TaggedCodec {
        TaggedCodec::with_map_parsing(self.map_parsing())
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| StoreError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            StoreError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# qeivau store configuration
#
# Persist mode: "direct" (default) or "atomic"
#   "direct" = truncate and write in place, a crash mid-write leaves a partial file
#   "atomic" = write <file>.tmp, fsync, rename over the destination
persist_mode = "direct"

# Strict map parsing (default: false)
#   false = braces optional, pieces without ':' are skipped
#   true  = braces required, every piece must be key:value
strict_maps = false
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_direct_and_lenient() {
        let config = StoreConfig::default();
        assert_eq!(config.persist_mode, PersistMode::Direct);
        assert!(!config.strict_maps);
        assert_eq!(config.map_parsing(), MapParsing::Lenient);
    }

    #[test]
    fn builder_pattern() {
        let config = StoreConfig::new()
            .with_persist_mode(PersistMode::Atomic)
            .with_strict_maps(true);
        assert_eq!(config.persist_mode, PersistMode::Atomic);
        assert_eq!(config.map_parsing(), MapParsing::Strict);
    }

    #[test]
    fn parse_empty_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn parse_atomic() {
        let config = StoreConfig::from_toml_str("persist_mode = \"atomic\"").unwrap();
        assert_eq!(config.persist_mode, PersistMode::Atomic);
    }

    #[test]
    fn parse_invalid_mode_fails() {
        let result = StoreConfig::from_toml_str("persist_mode = \"sometimes\"");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[test]
    fn default_toml_parses_to_default() {
        let config = StoreConfig::from_toml_str(StoreConfig::default_toml()).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn from_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("qeivau.toml");
        let config = StoreConfig::new().with_strict_maps(true);
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(StoreConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn from_file_missing() {
        let dir = TempDir::new().unwrap();
        let result = StoreConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
