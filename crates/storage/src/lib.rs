//! Storage layer for qeivau
//!
//! This crate implements the typed store on top of the core codecs:
//! - Store: in-memory map generic over its `ValueCodec`
//! - Line format: `key:type=encoded-value`, one entry per line
//! - StoreConfig: persist mode and map strictness, loadable from TOML
//!
//! # Store Variants
//!
//! | alias | codec | tags |
//! |---|---|---|
//! | `StringStore` | `ScalarCodec<String>` | `string` |
//! | `IntStore` | `ScalarCodec<i64>` | `int` |
//! | `FloatStore` | `ScalarCodec<f64>` | `float` |
//! | `ListStore` | `ListCodec<String>` | `list` |
//! | `MapStore` | `MapCodec<String>` | `map` |
//! | `TaggedStore` | `TaggedCodec` | `string`, `list`, `map` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod format;
pub mod store;

pub use config::{PersistMode, StoreConfig};
pub use error::{Result, StoreError};
pub use store::Store;

use qeivau_core::{ListCodec, MapCodec, ScalarCodec, TaggedCodec};

/// Store of plain strings
pub type StringStore = Store<ScalarCodec<String>>;
/// Store of 64-bit integers
pub type IntStore = Store<ScalarCodec<i64>>;
/// Store of 64-bit floats
pub type FloatStore = Store<ScalarCodec<f64>>;
/// Store of string lists
pub type ListStore = Store<ListCodec<String>>;
/// Store of string-to-string maps
pub type MapStore = Store<MapCodec<String>>;
/// Store of tagged values (scalar, list or map per key)
pub type TaggedStore = Store<TaggedCodec>;

impl TaggedStore {
    /// Create a tagged store honoring every setting in `config`
    pub fn from_config(config: &StoreConfig) -> Self {
        Store::with_config(config.tagged_codec(), config)
    }
}
