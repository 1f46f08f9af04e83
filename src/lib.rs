//! qeivau - typed in-process key-value store with a text persistence format
//!
//! A store holds values of one kind, chosen by its codec: plain strings,
//! integers, floats, string lists, string maps, or tagged values that mix
//! all three shapes. Stores persist to a line-oriented file, one
//! `key:type=encoded-value` entry per line.
//!
//! # Quick Start
//!
//! ```no_run
//! use qeivau::{TaggedStore, Value};
//!
//! let mut store = TaggedStore::new();
//! store.set("name", Value::from("Alice"));
//! store.set("tags", Value::List(vec!["a".into(), "b".into()]));
//! store.persist("store.txt")?;
//!
//! let mut loaded = TaggedStore::new();
//! loaded.load("store.txt")?;
//! assert_eq!(loaded.get("name"), Some(&Value::from("Alice")));
//! # Ok::<(), qeivau::StoreError>(())
//! ```
//!
//! # Architecture
//!
//! - `qeivau-core`: values and codecs, no I/O
//! - `qeivau-storage`: the store, its file format and configuration

pub use qeivau_core::{
    codec, CodecError, ListCodec, MapCodec, MapParsing, Scalar, ScalarCodec, TaggedCodec, Value,
    ValueCodec, ValueKind,
};
pub use qeivau_storage::{
    format, FloatStore, IntStore, ListStore, MapStore, PersistMode, Result, Store, StoreConfig,
    StoreError, StringStore, TaggedStore,
};
