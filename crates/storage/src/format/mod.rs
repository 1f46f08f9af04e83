//! On-disk text format for persisted stores.
//!
//! One entry per line, `\n` terminated:
//!
//! ```text
//! <key>:<type>=<encoded-value>
//! ```
//!
//! There is no header and no trailing metadata. The first `:` ends the key
//! and the first `=` ends the type tag, so keys must not contain either
//! character. The encoded value may contain both.
//!
//! # Module Structure
//!
//! - `line`: parsing and rendering of a single entry line

pub mod line;

pub use line::{format_line, parse_line, validate_key, Line};
