//! Core types and codecs for qeivau
//!
//! This crate defines the foundational pieces used by the store:
//! - Value: tagged union of scalar, list and map values
//! - Scalar: textual/numeric scalar kinds with their type tags
//! - ValueCodec: encode/decode capability used by the store
//! - Codecs: ScalarCodec, ListCodec, MapCodec, TaggedCodec
//! - CodecError: decode failures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod value;

pub use codec::{ListCodec, MapCodec, MapParsing, ScalarCodec, TaggedCodec, ValueCodec};
pub use error::{CodecError, Result};
pub use value::{Scalar, Value, ValueKind};
