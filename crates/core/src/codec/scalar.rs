//! Scalar codec.

use std::fmt;
use std::marker::PhantomData;

use super::traits::ValueCodec;
use crate::error::Result;
use crate::value::Scalar;

/// Codec for a single scalar of kind `T`.
///
/// Strings pass through unchanged; numbers must parse completely.
///
/// # Example
///
/// ```
/// use qeivau_core::codec::{ScalarCodec, ValueCodec};
///
/// let codec = ScalarCodec::<i64>::new();
/// assert_eq!(codec.encode(&42), "42");
/// assert_eq!(codec.decode("42").unwrap(), 42);
/// assert!(codec.decode("thirty").is_err());
/// ```
pub struct ScalarCodec<T> {
    _kind: PhantomData<fn() -> T>,
}

impl<T: Scalar> ScalarCodec<T> {
    /// Create a new scalar codec
    pub fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<T: Scalar> Default for ScalarCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ScalarCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalarCodec<T> {}

impl<T: Scalar> fmt::Debug for ScalarCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarCodec<{}>", T::TYPE_TAG)
    }
}

impl<T: Scalar> ValueCodec for ScalarCodec<T> {
    type Value = T;

    fn encode(&self, value: &T) -> String {
        value.to_text()
    }

    fn decode(&self, text: &str) -> Result<T> {
        T::from_text(text)
    }

    fn tag_for(&self, _value: &T) -> &'static str {
        T::TYPE_TAG
    }

    fn expected_tag(&self) -> &'static str {
        T::TYPE_TAG
    }

    fn codec_id(&self) -> &'static str {
        "scalar"
    }
}
