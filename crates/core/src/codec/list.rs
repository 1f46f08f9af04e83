//! List codec.

use std::fmt;
use std::marker::PhantomData;

use super::traits::ValueCodec;
use super::trim_spaces;
use crate::error::{CodecError, Result};
use crate::value::{Scalar, LIST_TAG};

/// Codec for an ordered sequence of scalars of kind `T`.
///
/// Encodes as `[e1,e2,...]`. Decoding splits the bracket interior on `,`,
/// trims each piece and decodes it as a `T`.
pub struct ListCodec<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T: Scalar> ListCodec<T> {
    /// Create a new list codec
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T: Scalar> Default for ListCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ListCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListCodec<T> {}

impl<T: Scalar> fmt::Debug for ListCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListCodec<{}>", T::TYPE_TAG)
    }
}

impl<T: Scalar> ValueCodec for ListCodec<T> {
    type Value = Vec<T>;

    fn encode(&self, value: &Vec<T>) -> String {
        let items: Vec<String> = value.iter().map(Scalar::to_text).collect();
        format!("[{}]", items.join(","))
    }

    fn decode(&self, text: &str) -> Result<Vec<T>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let interior = text
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| CodecError::InvalidListFormat(text.to_string()))?;

        let mut pieces: Vec<&str> = interior.split(',').collect();
        // Only the final piece is dropped when blank: `[a,]` is one element,
        // `[a,,b]` is three.
        let last = pieces.pop().map(trim_spaces).unwrap_or_default();

        let mut items = Vec::with_capacity(pieces.len() + 1);
        for piece in pieces {
            items.push(T::from_text(trim_spaces(piece))?);
        }
        if !last.is_empty() {
            items.push(T::from_text(last)?);
        }
        Ok(items)
    }

    fn tag_for(&self, _value: &Vec<T>) -> &'static str {
        LIST_TAG
    }

    fn expected_tag(&self) -> &'static str {
        LIST_TAG
    }

    fn codec_id(&self) -> &'static str {
        "list"
    }
}
