//! Value codec trait definitions.

use std::fmt;

use crate::error::Result;

/// Value codec trait.
///
/// A store is generic over its codec: the codec fixes the value type the
/// store holds, the textual encoding of that value, and the type tags written
/// ahead of it in the persisted line.
///
/// # Type Tags
///
/// Each persisted line carries a tag (`string`, `int`, `float`, `list`,
/// `map`). On load the store rejects lines whose tag the codec does not
/// accept, and lines whose decoded value reports a different tag than the
/// one declared.
pub trait ValueCodec {
    /// Value type produced and consumed by this codec
    type Value: Clone + PartialEq + fmt::Debug;

    /// Encode a value to its textual form.
    fn encode(&self, value: &Self::Value) -> String;

    /// Decode a value from its textual form.
    ///
    /// Returns an error if the text is not a valid encoding.
    fn decode(&self, text: &str) -> Result<Self::Value>;

    /// Type tag written for `value`.
    fn tag_for(&self, value: &Self::Value) -> &'static str;

    /// Tag description used in type mismatch diagnostics.
    fn expected_tag(&self) -> &'static str;

    /// Whether a line declaring `tag` may be decoded by this codec.
    fn accepts_tag(&self, tag: &str) -> bool {
        tag == self.expected_tag()
    }

    /// Unique codec identifier.
    fn codec_id(&self) -> &'static str;
}
