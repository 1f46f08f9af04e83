//! Tagged value codec.
//!
//! Encodes a [`Value`] without embedding its kind; the kind is recovered on
//! decode from surface syntax:
//!
//! | leading char | shape | required trailing char |
//! |---|---|---|
//! | `"` or `'` | quoted scalar | same quote |
//! | `[` | list | `]` |
//! | `{` | map | `}` |
//! | anything else | bare scalar | |

use super::list::ListCodec;
use super::map::{MapCodec, MapParsing};
use super::traits::ValueCodec;
use super::trim_spaces;
use crate::error::{CodecError, Result};
use crate::value::{Value, ValueKind, FLOAT_TAG, INT_TAG, UNKNOWN_TAG};

/// Codec for the general [`Value`] store.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedCodec {
    list: ListCodec<String>,
    map: MapCodec<String>,
}

impl TaggedCodec {
    /// Create a tagged codec with lenient map parsing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tagged codec with strict map parsing
    pub fn strict() -> Self {
        Self::with_map_parsing(MapParsing::Strict)
    }

    /// Create a tagged codec with explicit map parsing rules
    pub fn with_map_parsing(parsing: MapParsing) -> Self {
        Self {
            list: ListCodec::new(),
            map: MapCodec::with_parsing(parsing),
        }
    }

    fn encode_scalar(s: &str) -> String {
        if needs_quotes(s) {
            format!("\"{}\"", s)
        } else {
            s.to_string()
        }
    }
}

const OPENERS: &[char] = &['"', '\'', '[', '{'];

/// A bare scalar would decode to something else when it starts like a quote,
/// list or map, or carries whitespace that decode trims away.
fn needs_quotes(s: &str) -> bool {
    s.starts_with(OPENERS) || trim_spaces(s).len() != s.len()
}

impl ValueCodec for TaggedCodec {
    type Value = Value;

    fn encode(&self, value: &Value) -> String {
        match value {
            Value::Scalar(s) => Self::encode_scalar(s),
            Value::List(items) => self.list.encode(items),
            Value::Map(map) => self.map.encode(map),
        }
    }

    fn decode(&self, text: &str) -> Result<Value> {
        let s = trim_spaces(text);

        let Some(first) = s.chars().next() else {
            return Ok(Value::Scalar(String::new()));
        };

        match first {
            '"' | '\'' => {
                if s.len() >= 2 && s.ends_with(first) {
                    Ok(Value::Scalar(s[1..s.len() - 1].to_string()))
                } else {
                    Err(CodecError::MismatchedQuotes(text.to_string()))
                }
            }
            '[' => {
                if !s.ends_with(']') {
                    return Err(CodecError::MismatchedBrackets(text.to_string()));
                }
                self.list.decode(s).map(Value::List)
            }
            '{' => {
                if !s.ends_with('}') {
                    return Err(CodecError::MismatchedBrackets(text.to_string()));
                }
                self.map.decode(s).map(Value::Map)
            }
            _ => Ok(Value::Scalar(s.to_string())),
        }
    }

    fn tag_for(&self, value: &Value) -> &'static str {
        value.kind().type_tag()
    }

    fn expected_tag(&self) -> &'static str {
        "string|list|map"
    }

    /// The shape comes from the text, so any tag a store might have
    /// written is accepted.
    fn accepts_tag(&self, tag: &str) -> bool {
        ValueKind::from_type_tag(tag).is_some()
            || [INT_TAG, FLOAT_TAG, UNKNOWN_TAG].contains(&tag)
    }

    fn codec_id(&self) -> &'static str {
        "tagged"
    }
}
