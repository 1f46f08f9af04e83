//! Value types for qeivau
//!
//! This module defines:
//! - Value: tagged union stored by the general (tagged) store
//! - ValueKind: discriminant of a Value, carrying its type tag
//! - Scalar: the scalar kinds a typed store can hold
//!
//! ## Value Model
//!
//! A Value has exactly 3 shapes: Scalar, List, Map. Lists and maps hold
//! strings only; there are no nested composites. Numeric scalars exist only
//! in the typed store variants (`ScalarCodec<i64>` and friends).

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CodecError, Result};

/// Type tag written for string scalars
pub const STRING_TAG: &str = "string";
/// Type tag written for integer scalars
pub const INT_TAG: &str = "int";
/// Type tag written for floating-point scalars
pub const FLOAT_TAG: &str = "float";
/// Type tag written for lists
pub const LIST_TAG: &str = "list";
/// Type tag written for maps
pub const MAP_TAG: &str = "map";
/// Type tag written by stores whose element type has no name of its own
pub const UNKNOWN_TAG: &str = "unknown";

/// Tagged value held by the general store
///
/// The shape is recovered from surface syntax on decode, see
/// [`TaggedCodec`](crate::codec::TaggedCodec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single string
    Scalar(String),
    /// Ordered sequence of strings
    List(Vec<String>),
    /// String to string mapping, keys unique
    Map(BTreeMap<String, String>),
}

/// Discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Value::Scalar`
    Scalar,
    /// `Value::List`
    List,
    /// `Value::Map`
    Map,
}

impl ValueKind {
    /// Type tag recorded in the persisted line for this kind
    pub fn type_tag(self) -> &'static str {
        match self {
            ValueKind::Scalar => STRING_TAG,
            ValueKind::List => LIST_TAG,
            ValueKind::Map => MAP_TAG,
        }
    }

    /// Parse a type tag back into a kind
    ///
    /// Only the tags the tagged store writes are recognized; numeric tags
    /// belong to the typed scalar stores.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            STRING_TAG => Some(ValueKind::Scalar),
            LIST_TAG => Some(ValueKind::List),
            MAP_TAG => Some(ValueKind::Map),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

impl Value {
    /// Get the kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Get as &str if this is a Scalar value
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[String] if this is a List value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get as &BTreeMap if this is a Map value
    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(l: Vec<String>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<String, String>> for Value {
    fn from(m: BTreeMap<String, String>) -> Self {
        Value::Map(m)
    }
}

// ============================================================================
// Scalar kinds
// ============================================================================

/// A scalar kind a typed store can hold
///
/// Strings pass through unchanged. Numbers use Rust's `Display`, which is
/// base-10 without leading zeros and round-trips exactly through `FromStr`.
pub trait Scalar: Clone + PartialEq + fmt::Debug {
    /// Type tag recorded in the persisted line
    const TYPE_TAG: &'static str;

    /// Plain textual form
    fn to_text(&self) -> String;

    /// Parse the textual form; the whole input must be consumed
    fn from_text(text: &str) -> Result<Self>;
}

impl Scalar for String {
    const TYPE_TAG: &'static str = STRING_TAG;

    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

macro_rules! numeric_scalar {
    ($ty:ty, $tag:expr) => {
        impl Scalar for $ty {
            const TYPE_TAG: &'static str = $tag;

            fn to_text(&self) -> String {
                self.to_string()
            }

            fn from_text(text: &str) -> Result<Self> {
                text.parse::<$ty>().map_err(|_| CodecError::InvalidNumber {
                    kind: $tag,
                    text: text.to_string(),
                })
            }
        }
    };
}

numeric_scalar!(i32, INT_TAG);
numeric_scalar!(i64, INT_TAG);
numeric_scalar!(f32, FLOAT_TAG);
numeric_scalar!(f64, FLOAT_TAG);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::from("x").kind().type_tag(), "string");
        assert_eq!(Value::List(vec![]).kind().type_tag(), "list");
        assert_eq!(Value::Map(BTreeMap::new()).kind().type_tag(), "map");
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ValueKind::from_type_tag("string"), Some(ValueKind::Scalar));
        assert_eq!(ValueKind::from_type_tag("list"), Some(ValueKind::List));
        assert_eq!(ValueKind::from_type_tag("map"), Some(ValueKind::Map));
        assert_eq!(ValueKind::from_type_tag("int"), None);
    }

    #[test]
    fn test_accessors() {
        let v = Value::List(vec!["a".into()]);
        assert!(v.as_scalar().is_none());
        assert_eq!(v.as_list(), Some(&["a".to_string()][..]));
        assert!(v.as_map().is_none());
    }

    #[test]
    fn test_string_scalar_passthrough() {
        assert_eq!("hello world".to_string().to_text(), "hello world");
        assert_eq!(String::from_text(" spaced ").unwrap(), " spaced ");
    }

    #[test]
    fn test_int_scalar() {
        assert_eq!(42i64.to_text(), "42");
        assert_eq!((-7i32).to_text(), "-7");
        assert_eq!(i64::from_text("42").unwrap(), 42);
        assert_eq!(i32::from_text("-12").unwrap(), -12);
    }

    #[test]
    fn test_int_rejects_trailing_garbage() {
        assert!(matches!(
            i64::from_text("42abc"),
            Err(CodecError::InvalidNumber { kind: "int", .. })
        ));
        assert!(i64::from_text("thirty").is_err());
        assert!(i64::from_text("").is_err());
        assert!(i64::from_text(" 42").is_err());
        assert!(i32::from_text("1.5").is_err());
    }

    #[test]
    fn test_float_scalar() {
        assert_eq!(4.5f64.to_text(), "4.5");
        assert_eq!(1.0f64.to_text(), "1");
        assert_eq!(f64::from_text("4.5").unwrap(), 4.5);
        assert_eq!(f64::from_text("1e3").unwrap(), 1000.0);
        assert_eq!(f32::from_text("0.25").unwrap(), 0.25);
    }

    #[test]
    fn test_float_rejects_garbage() {
        assert!(matches!(
            f64::from_text("4.5kg"),
            Err(CodecError::InvalidNumber { kind: "float", .. })
        ));
        assert!(f32::from_text("abc").is_err());
    }

    #[test]
    fn test_float_roundtrip_precision() {
        for f in [0.1f64, 1.0 / 3.0, -2.5e-8, 1.7976931348623157e308] {
            assert_eq!(f64::from_text(&f.to_text()).unwrap(), f);
        }
    }
}
