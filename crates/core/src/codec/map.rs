//! Map codec.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::traits::ValueCodec;
use super::trim_spaces;
use crate::error::{CodecError, Result};
use crate::value::{Scalar, MAP_TAG};

/// How map text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapParsing {
    /// Braces are optional and pieces without a `:` are skipped.
    ///
    /// Compatible with every file the store has ever written.
    #[default]
    Lenient,
    /// Braces are required and every piece must contain a `:`.
    ///
    /// Empty keys are kept, as in lenient mode, so every encoded map
    /// decodes again.
    Strict,
}

/// Codec for a string-keyed map of scalars of kind `T`.
///
/// Encodes as `{k1:v1,k2:v2}` in key order. Decoding splits on `,`, then
/// each piece on its first `:`, trimming both sides. Later duplicates win.
pub struct MapCodec<T> {
    parsing: MapParsing,
    _element: PhantomData<fn() -> T>,
}

impl<T: Scalar> MapCodec<T> {
    /// Create a lenient map codec
    pub fn new() -> Self {
        Self::with_parsing(MapParsing::Lenient)
    }

    /// Create a strict map codec
    pub fn strict() -> Self {
        Self::with_parsing(MapParsing::Strict)
    }

    /// Create a map codec with explicit parsing rules
    pub fn with_parsing(parsing: MapParsing) -> Self {
        Self {
            parsing,
            _element: PhantomData,
        }
    }

    /// Parsing rules in effect
    pub fn parsing(&self) -> MapParsing {
        self.parsing
    }

    fn decode_lenient(&self, text: &str) -> Result<BTreeMap<String, T>> {
        let interior = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(text);

        let mut map = BTreeMap::new();
        for piece in interior.split(',') {
            if let Some((key, value)) = trim_spaces(piece).split_once(':') {
                map.insert(
                    trim_spaces(key).to_string(),
                    T::from_text(trim_spaces(value))?,
                );
            }
        }
        Ok(map)
    }

    fn decode_strict(&self, text: &str) -> Result<BTreeMap<String, T>> {
        let interior = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| CodecError::InvalidMapFormat(text.to_string()))?;

        let mut map = BTreeMap::new();
        if trim_spaces(interior).is_empty() {
            return Ok(map);
        }
        for piece in interior.split(',') {
            let piece = trim_spaces(piece);
            let (key, value) = piece
                .split_once(':')
                .ok_or_else(|| CodecError::InvalidMapEntry(piece.to_string()))?;
            map.insert(
                trim_spaces(key).to_string(),
                T::from_text(trim_spaces(value))?,
            );
        }
        Ok(map)
    }
}

impl<T: Scalar> Default for MapCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MapCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MapCodec<T> {}

impl<T: Scalar> fmt::Debug for MapCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapCodec")
            .field("element", &T::TYPE_TAG)
            .field("parsing", &self.parsing)
            .finish()
    }
}

impl<T: Scalar> ValueCodec for MapCodec<T> {
    type Value = BTreeMap<String, T>;

    fn encode(&self, value: &BTreeMap<String, T>) -> String {
        let pairs: Vec<String> = value
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v.to_text()))
            .collect();
        format!("{{{}}}", pairs.join(","))
    }

    fn decode(&self, text: &str) -> Result<BTreeMap<String, T>> {
        match self.parsing {
            MapParsing::Lenient => self.decode_lenient(text),
            MapParsing::Strict => self.decode_strict(text),
        }
    }

    fn tag_for(&self, _value: &BTreeMap<String, T>) -> &'static str {
        MAP_TAG
    }

    fn expected_tag(&self) -> &'static str {
        MAP_TAG
    }

    fn codec_id(&self) -> &'static str {
        "map"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode() {
        let codec = MapCodec::<String>::new();
        assert_eq!(
            codec.encode(&map(&[("b", "2"), ("a", "1")])),
            "{a:1,b:2}"
        );
        assert_eq!(codec.encode(&BTreeMap::new()), "{}");
    }

    #[test]
    fn test_decode() {
        let codec = MapCodec::<String>::new();
        assert_eq!(
            codec.decode("{ a : 1 , b:2 }").unwrap(),
            map(&[("a", "1"), ("b", "2")])
        );
        assert!(codec.decode("{}").unwrap().is_empty());
    }

    #[test]
    fn test_lenient_braces_optional() {
        let codec = MapCodec::<String>::new();
        assert_eq!(codec.decode("a:1,b:2").unwrap(), map(&[("a", "1"), ("b", "2")]));
        assert!(codec.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_lenient_skips_pieces_without_colon() {
        let codec = MapCodec::<String>::new();
        assert_eq!(
            codec.decode("{a:1,junk,,b:2}").unwrap(),
            map(&[("a", "1"), ("b", "2")])
        );
    }

    #[test]
    fn test_value_splits_on_first_colon() {
        let codec = MapCodec::<String>::new();
        assert_eq!(
            codec.decode("{url:http://x}").unwrap(),
            map(&[("url", "http://x")])
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let codec = MapCodec::<String>::new();
        assert_eq!(codec.decode("{a:1,a:2}").unwrap(), map(&[("a", "2")]));
    }

    #[test]
    fn test_numeric_values() {
        let codec = MapCodec::<i64>::new();
        let decoded = codec.decode("{x:1,y:-2}").unwrap();
        assert_eq!(decoded.get("x"), Some(&1));
        assert_eq!(decoded.get("y"), Some(&-2));
        assert!(matches!(
            codec.decode("{x:one}"),
            Err(CodecError::InvalidNumber { kind: "int", .. })
        ));
    }

    #[test]
    fn test_strict_requires_braces() {
        let codec = MapCodec::<String>::strict();
        assert_eq!(codec.parsing(), MapParsing::Strict);
        assert_eq!(
            codec.decode("a:1"),
            Err(CodecError::InvalidMapFormat("a:1".to_string()))
        );
        assert!(codec.decode("{ }").unwrap().is_empty());
    }

    #[test]
    fn test_empty_key_round_trips_in_both_modes() {
        let value = map(&[("", "v"), ("a", "1")]);
        for codec in [MapCodec::<String>::new(), MapCodec::strict()] {
            let encoded = codec.encode(&value);
            assert_eq!(encoded, "{:v,a:1}");
            assert_eq!(codec.decode(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_strict_rejects_bad_entries() {
        let codec = MapCodec::<String>::strict();
        assert_eq!(
            codec.decode("{a:1,junk}"),
            Err(CodecError::InvalidMapEntry("junk".to_string()))
        );
        assert!(matches!(
            codec.decode("{a:1,,b:2}"),
            Err(CodecError::InvalidMapEntry(_))
        ));
        assert_eq!(
            codec.decode("{a:1,b:2}").unwrap(),
            map(&[("a", "1"), ("b", "2")])
        );
    }
}
