//! Value codecs.
//!
//! A codec converts a typed value to its textual form and back. The store
//! delegates to its codec on `persist`/`load`; codecs themselves hold no
//! state beyond parsing options and perform no I/O.
//!
//! # Grammar
//!
//! - scalar: plain text (`hello`, `42`, `4.5`)
//! - list: `[a,b,c]`, empty list is `[]`
//! - map: `{k1:v1,k2:v2}`
//!
//! No escaping is performed. Commas inside list elements or map values are
//! indistinguishable from separators.
//!
//! # Usage
//!
//! ```
//! use qeivau_core::codec::{ListCodec, ValueCodec};
//!
//! let codec = ListCodec::<i64>::new();
//! let text = codec.encode(&vec![1, 2, 3]);
//! assert_eq!(text, "[1,2,3]");
//! assert_eq!(codec.decode("[1, 2, 3]").unwrap(), vec![1, 2, 3]);
//! ```

mod list;
mod map;
mod scalar;
mod tagged;
mod traits;

pub use list::ListCodec;
pub use map::{MapCodec, MapParsing};
pub use scalar::ScalarCodec;
pub use tagged::TaggedCodec;
pub use traits::ValueCodec;

/// Characters stripped from list elements, map keys and map values.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

pub(crate) fn trim_spaces(s: &str) -> &str {
    s.trim_matches(TRIM_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_spaces() {
        assert_eq!(trim_spaces("  a b \t"), "a b");
        assert_eq!(trim_spaces("\r\nx\n"), "x");
        assert_eq!(trim_spaces("   "), "");
        assert_eq!(trim_spaces(""), "");
    }

    #[test]
    fn test_trim_keeps_other_whitespace() {
        // Only space, tab, CR and LF are trimmed
        assert_eq!(trim_spaces("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }
}
