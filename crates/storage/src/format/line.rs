//! Entry line format.

use crate::error::{Result, StoreError};

/// A parsed `key:type=value` line, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Text before the first `:`
    pub key: &'a str,
    /// Text between the first `:` and the first `=`
    pub tag: &'a str,
    /// Everything after the first `=`
    pub encoded: &'a str,
}

/// Split a line into key, type tag and encoded value.
///
/// `line_no` is 1-based and only used for diagnostics.
///
/// # Errors
///
/// - `MalformedLine` if `:` or `=` is missing, or `=` comes first
/// - `KeyEmpty` if nothing precedes the `:`
pub fn parse_line(line: &str, line_no: usize) -> Result<Line<'_>> {
    let (colon, eq) = match (line.find(':'), line.find('=')) {
        (Some(colon), Some(eq)) if colon < eq => (colon, eq),
        _ => {
            return Err(StoreError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })
        }
    };

    let key = &line[..colon];
    if key.is_empty() {
        return Err(StoreError::KeyEmpty { line: line_no });
    }

    Ok(Line {
        key,
        tag: &line[colon + 1..eq],
        encoded: &line[eq + 1..],
    })
}

/// Render one entry line, including the trailing `\n`.
pub fn format_line(key: &str, tag: &str, encoded: &str) -> String {
    format!("{}:{}={}\n", key, tag, encoded)
}

/// Check that `key` survives a persist/load cycle.
///
/// # Errors
///
/// - `KeyEmpty` for the empty key
/// - `InvalidKey` if the key contains `:`, `=`, `\n` or `\r`
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::KeyEmpty { line: 0 });
    }
    if key.contains(&[':', '=', '\n', '\r'][..]) {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let line = parse_line("name:string=paulo chaves", 1).unwrap();
        assert_eq!(line.key, "name");
        assert_eq!(line.tag, "string");
        assert_eq!(line.encoded, "paulo chaves");
    }

    #[test]
    fn test_parse_value_with_separators() {
        let line = parse_line("m:map={a:1,b:x=y}", 1).unwrap();
        assert_eq!(line.key, "m");
        assert_eq!(line.tag, "map");
        assert_eq!(line.encoded, "{a:1,b:x=y}");
    }

    #[test]
    fn test_parse_empty_value() {
        let line = parse_line("k:string=", 1).unwrap();
        assert_eq!(line.encoded, "");
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["invalid=nonsense", "no separators", "", "k:string"] {
            assert!(
                matches!(parse_line(bad, 3), Err(StoreError::MalformedLine { line: 3, .. })),
                "{:?} should be malformed",
                bad
            );
        }
    }

    #[test]
    fn test_parse_equals_before_colon() {
        let err = parse_line("a=b:c", 1).unwrap_err();
        match err {
            StoreError::MalformedLine { line, content } => {
                assert_eq!(line, 1);
                assert_eq!(content, "a=b:c");
            }
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_key() {
        assert!(matches!(
            parse_line(":string=x", 7),
            Err(StoreError::KeyEmpty { line: 7 })
        ));
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("alpha", "string", "1"), "alpha:string=1\n");
        assert_eq!(format_line("l", "list", "[]"), "l:list=[]\n");
    }

    #[test]
    fn test_format_then_parse() {
        let text = format_line("k", "int", "42");
        let line = parse_line(text.trim_end_matches('\n'), 1).unwrap();
        assert_eq!(line, Line { key: "k", tag: "int", encoded: "42" });
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("user_1").is_ok());
        assert!(validate_key("with space").is_ok());
        assert!(matches!(validate_key(""), Err(StoreError::KeyEmpty { .. })));
        assert!(matches!(validate_key("a:b"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(validate_key("a=b"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(validate_key("a\nb"), Err(StoreError::InvalidKey(_))));
    }
}
