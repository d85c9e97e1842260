//! The attribute string grammar: `key=value` pairs separated by
//! semicolons, with `\;` and `\=` as escapes for literal separator
//! characters inside a pair.

use indexmap::IndexMap;

/// Element attributes. Insertion-ordered so rendering is deterministic;
/// overwriting a key keeps its original position, like the source order
/// of the attribute string.
pub type Attrs = IndexMap<String, String>;

// Private-use stand-ins so escaped separators survive the split.
const ESCAPED_SEMICOLON: char = '\u{E000}';
const ESCAPED_EQUALS: char = '\u{E001}';

/// Parses an attribute string into a map.
///
/// Pairs without `=` are discarded, keys are trimmed, values keep their
/// whitespace, and the last occurrence of a duplicate key wins. A string
/// with no valid pair at all produces an empty map; this can never fail.
pub fn parse_attr_string(raw: &str) -> Attrs {
    let mut attrs = Attrs::new();
    if raw.is_empty() {
        return attrs;
    }

    let protected = raw
        .replace("\\;", &ESCAPED_SEMICOLON.to_string())
        .replace("\\=", &ESCAPED_EQUALS.to_string());

    for pair in protected.split(';') {
        if pair.trim().is_empty() {
            continue;
        }
        let Some(eq) = pair.find('=') else {
            continue;
        };
        let key = pair[..eq].trim();
        if key.is_empty() {
            continue;
        }
        let value = &pair[eq + 1..];
        attrs.insert(unprotect(key), unprotect(value));
    }
    attrs
}

fn unprotect(s: &str) -> String {
    s.replace(ESCAPED_SEMICOLON, ";").replace(ESCAPED_EQUALS, "=")
}
