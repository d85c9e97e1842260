//! Code span extraction: backtick spans become finished `<code>`
//! elements stashed behind placeholders, so no later pass can touch
//! their contents.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Placeholder shape: OPEN + decimal index + CLOSE.
const OPEN: char = '\u{E100}';
const CLOSE: char = '\u{E101}';

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("`([^`]*)`").unwrap()
});

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\u{E100}([0-9]+)\u{E101}").unwrap()
});

/// Replaces every `` `span` `` with a placeholder; returns the rewritten
/// text and the rendered `<code>` fragments. Only `&`, `<` and `>` are
/// escaped inside a span.
pub(super) fn extract(text: &str) -> (String, Vec<String>) {
    let mut spans = Vec::new();
    let replaced = CODE_SPAN.replace_all(text, |caps: &Captures<'_>| {
        let rendered = format!("<code>{}</code>", html_escape::encode_text(&caps[1]));
        let placeholder = format!("{OPEN}{}{CLOSE}", spans.len());
        spans.push(rendered);
        placeholder
    });
    (replaced.into_owned(), spans)
}

/// Swaps placeholders back for their rendered `<code>` fragments.
pub(super) fn restore(text: &str, spans: &[String]) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| spans.get(idx))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_then_restore() {
        let (text, spans) = extract("before `x < y` after");
        assert!(!text.contains('`'));
        assert_eq!(spans, vec!["<code>x &lt; y</code>".to_string()]);
        assert_eq!(restore(&text, &spans), "before <code>x &lt; y</code> after");
    }

    #[test]
    fn multiple_spans_keep_their_order() {
        let (text, spans) = extract("`a` mid `b`");
        assert_eq!(spans.len(), 2);
        assert_eq!(restore(&text, &spans), "<code>a</code> mid <code>b</code>");
    }

    #[test]
    fn unterminated_backtick_is_left_alone() {
        let (text, spans) = extract("a `dangling span");
        assert_eq!(text, "a `dangling span");
        assert!(spans.is_empty());
    }

    #[test]
    fn empty_span_renders_empty_code() {
        let (_, spans) = extract("``");
        assert_eq!(spans, vec!["<code></code>".to_string()]);
    }

    #[test]
    fn ampersand_is_escaped_inside() {
        let (text, spans) = extract("`a & b`");
        assert_eq!(restore(&text, &spans), "<code>a &amp; b</code>");
    }
}
