//! # Inline Markup Expansion
//!
//! Rewrites lightweight emphasis/link/image/code-span syntax inside text
//! content into HTML. A pure function of its input; the tree structure
//! plays no part here.
//!
//! ## Pass Order
//!
//! The order is load-bearing; later passes assume earlier ones have
//! already protected their regions:
//!
//! 1. backslash-escaped punctuation → placeholder codepoints (`escapes`)
//! 2. code spans → placeholders holding finished `<code>` elements
//!    (`code_span`), so markup inside backticks is never transformed
//! 3. images before links (`links`): both share the bracket syntax and
//!    images carry the leading `!`
//! 4. strikethrough, then `***`/`___`, then bold, then italic
//!    (`emphasis`)
//! 5. code-span restoration, then escape restoration
//!
//! Unterminated constructs are left as literal text.

mod code_span;
mod emphasis;
mod escapes;
mod links;

/// Expands inline markup in `text` to HTML.
pub fn expand(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let protected = escapes::protect(text);
    let (text, spans) = code_span::extract(&protected);
    let text = links::expand_images(&text);
    let text = links::expand_links(&text);
    let text = emphasis::expand_strikethrough(&text);
    let text = emphasis::expand_bold_italic(&text, '*');
    let text = emphasis::expand_bold_italic(&text, '_');
    let text = emphasis::expand_bold(&text, '*');
    let text = emphasis::expand_bold(&text, '_');
    let text = emphasis::expand_italic(&text, '*');
    let text = emphasis::expand_italic(&text, '_');
    let text = code_span::restore(&text, &spans);
    escapes::restore(&text)
}
