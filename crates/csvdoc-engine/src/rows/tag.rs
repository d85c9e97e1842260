//! Tag markers, the alias table, and the row-group suffix split.
//!
//! All lookup data here is constant; nothing in this module carries
//! state.

use phf::phf_map;

/// Nesting depth marker. A leading run on the tag field sets the row's
/// depth (`_ul` is a list item one level down).
pub const DEPTH_MARKER: char = '_';

/// A tag of exactly `.` marks an intentionally blank separator row.
pub const BLANK_MARKER: &str = ".";

/// Tags starting with `//` are comments; the whole row is dropped.
pub const COMMENT_MARKER: &str = "//";

/// Tag used when the tag field is empty or a record is malformed.
pub const DEFAULT_TAG: &str = "p";

static TAG_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "#" => "h1",
    "##" => "h2",
    "###" => "h3",
    "####" => "h4",
    "#####" => "h5",
    "######" => "h6",
    "-" => "ul",
    "*" => "ul",
    "+" => "ul",
    "li" => "ul",
    "1" => "ol",
    "|" => "table",
    "[" => "thead",
    "```" => "code",
    ">" => "blockquote",
};

/// Resolves a base tag through the alias table; unknown tags pass
/// through unchanged.
pub fn resolve_alias(raw: &str) -> &str {
    TAG_ALIASES.get(raw).copied().unwrap_or(raw)
}

pub fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

pub fn is_list_tag(tag: &str) -> bool {
    matches!(tag, "ul" | "ol")
}

/// All tags consumed by the table grouping algorithm.
pub fn is_table_tag(tag: &str) -> bool {
    matches!(tag, "table" | "thead" | "tbody" | "th" | "td")
}

/// Tags whose row groups land in `<thead>` rather than `<tbody>`.
pub fn is_header_section_tag(tag: &str) -> bool {
    tag == "thead"
}

/// Splits a trailing digit run off a candidate tag.
///
/// `table16` → (`table`, `16`); `|0` → (`|`, `0`). The base must be
/// non-empty and consist of letters, brackets, or the pipe, so a bare
/// `1` stays an ordered-list alias and heading tags never split.
pub fn split_group_suffix(tag: &str) -> (&str, Option<&str>) {
    if is_heading_tag(tag) {
        return (tag, None);
    }
    let base = tag.trim_end_matches(|c: char| c.is_ascii_digit());
    let suffix = &tag[base.len()..];
    let base_ok = !base.is_empty()
        && base
            .chars()
            .all(|c| c.is_ascii_alphabetic() || matches!(c, '[' | ']' | '|'));
    if suffix.is_empty() || !base_ok {
        (tag, None)
    } else {
        (base, Some(suffix))
    }
}
