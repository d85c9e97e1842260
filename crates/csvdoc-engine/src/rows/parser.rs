//! Per-record parsing: one record of string fields in, one typed row
//! out.

use crate::rows::attrs::{Attrs, parse_attr_string};
use crate::rows::tag::{
    BLANK_MARKER, COMMENT_MARKER, DEFAULT_TAG, DEPTH_MARKER, resolve_alias, split_group_suffix,
};
use crate::rows::types::Row;

/// Outcome of parsing one record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRow {
    /// Comment row; contributes nothing to the document.
    Skip,
    /// Blank separator row.
    Blank,
    Row(Row),
}

/// Parses one record.
///
/// Field 0 is the tag (depth markers + base tag + optional group
/// suffix), field 1 the value, field 2 the attribute string; any further
/// fields are ignored. This never fails: a record that fits nothing else
/// parses as a paragraph row.
pub fn parse_record(fields: &[&str]) -> ParsedRow {
    let Some(tag_field) = fields.first() else {
        return ParsedRow::Row(Row {
            tag: DEFAULT_TAG.to_string(),
            raw_tag: String::new(),
            group_suffix: None,
            value: None,
            attrs: Attrs::new(),
            depth: 0,
        });
    };

    let stripped = tag_field.trim_start_matches(DEPTH_MARKER);
    let depth = tag_field.len() - stripped.len();
    let candidate = stripped.trim();

    if candidate.starts_with(COMMENT_MARKER) {
        return ParsedRow::Skip;
    }
    if candidate == BLANK_MARKER {
        return ParsedRow::Blank;
    }

    let (base, suffix) = split_group_suffix(candidate);
    let resolved = resolve_alias(base);
    let tag = if resolved.is_empty() { DEFAULT_TAG } else { resolved };

    let value = fields.get(1).map(|s| s.to_string());
    let attrs = fields
        .get(2)
        .map(|s| parse_attr_string(s))
        .unwrap_or_default();

    ParsedRow::Row(Row {
        tag: tag.to_string(),
        raw_tag: base.to_string(),
        group_suffix: suffix.map(str::to_string),
        value,
        attrs,
        depth,
    })
}
