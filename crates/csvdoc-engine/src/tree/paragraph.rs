//! Paragraph grouping: a maximal run of paragraph and blank rows, with
//! blanks as hard separators between paragraphs.

use crate::rows::{Attrs, DocRow, Row};
use crate::tree::types::Node;

/// Line-break marker joining consecutive paragraph rows.
const LINE_BREAK: &str = "<br />";

/// Consumes the run starting at `start` and returns the finished
/// paragraph nodes plus the number of rows consumed.
pub(super) fn group(rows: &[DocRow], start: usize) -> (Vec<Node>, usize) {
    let mut end = start;
    while end < rows.len() {
        match &rows[end] {
            DocRow::Blank => {}
            DocRow::Row(row) if row.tag == "p" => {}
            _ => break,
        }
        end += 1;
    }

    let mut nodes = Vec::new();
    let mut current: Vec<&Row> = Vec::new();
    for doc_row in &rows[start..end] {
        match doc_row {
            DocRow::Blank => {
                if let Some(node) = flush(&current) {
                    nodes.push(node);
                }
                current.clear();
            }
            DocRow::Row(row) => current.push(row),
        }
    }
    if let Some(node) = flush(&current) {
        nodes.push(node);
    }

    (nodes, end - start)
}

fn flush(run: &[&Row]) -> Option<Node> {
    if run.is_empty() {
        return None;
    }
    let text = run
        .iter()
        .map(|row| row.value.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(LINE_BREAK);
    let mut attrs = Attrs::new();
    for row in run {
        for (key, value) in &row.attrs {
            attrs.insert(key.clone(), value.clone());
        }
    }
    Some(Node::leaf("p", text, attrs))
}
