//! Code block grouping: a contiguous run of code rows joined into one
//! `<pre><code>` block.

use crate::rows::{Attrs, DocRow};
use crate::tree::types::{Node, NodeChild};

/// Consumes the code run starting at `start`; returns the `<pre>` node
/// and the number of rows consumed.
pub(super) fn group(rows: &[DocRow], start: usize) -> (Node, usize) {
    let mut lines = Vec::new();
    let mut attrs = Attrs::new();

    let mut i = start;
    while i < rows.len() {
        let DocRow::Row(row) = &rows[i] else { break };
        if row.tag != "code" {
            break;
        }
        lines.push(row.value.clone().unwrap_or_default());
        for (key, value) in &row.attrs {
            attrs.insert(key.clone(), value.clone());
        }
        i += 1;
    }

    // The language attribute is published as data-language
    if let Some(language) = attrs.shift_remove("language") {
        attrs.insert("data-language".to_string(), language);
    }

    let code = Node::leaf("code", lines.join("\n"), attrs);
    let pre = Node::branch("pre", vec![NodeChild::Node(code)], Attrs::new());
    (pre, i - start)
}
