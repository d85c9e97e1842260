//! Table grouping: contiguous table-family rows merged into row groups,
//! one `<tr>` per group, split into `<thead>` and `<tbody>` sections.

use crate::rows::{Attrs, DocRow, tag};
use crate::tree::types::{Node, NodeChild};

struct TrGroup {
    cells: Vec<Cell>,
    /// Section of the group: `<thead>` when the opening row's tag is a
    /// header-family tag.
    head: bool,
    tag: String,
    suffix: String,
}

struct Cell {
    text: String,
    header: bool,
}

/// Consumes the table run starting at `start`; returns the `<table>`
/// node and the number of rows consumed.
pub(super) fn group(rows: &[DocRow], start: usize) -> (Node, usize) {
    let mut table_attrs = Attrs::new();
    let mut groups: Vec<TrGroup> = Vec::new();

    let mut i = start;
    while i < rows.len() {
        let DocRow::Row(row) = &rows[i] else { break };
        if !tag::is_table_tag(&row.tag) {
            break;
        }

        // Only table/table-alias rows attribute the table element; plain
        // cell rows never do.
        if row.tag == "table" {
            for (key, value) in &row.attrs {
                table_attrs.insert(key.clone(), value.clone());
            }
        }

        let head = tag::is_header_section_tag(&row.tag);
        let cell = Cell {
            text: row.value.clone().unwrap_or_default(),
            // A `th` raw tag marks a header cell even inside a body group
            header: head || row.raw_tag == "th",
        };
        let suffix = row.group_suffix.clone().unwrap_or_default();

        let starts_new_group = match groups.last() {
            Some(group) => group.tag != row.tag || group.suffix != suffix,
            None => true,
        };
        if starts_new_group {
            groups.push(TrGroup {
                cells: vec![cell],
                head,
                tag: row.tag.clone(),
                suffix,
            });
        } else if let Some(group) = groups.last_mut() {
            group.cells.push(cell);
        }
        i += 1;
    }

    // Shorter groups are right-padded with empty cells up to the widest
    // group in the run.
    let columns = groups.iter().map(|g| g.cells.len()).max().unwrap_or(0);

    let mut thead_rows = Vec::new();
    let mut tbody_rows = Vec::new();
    for group in &groups {
        let cells = (0..columns)
            .map(|c| {
                let (text, header) = group
                    .cells
                    .get(c)
                    .map(|cell| (cell.text.clone(), cell.header))
                    .unwrap_or_default();
                let cell_tag = if header { "th" } else { "td" };
                NodeChild::Node(Node::leaf(cell_tag, text, Attrs::new()))
            })
            .collect();
        let tr = NodeChild::Node(Node::branch("tr", cells, Attrs::new()));
        if group.head {
            thead_rows.push(tr);
        } else {
            tbody_rows.push(tr);
        }
    }

    let mut children = Vec::new();
    if !thead_rows.is_empty() {
        children.push(NodeChild::Node(Node::branch(
            "thead",
            thead_rows,
            Attrs::new(),
        )));
    }
    if !tbody_rows.is_empty() {
        children.push(NodeChild::Node(Node::branch(
            "tbody",
            tbody_rows,
            Attrs::new(),
        )));
    }

    (Node::branch("table", children, table_attrs), i - start)
}
