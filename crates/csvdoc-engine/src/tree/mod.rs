//! # Document Tree Building
//!
//! Consumes the ordered row stream in a single left-to-right pass and
//! produces the document tree. Each dispatch consumes one or more rows
//! and advances the cursor past everything it consumed.
//!
//! ## Modules
//!
//! - **`types`**: [`Node`], [`NodeContent`], [`NodeChild`]
//! - **`paragraph`**: paragraph runs with blank-row separators
//! - **`list`**: nested `ul`/`ol` grouping over a depth map
//! - **`table`**: row-group merging into `thead`/`tbody` rows
//! - **`code`**: multi-row `<pre><code>` blocks
//! - **`quote`**: nested blockquotes over a depth stack
//!
//! ## Key Invariants
//!
//! - No grouping algorithm can fail; depth skips and family breaks are
//!   resolved by synthesizing intermediate levels or clamping to the
//!   root, never by erroring
//! - Every dispatch consumes at least one row, so the pass terminates
//! - Nodes are owned outright by their parents; nesting is expressed by
//!   appending to an owned child vector, never by shared references

mod code;
mod list;
mod paragraph;
mod quote;
mod table;
pub mod types;

pub use types::{Node, NodeChild, NodeContent};

use crate::rows::{Attrs, DocRow, Row, tag};

/// Builds the document tree from the parsed row stream.
pub fn build(rows: &[DocRow]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    while cursor < rows.len() {
        let row = match &rows[cursor] {
            DocRow::Blank => {
                cursor += 1;
                continue;
            }
            DocRow::Row(row) => row,
        };

        let t = row.tag.as_str();
        if tag::is_heading_tag(t) {
            nodes.push(heading_node(row));
            cursor += 1;
        } else if t == "p" {
            let (mut group, consumed) = paragraph::group(rows, cursor);
            nodes.append(&mut group);
            cursor += consumed;
        } else if t == "a" {
            nodes.push(link_node(row));
            cursor += 1;
        } else if t == "img" {
            nodes.push(image_node(row));
            cursor += 1;
        } else if tag::is_list_tag(t) {
            let (node, consumed) = list::group(rows, cursor);
            nodes.push(node);
            cursor += consumed;
        } else if tag::is_table_tag(t) {
            let (node, consumed) = table::group(rows, cursor);
            nodes.push(node);
            cursor += consumed;
        } else if t == "code" {
            let (node, consumed) = code::group(rows, cursor);
            nodes.push(node);
            cursor += consumed;
        } else if t == "blockquote" {
            let (node, consumed) = quote::group(rows, cursor);
            nodes.push(node);
            cursor += consumed;
        } else if t == "hr" {
            nodes.push(Node::void("hr", row.attrs.clone()));
            cursor += 1;
        } else {
            // Unrecognized tags degrade to a single-row paragraph
            nodes.push(Node::leaf(
                "p",
                row.value.clone().unwrap_or_default(),
                row.attrs.clone(),
            ));
            cursor += 1;
        }
    }

    nodes
}

fn heading_node(row: &Row) -> Node {
    Node::leaf(
        row.tag.clone(),
        row.value.clone().unwrap_or_default(),
        row.attrs.clone(),
    )
}

/// A standalone link row becomes an anchor wrapped in a paragraph.
fn link_node(row: &Row) -> Node {
    let mut attrs = row.attrs.clone();
    attrs.entry("href".to_string()).or_default();
    let anchor = Node::leaf("a", row.value.clone().unwrap_or_default(), attrs);
    Node::branch("p", vec![NodeChild::Node(anchor)], Attrs::new())
}

/// A standalone image row becomes an `img` wrapped in a paragraph; the
/// row value supplies the alt text.
fn image_node(row: &Row) -> Node {
    let mut attrs = row.attrs.clone();
    attrs.entry("src".to_string()).or_default();
    attrs.insert(
        "alt".to_string(),
        row.value.clone().unwrap_or_default(),
    );
    let img = Node::void("img", attrs);
    Node::branch("p", vec![NodeChild::Node(img)], Attrs::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::{FileType, parse_document};

    fn build_from(input: &str) -> Vec<Node> {
        build(&parse_document(input, FileType::Csv).unwrap())
    }

    #[test]
    fn empty_document_builds_no_nodes() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn heading_is_a_single_leaf() {
        let nodes = build_from("h1,Title");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].tag, "h1");
        assert_eq!(nodes[0].content, NodeContent::Text("Title".into()));
    }

    #[test]
    fn rule_is_void_with_attrs() {
        let nodes = build_from("hr,,class=divider");
        assert_eq!(nodes[0].tag, "hr");
        assert_eq!(nodes[0].content, NodeContent::Text(String::new()));
        assert_eq!(
            nodes[0].attrs.get("class").map(String::as_str),
            Some("divider")
        );
    }

    #[test]
    fn link_row_is_wrapped_in_paragraph() {
        let nodes = build_from("a,docs,href=https://example.com");
        assert_eq!(nodes[0].tag, "p");
        let NodeContent::Children(children) = &nodes[0].content else {
            panic!("expected children");
        };
        let NodeChild::Node(anchor) = &children[0] else {
            panic!("expected node child");
        };
        assert_eq!(anchor.tag, "a");
        assert_eq!(
            anchor.attrs.get("href").map(String::as_str),
            Some("https://example.com")
        );
    }

    #[test]
    fn link_href_defaults_to_empty() {
        let nodes = build_from("a,docs");
        let NodeContent::Children(children) = &nodes[0].content else {
            panic!("expected children");
        };
        let NodeChild::Node(anchor) = &children[0] else {
            panic!("expected node child");
        };
        assert_eq!(anchor.attrs.get("href").map(String::as_str), Some(""));
    }

    #[test]
    fn image_alt_comes_from_value() {
        let nodes = build_from("img,logo,src=logo.png");
        let NodeContent::Children(children) = &nodes[0].content else {
            panic!("expected children");
        };
        let NodeChild::Node(img) = &children[0] else {
            panic!("expected node child");
        };
        assert_eq!(img.tag, "img");
        assert_eq!(img.attrs.get("alt").map(String::as_str), Some("logo"));
        assert_eq!(img.attrs.get("src").map(String::as_str), Some("logo.png"));
    }

    #[test]
    fn unknown_tag_degrades_to_paragraph() {
        let nodes = build_from("widget,some text");
        assert_eq!(nodes[0].tag, "p");
        assert_eq!(nodes[0].content, NodeContent::Text("some text".into()));
    }

    #[test]
    fn blank_rows_contribute_nothing() {
        let nodes = build_from(".\n.\nh1,Title\n.");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn mixed_document_keeps_order() {
        let nodes = build_from("h1,Title\np,Intro\nul,item\nhr");
        let tags: Vec<&str> = nodes.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["h1", "p", "ul", "hr"]);
    }
}
