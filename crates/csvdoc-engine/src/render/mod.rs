//! # HTML Rendering
//!
//! Walks the document tree and emits markup text. Inline markup is
//! expanded in every text fragment except inside `code` elements, which
//! only get `&`/`<`/`>` entity escaping.
//!
//! Attribute escaping is asymmetric on purpose: a fixed allow-list of
//! URL-bearing attributes only escapes the quote character so URL syntax
//! (`&`, query strings) survives; everything else gets the full
//! treatment.

use std::fmt::Write;

use phf::phf_set;

use crate::inline;
use crate::rows::Attrs;
use crate::tree::{Node, NodeChild, NodeContent};

/// Attributes whose values keep URL syntax intact.
static URL_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "src",
    "href",
    "srcset",
    "data",
};

/// Self-closing element kinds.
fn is_void(tag: &str) -> bool {
    matches!(tag, "hr" | "img")
}

/// Renders the tree to HTML, one top-level element per line.
pub fn render(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_node(node: &Node) -> String {
    let attrs = render_attrs(&node.attrs);
    if is_void(&node.tag) {
        return format!("<{}{} />", node.tag, attrs);
    }

    let inner = match &node.content {
        NodeContent::Text(text) => render_text(text, &node.tag),
        NodeContent::Children(children) => children
            .iter()
            .map(|child| match child {
                NodeChild::Text(text) => render_text(text, &node.tag),
                NodeChild::Node(node) => render_node(node),
            })
            .collect(),
    };
    format!("<{tag}{attrs}>{inner}</{tag}>", tag = node.tag)
}

fn render_text(text: &str, parent_tag: &str) -> String {
    if parent_tag == "code" {
        html_escape::encode_text(text).into_owned()
    } else {
        inline::expand(text)
    }
}

fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        let _ = write!(out, " {}=\"{}\"", key, escape_attr_value(key, value));
    }
    out
}

fn escape_attr_value(key: &str, value: &str) -> String {
    if URL_ATTRIBUTES.contains(key) {
        value.replace('"', "&quot;")
    } else {
        escape_html(value)
    }
}

/// Full entity escaping; the ampersand goes first so entities the
/// replacement itself introduces are not re-escaped.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
