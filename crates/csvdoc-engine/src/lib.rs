//! # csvdoc-engine
//!
//! Converts CSV/TSV tabular markup into an HTML document tree and
//! serializes it. Each input record carries a tag field (with optional
//! `_` nesting markers and a trailing row-group suffix), a value field,
//! and an attribute field.
//!
//! The pipeline runs in one direction:
//!
//! 1. **Rows** (`rows`): tokenize the raw text and turn each record into
//!    a typed [`rows::Row`]
//! 2. **Tree** (`tree`): group the row stream into nested [`tree::Node`]s
//!    (paragraph runs, lists, tables, code blocks, blockquotes)
//! 3. **Render** (`render`): walk the tree and emit HTML, expanding
//!    lightweight inline markup (`inline`) in text content

pub mod inline;
pub mod io;
pub mod render;
pub mod rows;
pub mod tree;

// Re-export key types for easier usage
pub use rows::{Attrs, DocRow, FileType, ParseError, Row, parse_document};
pub use tree::{Node, NodeChild, NodeContent, build};

/// Convert tabular markup text straight to an HTML string.
pub fn transform(input: &str, file_type: FileType) -> Result<String, ParseError> {
    let rows = rows::parse_document(input, file_type)?;
    Ok(render::render(&tree::build(&rows)))
}
