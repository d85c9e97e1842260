//! # Row Parsing
//!
//! Turns raw tabular text into the flat row stream consumed by the tree
//! builder.
//!
//! ## Parsing Phases
//!
//! 1. **Tokenization**: the `csv` crate splits the input into records,
//!    honoring quoted fields that contain the delimiter or literal
//!    newlines (`parse_document`)
//! 2. **Row typing** (`parser`): each record becomes one [`Row`], a blank
//!    separator, or is skipped as a comment
//!
//! ## Modules
//!
//! - **`types`**: [`Row`], [`DocRow`], [`FileType`]
//! - **`tag`**: depth/blank/comment markers, the tag alias table, and the
//!   row-group suffix split
//! - **`attrs`**: the `key=value;…` attribute string grammar
//! - **`parser`**: per-record parsing
//!
//! Row parsing never fails: a malformed record degrades to a paragraph
//! row. Only the tokenizer can reject input, and that aborts the whole
//! document.

pub mod attrs;
pub mod parser;
pub mod tag;
pub mod types;

pub use attrs::Attrs;
pub use parser::{ParsedRow, parse_record};
pub use types::{DocRow, FileType, Row};

/// Error produced when the upstream tokenizer rejects the input.
///
/// Everything past tokenization is total; this is the pipeline's only
/// failure channel.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to tokenize input: {0}")]
    Tokenize(#[from] csv::Error),
}

/// Parses a whole CSV/TSV document into the row stream.
///
/// Comment rows are dropped here; blank separator rows are kept because
/// the tree builder uses them to split groups.
pub fn parse_document(input: &str, file_type: FileType) -> Result<Vec<DocRow>, ParseError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(file_type.delimiter());
    if !file_type.quoting() {
        builder.quoting(false);
    }

    let mut reader = builder.from_reader(input.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        match parse_record(&fields) {
            ParsedRow::Skip => {}
            ParsedRow::Blank => rows.push(DocRow::Blank),
            ParsedRow::Row(row) => rows.push(DocRow::Row(row)),
        }
    }
    Ok(rows)
}
