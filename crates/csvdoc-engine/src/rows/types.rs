use crate::rows::attrs::Attrs;

/// One parsed record of the tabular input.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Canonical tag after alias resolution (`h1`…`h6`, `p`, `ul`, `ol`,
    /// `table`, `thead`, `tbody`, `th`, `td`, `code`, `blockquote`, `hr`,
    /// `a`, `img`, or an unrecognized tag passed through unchanged).
    pub tag: String,
    /// Base tag before alias resolution, after the depth markers and the
    /// group suffix have been stripped. Distinguishes sub-kinds such as a
    /// `th` header cell inside a body row group.
    pub raw_tag: String,
    /// Trailing digit run split off the raw tag. Only table grouping
    /// looks at it; `None` means "same group as the preceding row of the
    /// same tag".
    pub group_suffix: Option<String>,
    /// Primary content. `None` when the record had no second field at
    /// all, which is distinct from an empty second field.
    pub value: Option<String>,
    pub attrs: Attrs,
    /// Count of leading `_` nesting markers on the tag field. Drives
    /// list and blockquote nesting.
    pub depth: usize,
}

/// A document row as seen by the tree builder: content or a blank
/// separator. Comment rows never reach this level.
#[derive(Debug, Clone, PartialEq)]
pub enum DocRow {
    Blank,
    Row(Row),
}

/// Input flavor accepted by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Tsv,
}

impl FileType {
    pub fn delimiter(self) -> u8 {
        match self {
            FileType::Csv => b',',
            FileType::Tsv => b'\t',
        }
    }

    /// TSV input is read with quoting disabled: tab-separated values have
    /// no quoting convention to honor.
    pub fn quoting(self) -> bool {
        matches!(self, FileType::Csv)
    }
}

impl std::str::FromStr for FileType {
    type Err = UnknownFileType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(FileType::Csv),
            "tsv" => Ok(FileType::Tsv),
            other => Err(UnknownFileType(other.to_string())),
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Csv => f.write_str("csv"),
            FileType::Tsv => f.write_str("tsv"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown file type: {0} (expected csv or tsv)")]
pub struct UnknownFileType(pub String);
