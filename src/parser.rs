//! Header-keyed parsing of delimited text lines.
//!
//! The first line names the fields; every following line becomes one
//! [`Record`](crate::Record) mapping those names to its cells. Splitting is
//! on a literal separator token with no quoting or escaping:
//!
//! ```text
//! Header1;Header2      -> field names ["Header1", "Header2"]
//! CellA1;CellB1        -> {Header1: "CellA1", Header2: "CellB1"}
//! CellA2               -> {Header1: "CellA2"}
//! ```
//!
//! Rows shorter or longer than the header are paired up to the shorter
//! length. They are never an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::record::{FieldNames, split_cells};
use crate::record_set::RecordSet;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Options controlling how lines are split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Literal token between fields. Defaults to `","`.
    pub separator: String,
    /// Trim surrounding whitespace from field names and cells.
    pub trim_cells: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            trim_cells: false,
        }
    }
}

/// Turns delimited text lines into a [`RecordSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordParser {
    options: ParserOptions,
}

impl RecordParser {
    /// A parser splitting on `","`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser splitting on `separator`, other options at their defaults.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::with_options(ParserOptions {
            separator: separator.into(),
            ..ParserOptions::default()
        })
    }

    /// A parser using `options` as given.
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser splits with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse `lines`, taking the first as the header.
    ///
    /// Fails with [`ParseError::EmptyInput`] when there are no lines and
    /// [`ParseError::EmptySeparator`] when the separator is `""`.
    pub fn parse<I, S>(&self, lines: I) -> Result<RecordSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let separator = self.options.separator.as_str();
        if separator.is_empty() {
            return Err(ParseError::EmptySeparator);
        }
        let trim = self.options.trim_cells;

        let mut lines = lines.into_iter();
        let header = lines.next().ok_or(ParseError::EmptyInput)?;
        let field_names = FieldNames::from_header(header.as_ref(), separator, trim);
        debug!(fields = field_names.len(), separator, "derived field names");

        let records: Vec<_> = lines
            .enumerate()
            .map(|(index, line)| {
                let cells = split_cells(line.as_ref(), separator, trim);
                if cells.len() != field_names.len() {
                    // header is line 1
                    trace!(
                        line = index + 2,
                        cells = cells.len(),
                        fields = field_names.len(),
                        "ragged row truncated"
                    );
                }
                field_names.zip_record(cells)
            })
            .collect();

        debug!(records = records.len(), "parsed records");
        Ok(RecordSet::new(field_names, records))
    }

    /// Parse a whole text body. `\n` and `\r\n` endings are both accepted.
    pub fn parse_str(&self, text: &str) -> Result<RecordSet> {
        self.parse(text.lines())
    }
}

/// Parse `lines` with the given separator.
pub fn parse<I, S>(lines: I, separator: &str) -> Result<RecordSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RecordParser::with_separator(separator).parse(lines)
}
