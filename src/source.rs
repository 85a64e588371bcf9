//! Reading delimited text from files and readers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::parser::RecordParser;
use crate::record_set::RecordSet;

/// Extensions recognised as delimited text.
const DELIMITED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Read every line from `reader`, stripping line terminators.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?)
}

/// Open `path`, read all of its lines, and close it.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let read_err = |source: std::io::Error| ParseError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_err)?;

    debug!(path = %path.display(), lines = lines.len(), "read delimited file");
    Ok(lines)
}

/// Whether `path` names a delimited-text resource, judged by extension.
pub fn is_delimited_text(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DELIMITED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

impl RecordParser {
    /// Read and parse the file at `path`.
    ///
    /// A path without a recognised extension is logged and parsed anyway.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<RecordSet> {
        let path = path.as_ref();
        if !is_delimited_text(path) {
            warn!(path = %path.display(), "file does not look like delimited text");
        }
        self.parse(read_path(path)?)
    }

    /// Read all lines from `reader` and parse them.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<RecordSet> {
        self.parse(read_lines(reader)?)
    }
}
