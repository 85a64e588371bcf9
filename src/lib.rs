//! # records-rs
//!
//! Parse delimited text into records keyed by the header line.
//!
//! ## Overview
//!
//! A delimited-text document is read as:
//! - **Header**: the first line, split on the separator into field names
//! - **Records**: every following line, split the same way and paired with
//!   the field names
//! - **Ragged rows**: paired up to the shorter of header and row, never an error
//!
//! Splitting is on a literal token (`","` unless configured); quoted cells
//! are not special.
//!
//! ## Example
//!
//! ```
//! use records_rs::RecordParser;
//!
//! let lines = [
//!     "Header1;Header2;Header3",
//!     "CellA1;CellB1;CellC1",
//!     "CellA2;CellB2;CellC2",
//! ];
//!
//! let records = RecordParser::with_separator(";").parse(lines).unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(&records[0]["Header2"], "CellB1");
//! assert_eq!(records.column("Header1"), vec![Some("CellA1"), Some("CellA2")]);
//! ```

pub mod error;
pub mod parser;
pub mod record;
pub mod record_set;
pub mod source;

#[cfg(test)]
mod test_log;

pub use error::{ParseError, Result};
pub use parser::{DEFAULT_SEPARATOR, ParserOptions, RecordParser, parse};
pub use record::{FieldNames, Record};
pub use record_set::RecordSet;
pub use source::{is_delimited_text, read_lines, read_path};
