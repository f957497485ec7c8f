//! I/O module
//!
//! Handles record parsing and output formats.
//!
//! # Components
//!
//! - `csv_format` - Delimited text export of transactions
//! - `json_format` - Parsing of single-record JSON files
//! - `report` - Plain-text summary and transaction listing

pub mod csv_format;
pub mod json_format;
pub mod report;

pub use csv_format::{to_delimited_text, write_delimited};
pub use json_format::parse_transaction;
pub use report::{format_percentage, write_report};
