//! Delimited text export for high-risk transactions
//!
//! This module centralizes the export format:
//! - Line 1 holds the field names in canonical order
//! - Each following line holds one transaction's values in the same order
//! - Text values are wrapped in double quotes, numbers and flags are bare
//! - Fields are separated by `,` and every row ends with `\n`
//!
//! # Known Limitation
//!
//! Embedded quotes and commas inside text values are written as-is. A merchant
//! name containing `,` or `"` therefore does not survive a round trip through
//! a CSV parser.

use crate::types::{ReviewError, Transaction, FIELD_NAMES};
use std::io::Write;

/// Write transactions as delimited text
///
/// # Arguments
///
/// * `records` - Transactions to write, in output order
/// * `output` - Mutable reference to a writer for the export
///
/// # Returns
///
/// * `Ok(())` if every row was written
/// * `Err(ReviewError::EmptyExport)` if `records` is empty (nothing is written)
/// * `Err(ReviewError::ExportError)` if a write error occurred
pub fn write_delimited(records: &[Transaction], output: &mut dyn Write) -> Result<(), ReviewError> {
    if records.is_empty() {
        return Err(ReviewError::EmptyExport);
    }

    // Quoting is done by hand below so that text is always quoted and
    // numbers never are, independent of their content.
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(FIELD_NAMES)?;

    for transaction in records {
        writer.write_record(transaction.fields().iter().map(|(_, value)| {
            if value.is_text() {
                format!("\"{}\"", value)
            } else {
                value.to_string()
            }
        }))?;
    }

    writer.flush()?;

    Ok(())
}

/// Render transactions as delimited text
///
/// # Arguments
///
/// * `records` - Transactions to render, in output order
///
/// # Returns
///
/// * `Ok(String)` with the header line followed by one line per transaction
/// * `Err(ReviewError::EmptyExport)` if `records` is empty
pub fn to_delimited_text(records: &[Transaction]) -> Result<String, ReviewError> {
    let mut buffer = Vec::new();
    write_delimited(records, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| ReviewError::ExportError {
        message: e.to_string(),
    })
}
