//! JSON record parsing
//!
//! Each input file holds exactly one transaction object using the upstream
//! wire names (`Prob_Fraud`, `accountNumber`, ...). Parsing is pure; reading
//! the file is left to the caller.

use crate::types::{ReviewError, Transaction};

/// Parse one transaction from JSON text
///
/// # Arguments
///
/// * `origin` - Where the text came from, used in the error message
/// * `text` - The JSON document
///
/// # Returns
///
/// * `Ok(Transaction)` if the text is a single valid transaction object
/// * `Err(ReviewError::ParseError)` otherwise
pub fn parse_transaction(origin: &str, text: &str) -> Result<Transaction, ReviewError> {
    serde_json::from_str(text).map_err(|e| ReviewError::parse_error(origin, e.to_string()))
}
