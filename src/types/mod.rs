//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The scored transaction record and risk classification
//! - `criteria`: Filter criteria applied to the transaction collection
//! - `error`: Error types for the review engine

pub mod criteria;
pub mod error;
pub mod transaction;

pub use criteria::FilterCriteria;
pub use error::ReviewError;
pub use transaction::{
    FieldValue, RiskCategory, RiskLevel, Transaction, FIELD_COUNT, FIELD_NAMES,
    HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD,
};
