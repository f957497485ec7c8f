//! Fraud Review Engine Library
//! # Overview
//!
//! This library ingests fraud-scored payment transactions, filters and ranks
//! them by risk, summarizes them, and exports the high-risk subset as CSV.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, FilterCriteria, ReviewError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Filtering, risk ordering and the export subset
//!   - [`core::aggregate`] - Dashboard statistics
//!   - [`core::session`] - Record collection, live criteria and pagination
//! - [`ingest`] - Simulated and file-backed ingestion sources
//! - [`io`] - JSON record parsing, CSV export and the text report
//! - [`app`] - Wiring a source, a session and an output together
//!
//! # Risk Levels
//!
//! Each transaction is classified by its fraud probability:
//!
//! - **High** (red): above 0.8, the only records eligible for export
//! - **Medium** (yellow): above 0.5
//! - **Low** (green): everything else
//!
//! # Example
//!
//! ```
//! use fraud_review_engine::core::ReviewSession;
//! use fraud_review_engine::ingest::sample_transactions;
//!
//! let session = ReviewSession::with_records(sample_transactions());
//! let stats = session.statistics();
//! assert_eq!(stats.total, 5);
//! assert_eq!(stats.high_risk_count, 2);
//! ```

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod ingest;
pub mod io;
pub mod types;

pub use self::core::{aggregate, filter, sort_by_risk_descending, ReviewSession, Statistics};
pub use ingest::{create_source, IngestConfig, IngestionSource, RecordSink};
pub use io::to_delimited_text;
pub use types::{FilterCriteria, ReviewError, RiskCategory, RiskLevel, Transaction};
