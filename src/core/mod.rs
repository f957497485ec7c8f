//! Core business logic module
//!
//! This module contains the review pipeline components:
//! - `engine` - Pure filter and sort functions
//! - `aggregate` - Summary statistics over a collection
//! - `session` - The controller owning the collection and live criteria

pub mod aggregate;
pub mod engine;
pub mod session;

pub use aggregate::{aggregate, Statistics};
pub use engine::{filter, high_risk, sort_by_risk_descending};
pub use session::{DisplayRow, PageView, ReviewSession, DEFAULT_PAGE_SIZE};
