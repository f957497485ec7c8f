//! Aggregate statistics over a transaction collection

use crate::types::{RiskLevel, Transaction};
use serde::Serialize;

/// Summary statistics for a set of transactions
///
/// Risk counts use [`RiskLevel::classify`], so they always add up to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,

    /// `high_risk_count / total * 100`, or 0 for an empty set
    pub high_risk_percentage: f64,

    /// Mean fraud probability, or 0 for an empty set
    pub average_fraud_prob: f64,

    pub foreign_count: usize,
    pub domestic_count: usize,
}

/// Compute summary statistics over a collection
///
/// # Arguments
///
/// * `records` - The transactions to summarize
///
/// # Returns
///
/// The [`Statistics`] for `records`. An empty collection yields all zeros
/// rather than dividing by zero.
pub fn aggregate<'a, I>(records: I) -> Statistics
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut stats = Statistics::default();
    let mut prob_sum = 0.0;

    for transaction in records {
        stats.total += 1;
        prob_sum += transaction.prob_fraud;

        match transaction.risk_level() {
            RiskLevel::High => stats.high_risk_count += 1,
            RiskLevel::Medium => stats.medium_risk_count += 1,
            RiskLevel::Low => stats.low_risk_count += 1,
        }

        if transaction.is_foreign_transaction {
            stats.foreign_count += 1;
        } else {
            stats.domestic_count += 1;
        }
    }

    if stats.total > 0 {
        let total = stats.total as f64;
        stats.high_risk_percentage = stats.high_risk_count as f64 / total * 100.0;
        stats.average_fraud_prob = prob_sum / total;
    }

    stats
}
