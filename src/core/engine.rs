//! Filter and sort engine
//!
//! Pure, stateless functions over a transaction collection. None of them
//! mutate their input; each returns a fresh vector.
//!
//! The engine enforces:
//! - AND-combination of every active filter constraint
//! - Preservation of input order when filtering
//! - A stable, descending sort on fraud probability

use crate::types::{FilterCriteria, Transaction};

/// Select the transactions satisfying every active constraint
///
/// A transaction is kept only if it passes all of:
/// 1. `search_term` (if non-empty) appears in the text form of some field
/// 2. `min_fraud_prob <= prob_fraud <= max_fraud_prob`
/// 3. `foreign_only` implies a foreign transaction
/// 4. `different_country_only` implies a different-country transaction
/// 5. `merchant_name` (if non-empty) appears in the merchant name
/// 6. `risk_categories` (if non-empty) contains the transaction's risk band
///
/// Text matching is case-insensitive.
///
/// # Arguments
///
/// * `records` - The transactions to filter, in display order
/// * `criteria` - The constraints to apply
///
/// # Returns
///
/// A new vector containing the matching transactions in their original order.
/// Empty or default criteria values place no constraint.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let criteria = criteria.normalized();

    records
        .into_iter()
        .filter(|transaction| criteria.matches_normalized(transaction))
        .cloned()
        .collect()
}

/// Order transactions by fraud probability, highest first
///
/// The sort is stable: transactions with equal probability keep their
/// relative order, which makes the operation idempotent. Probabilities are
/// compared with [`f64::total_cmp`], so NaN scores sort ahead of every number
/// instead of corrupting the order.
///
/// # Arguments
///
/// * `records` - The transactions to sort
///
/// # Returns
///
/// A sorted copy of `records`.
pub fn sort_by_risk_descending(records: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.prob_fraud.total_cmp(&a.prob_fraud));
    sorted
}

/// Select the transactions eligible for the high-risk export
///
/// Keeps transactions with `prob_fraud > 0.8`, in their original order.
pub fn high_risk<'a, I>(records: I) -> Vec<Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records
        .into_iter()
        .filter(|transaction| transaction.is_high_risk())
        .cloned()
        .collect()
}
