//! Filter criteria for the Fraud Review Engine
//!
//! This module defines the FilterCriteria structure holding the live set of
//! constraints applied to the transaction collection.

use super::transaction::{RiskCategory, Transaction};
use std::collections::BTreeSet;

/// Active filter constraints
///
/// Every constraint is "off" in its default state, so
/// `FilterCriteria::default()` matches every transaction whose fraud
/// probability lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Free text matched against every field of a transaction
    ///
    /// Case-insensitive substring match. Empty means no constraint.
    pub search_term: String,

    /// Inclusive lower bound on the fraud probability
    pub min_fraud_prob: f64,

    /// Inclusive upper bound on the fraud probability
    pub max_fraud_prob: f64,

    /// Only keep foreign transactions
    pub foreign_only: bool,

    /// Only keep transactions made in a different country
    pub different_country_only: bool,

    /// Case-insensitive substring matched against the merchant name only
    pub merchant_name: String,

    /// Risk categories to keep
    ///
    /// An empty set places no constraint on the risk band.
    pub risk_categories: BTreeSet<RiskCategory>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            search_term: String::new(),
            min_fraud_prob: 0.0,
            max_fraud_prob: 1.0,
            foreign_only: false,
            different_country_only: false,
            merchant_name: String::new(),
            risk_categories: BTreeSet::new(),
        }
    }
}

impl FilterCriteria {
    /// Check a transaction against every active constraint
    ///
    /// `search_term` and `merchant_name` must already be lowercased by the
    /// caller via [`FilterCriteria::normalized`]; the engine does this once per
    /// filter pass instead of once per record.
    pub(crate) fn matches_normalized(&self, transaction: &Transaction) -> bool {
        if !self.search_term.is_empty()
            && !transaction
                .fields()
                .iter()
                .any(|(_, value)| value.to_string().to_lowercase().contains(&self.search_term))
        {
            return false;
        }

        if transaction.prob_fraud < self.min_fraud_prob
            || transaction.prob_fraud > self.max_fraud_prob
        {
            return false;
        }

        if self.foreign_only && !transaction.is_foreign_transaction {
            return false;
        }

        if self.different_country_only && !transaction.different_country {
            return false;
        }

        if !self.merchant_name.is_empty()
            && !transaction
                .merchant_name
                .to_lowercase()
                .contains(&self.merchant_name)
        {
            return false;
        }

        if !self.risk_categories.is_empty()
            && !self
                .risk_categories
                .contains(&RiskCategory::from(transaction.risk_level()))
        {
            return false;
        }

        true
    }

    /// Copy of these criteria with both text terms lowercased
    pub(crate) fn normalized(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search_term.to_lowercase(),
            merchant_name: self.merchant_name.to_lowercase(),
            ..self.clone()
        }
    }

    /// Check a single transaction against these criteria
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.normalized().matches_normalized(transaction)
    }

    /// Whether no constraint is active
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.min_fraud_prob <= 0.0
            && self.max_fraud_prob >= 1.0
            && !self.foreign_only
            && !self.different_country_only
            && self.merchant_name.is_empty()
            && self.risk_categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::tests::transaction;
    use rstest::rstest;

    #[test]
    fn test_default_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert!(criteria.matches(&transaction(0.0, "Target")));
        assert!(criteria.matches(&transaction(1.0, "Target")));
    }

    #[rstest]
    #[case::merchant_mixed_case("kRiSpY", true)]
    #[case::account_number_digits("98574", true)]
    #[case::real_value_text("420.5", true)]
    #[case::missing("walmart", false)]
    fn test_search_term_any_field(#[case] term: &str, #[case] expected: bool) {
        let criteria = FilterCriteria {
            search_term: term.to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.matches(&transaction(0.4, "Krispy Kreme #685312")), expected);
    }

    #[test]
    fn test_search_term_does_not_match_field_names() {
        let criteria = FilterCriteria {
            search_term: "merchantName".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&transaction(0.4, "Target")));
    }

    #[rstest]
    #[case::inside(0.6, true)]
    #[case::lower_bound_inclusive(0.5, true)]
    #[case::upper_bound_inclusive(0.7, true)]
    #[case::below(0.49, false)]
    #[case::above(0.71, false)]
    fn test_probability_bounds(#[case] prob_fraud: f64, #[case] expected: bool) {
        let criteria = FilterCriteria {
            min_fraud_prob: 0.5,
            max_fraud_prob: 0.7,
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.matches(&transaction(prob_fraud, "Target")), expected);
    }

    #[test]
    fn test_flag_constraints() {
        let mut foreign = transaction(0.3, "Target");
        foreign.is_foreign_transaction = true;
        let domestic = transaction(0.3, "Target");

        let criteria = FilterCriteria {
            foreign_only: true,
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&foreign));
        assert!(!criteria.matches(&domestic));

        let criteria = FilterCriteria {
            different_country_only: true,
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&foreign));

        foreign.different_country = true;
        assert!(criteria.matches(&foreign));
    }

    #[test]
    fn test_merchant_name_ignores_other_fields() {
        let criteria = FilterCriteria {
            merchant_name: "239857".to_string(),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&transaction(0.3, "Target")));

        let criteria = FilterCriteria {
            merchant_name: "TAR".to_string(),
            ..FilterCriteria::default()
        };
        assert!(criteria.matches(&transaction(0.3, "Target")));
    }

    #[rstest]
    #[case::red_only(&[RiskCategory::Red], 0.9, true)]
    #[case::red_only_rejects_medium(&[RiskCategory::Red], 0.8, false)]
    #[case::yellow_and_green(&[RiskCategory::Yellow, RiskCategory::Green], 0.2, true)]
    #[case::yellow_and_green_rejects_high(&[RiskCategory::Yellow, RiskCategory::Green], 0.95, false)]
    fn test_risk_categories(
        #[case] categories: &[RiskCategory],
        #[case] prob_fraud: f64,
        #[case] expected: bool,
    ) {
        let criteria = FilterCriteria {
            risk_categories: categories.iter().copied().collect(),
            ..FilterCriteria::default()
        };
        assert!(!criteria.is_unconstrained());
        assert_eq!(criteria.matches(&transaction(prob_fraud, "Target")), expected);
    }
}
