//! Transaction-related types for the Fraud Review Engine
//!
//! This module defines the scored transaction record, its ordered field view
//! used by "any field" search and export, and the risk classification derived
//! from the fraud probability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraud probability above which a transaction is high risk (exclusive)
pub const HIGH_RISK_THRESHOLD: f64 = 0.8;

/// Fraud probability at or above which a transaction is at least medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.5;

/// Number of fields in a [`Transaction`]
pub const FIELD_COUNT: usize = 14;

/// Field names in canonical order
///
/// This is the order of the export header and of [`Transaction::fields`].
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "txn_count_24h",
    "amount_to_avg_ratio",
    "amount_24h",
    "distance_from_prev_txn",
    "different_country",
    "is_foreign_transaction",
    "amount_to_limit_ratio",
    "amount_to_available_ratio",
    "account_age_days",
    "days_since_address_change",
    "Prob_Fraud",
    "accountNumber",
    "customerId",
    "merchantName",
];

/// A scored credit-card transaction
///
/// Records are immutable once created. Serde names match the JSON records
/// produced upstream, so `prob_fraud` travels as `Prob_Fraud` and the
/// identifiers as `accountNumber` / `customerId`.
///
/// `prob_fraud` is expected to lie in `[0, 1]` but is not validated; values
/// outside that range are accepted and classify by the same thresholds.
/// Integer fields are signed and also accept integral floats such as
/// `289.0`, so negative or float-encoded counts load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Number of transactions on the account in the last 24 hours
    #[serde(deserialize_with = "integer::deserialize")]
    pub txn_count_24h: i64,

    /// Amount relative to the account's average transaction amount
    pub amount_to_avg_ratio: f64,

    /// Total amount spent in the last 24 hours
    pub amount_24h: f64,

    /// Distance from the previous transaction, in kilometers
    pub distance_from_prev_txn: f64,

    /// Whether the transaction happened in a different country than usual
    #[serde(with = "flag")]
    pub different_country: bool,

    /// Whether the transaction is foreign
    #[serde(with = "flag")]
    pub is_foreign_transaction: bool,

    pub amount_to_limit_ratio: f64,

    pub amount_to_available_ratio: f64,

    #[serde(deserialize_with = "integer::deserialize")]
    pub account_age_days: i64,

    #[serde(deserialize_with = "integer::deserialize")]
    pub days_since_address_change: i64,

    /// Precomputed fraud probability
    #[serde(rename = "Prob_Fraud")]
    pub prob_fraud: f64,

    /// Account number (used as a key, but not guaranteed unique)
    #[serde(rename = "accountNumber", deserialize_with = "integer::deserialize")]
    pub account_number: i64,

    #[serde(rename = "customerId", deserialize_with = "integer::deserialize")]
    pub customer_id: i64,

    #[serde(rename = "merchantName")]
    pub merchant_name: String,
}

impl Transaction {
    /// Ordered `(name, value)` pairs for every field of the record
    ///
    /// The order matches [`FIELD_NAMES`]. Search and export both walk this
    /// view, so adding a field means adding it here and to [`FIELD_NAMES`].
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); FIELD_COUNT] {
        [
            (FIELD_NAMES[0], FieldValue::Count(self.txn_count_24h)),
            (FIELD_NAMES[1], FieldValue::Real(self.amount_to_avg_ratio)),
            (FIELD_NAMES[2], FieldValue::Real(self.amount_24h)),
            (FIELD_NAMES[3], FieldValue::Real(self.distance_from_prev_txn)),
            (FIELD_NAMES[4], FieldValue::Flag(self.different_country)),
            (FIELD_NAMES[5], FieldValue::Flag(self.is_foreign_transaction)),
            (FIELD_NAMES[6], FieldValue::Real(self.amount_to_limit_ratio)),
            (FIELD_NAMES[7], FieldValue::Real(self.amount_to_available_ratio)),
            (FIELD_NAMES[8], FieldValue::Count(self.account_age_days)),
            (FIELD_NAMES[9], FieldValue::Count(self.days_since_address_change)),
            (FIELD_NAMES[10], FieldValue::Real(self.prob_fraud)),
            (FIELD_NAMES[11], FieldValue::Count(self.account_number)),
            (FIELD_NAMES[12], FieldValue::Count(self.customer_id)),
            (FIELD_NAMES[13], FieldValue::Text(&self.merchant_name)),
        ]
    }

    /// Risk band of this transaction
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::classify(self.prob_fraud)
    }

    /// Whether this transaction is eligible for the high-risk export
    pub fn is_high_risk(&self) -> bool {
        self.prob_fraud > HIGH_RISK_THRESHOLD
    }
}

/// A single field value of a [`Transaction`]
///
/// `Display` renders the default decimal text form: integers and reals as
/// Rust prints them, flags as `0`/`1`, text verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Count(i64),
    Real(f64),
    Flag(bool),
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Whether the value is text (quoted on export)
    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Count(value) => write!(f, "{}", value),
            FieldValue::Real(value) => write!(f, "{}", value),
            FieldValue::Flag(value) => write!(f, "{}", u8::from(*value)),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Risk band derived from the fraud probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// `prob_fraud > 0.8`
    High,

    /// `0.5 <= prob_fraud <= 0.8` (closed on both ends)
    Medium,

    /// Everything else, including NaN
    Low,
}

impl RiskLevel {
    /// Classify a fraud probability into a risk band
    ///
    /// # Arguments
    ///
    /// * `prob_fraud` - The fraud probability to classify
    ///
    /// # Returns
    ///
    /// - `High` if `prob_fraud > 0.8`
    /// - `Medium` if `0.5 <= prob_fraud <= 0.8`
    /// - `Low` otherwise
    pub fn classify(prob_fraud: f64) -> Self {
        if prob_fraud > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if prob_fraud >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color-coded risk category used by the risk filter
///
/// Each category corresponds to exactly one [`RiskLevel`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Red,
    Yellow,
    Green,
}

impl RiskCategory {
    /// The risk level this category selects
    pub fn level(&self) -> RiskLevel {
        match self {
            RiskCategory::Red => RiskLevel::High,
            RiskCategory::Yellow => RiskLevel::Medium,
            RiskCategory::Green => RiskLevel::Low,
        }
    }
}

impl From<RiskLevel> for RiskCategory {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => RiskCategory::Red,
            RiskLevel::Medium => RiskCategory::Yellow,
            RiskLevel::Low => RiskCategory::Green,
        }
    }
}

/// Serde adapter for `0`/`1` encoded flags
///
/// Accepts `0`, `1`, `false` or `true` on input and always writes `0`/`1`.
mod flag {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Int(u64),
        Bool(bool),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match RawFlag::deserialize(deserializer)? {
            RawFlag::Int(0) | RawFlag::Bool(false) => Ok(false),
            RawFlag::Int(1) | RawFlag::Bool(true) => Ok(true),
            RawFlag::Int(other) => Err(de::Error::custom(format!(
                "expected flag 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Serde adapter for integer fields
///
/// Accepts any JSON integer that fits in `i64`, and floats with no
/// fractional part (`289.0`).
mod integer {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match RawNumber::deserialize(deserializer)? {
            RawNumber::Int(value) => Ok(value),
            RawNumber::Float(value)
                if value.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(&value) =>
            {
                Ok(value as i64)
            }
            RawNumber::Float(value) => Err(de::Error::custom(format!(
                "expected an integral number, got {}",
                value
            ))),
        }
    }
}
