//! Synthetic transaction generation
//!
//! Produces mock scored transactions for demos and tests. Every field is drawn
//! from a fixed distribution:
//!
//! | Field | Distribution |
//! |---|---|
//! | `Prob_Fraud` | uniform `[0, 1)` |
//! | `is_foreign_transaction` | 1 when a uniform draw is `> 0.8` |
//! | `different_country` | 1 when foreign and a second draw is `> 0.5` |
//! | `txn_count_24h` | uniform integer `[0, 9]` |
//! | `amount_to_avg_ratio` | uniform `[0.1, 5.1)` |
//! | `amount_24h` | uniform `[0, 5000)` |
//! | `distance_from_prev_txn` | uniform `[0, 15000)` |
//! | limit / available ratios | uniform `[0, 0.9)` |
//! | `account_age_days` | uniform integer `[0, 1499]` |
//! | `days_since_address_change` | uniform integer `[0, 499]` |
//! | `accountNumber`, `customerId` | independent uniform integers `[100000000, 999999999]` |
//! | `merchantName` | catalog name + `" #"` + uniform integer `[0, 999999]` |

use crate::types::Transaction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Merchant names used by the generator
pub const MERCHANT_CATALOG: [&str; 20] = [
    "Amazon",
    "Walmart",
    "Target",
    "Best Buy",
    "Apple Store",
    "Netflix",
    "Spotify",
    "Uber",
    "Lyft",
    "DoorDash",
    "Grubhub",
    "McDonald's",
    "Starbucks",
    "7-Eleven",
    "CVS Pharmacy",
    "Walgreens",
    "Home Depot",
    "Lowe's",
    "IKEA",
    "Costco",
];

/// Generator of synthetic transactions
#[derive(Debug, Clone)]
pub struct TransactionGenerator {
    rng: StdRng,
}

impl Default for TransactionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }

    /// Generate one transaction
    pub fn generate(&mut self) -> Transaction {
        let prob_fraud: f64 = self.rng.gen();
        let is_foreign = self.rng.gen::<f64>() > 0.8;
        let different_country = is_foreign && self.rng.gen::<f64>() > 0.5;

        let txn_count_24h = self.rng.gen_range(0..10);
        let amount_to_avg_ratio = self.rng.gen::<f64>() * 5.0 + 0.1;
        let amount_24h = self.rng.gen::<f64>() * 5000.0;
        let distance_from_prev_txn = self.rng.gen::<f64>() * 15000.0;
        let amount_to_limit_ratio = self.rng.gen::<f64>() * 0.9;
        let amount_to_available_ratio = self.rng.gen::<f64>() * 0.9;
        let account_age_days = self.rng.gen_range(0..1500);
        let days_since_address_change = self.rng.gen_range(0..500);
        let account_number = self.rng.gen_range(100_000_000..=999_999_999);
        let customer_id = self.rng.gen_range(100_000_000..=999_999_999);

        let merchant = MERCHANT_CATALOG[self.rng.gen_range(0..MERCHANT_CATALOG.len())];
        let merchant_name = format!("{} #{}", merchant, self.rng.gen_range(0..1_000_000));

        Transaction {
            txn_count_24h,
            amount_to_avg_ratio,
            amount_24h,
            distance_from_prev_txn,
            different_country,
            is_foreign_transaction: is_foreign,
            amount_to_limit_ratio,
            amount_to_available_ratio,
            account_age_days,
            days_since_address_change,
            prob_fraud,
            account_number,
            customer_id,
            merchant_name,
        }
    }

    /// Generate `count` transactions in one go
    pub fn generate_batch(&mut self, count: usize) -> Vec<Transaction> {
        (0..count).map(|_| self.generate()).collect()
    }
}

/// The fixed transactions shown when a review session first opens
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            txn_count_24h: 0,
            amount_to_avg_ratio: 0.5340520931336402,
            amount_24h: 0.0,
            distance_from_prev_txn: 10112.139671074245,
            different_country: false,
            is_foreign_transaction: false,
            amount_to_limit_ratio: 0.011456000000000001,
            amount_to_available_ratio: 0.011456000000000001,
            account_age_days: 289,
            days_since_address_change: 289,
            prob_fraud: 0.8732585553290808,
            account_number: 830329091,
            customer_id: 830329091,
            merchant_name: "Krispy Kreme #685312".to_string(),
        },
        Transaction {
            txn_count_24h: 2,
            amount_to_avg_ratio: 1.2,
            amount_24h: 420.5,
            distance_from_prev_txn: 5.3,
            different_country: false,
            is_foreign_transaction: false,
            amount_to_limit_ratio: 0.05,
            amount_to_available_ratio: 0.08,
            account_age_days: 543,
            days_since_address_change: 120,
            prob_fraud: 0.12,
            account_number: 239857492,
            customer_id: 239857492,
            merchant_name: "Amazon Marketplace".to_string(),
        },
        Transaction {
            txn_count_24h: 3,
            amount_to_avg_ratio: 2.7,
            amount_24h: 1240.0,
            distance_from_prev_txn: 3020.75,
            different_country: true,
            is_foreign_transaction: true,
            amount_to_limit_ratio: 0.25,
            amount_to_available_ratio: 0.30,
            account_age_days: 89,
            days_since_address_change: 45,
            prob_fraud: 0.76,
            account_number: 456789123,
            customer_id: 456789123,
            merchant_name: "AliExpress".to_string(),
        },
        Transaction {
            txn_count_24h: 5,
            amount_to_avg_ratio: 3.9,
            amount_24h: 2580.75,
            distance_from_prev_txn: 0.0,
            different_country: false,
            is_foreign_transaction: false,
            amount_to_limit_ratio: 0.45,
            amount_to_available_ratio: 0.55,
            account_age_days: 1095,
            days_since_address_change: 980,
            prob_fraud: 0.35,
            account_number: 789123456,
            customer_id: 789123456,
            merchant_name: "Best Buy".to_string(),
        },
        Transaction {
            txn_count_24h: 1,
            amount_to_avg_ratio: 5.6,
            amount_24h: 4500.0,
            distance_from_prev_txn: 8762.3,
            different_country: true,
            is_foreign_transaction: true,
            amount_to_limit_ratio: 0.85,
            amount_to_available_ratio: 0.92,
            account_age_days: 45,
            days_since_address_change: 30,
            prob_fraud: 0.94,
            account_number: 123456789,
            customer_id: 123456789,
            merchant_name: "Unknown Vendor Ltd".to_string(),
        },
    ]
}
