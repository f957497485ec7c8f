use crate::ingest::IngestConfig;
use crate::types::{FilterCriteria, RiskCategory};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Review scored transactions for fraud risk
#[derive(Parser, Debug)]
#[command(name = "fraud-review")]
#[command(about = "Review scored transactions for fraud risk", long_about = None)]
pub struct CliArgs {
    /// JSON record files to load (one transaction per file)
    #[arg(value_name = "FILES", help = "Transaction JSON files; non-.json files are skipped")]
    pub files: Vec<PathBuf>,

    /// Ingestion source to use
    #[arg(
        long = "source",
        value_name = "SOURCE",
        help = "Ingestion source: 'simulated' or 'files' (default: files when FILES are given)"
    )]
    pub source: Option<SourceType>,

    /// Number of generated transactions (simulated source only)
    #[arg(
        long = "count",
        value_name = "N",
        help = "Number of transactions to generate (default: 50)"
    )]
    pub count: Option<usize>,

    /// Delay between deliveries in milliseconds
    #[arg(
        long = "interval-ms",
        value_name = "MS",
        help = "Delay between deliveries in milliseconds (default: 500)"
    )]
    pub interval_ms: Option<u64>,

    /// Seed for reproducible generated data
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start from the built-in sample transactions
    #[arg(long = "with-samples")]
    pub with_samples: bool,

    /// Case-insensitive text matched against every field
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Lower bound on the fraud probability
    #[arg(long = "min-prob", value_name = "P", default_value_t = 0.0)]
    pub min_prob: f64,

    /// Upper bound on the fraud probability
    #[arg(long = "max-prob", value_name = "P", default_value_t = 1.0)]
    pub max_prob: f64,

    /// Only keep foreign transactions
    #[arg(long = "foreign-only")]
    pub foreign_only: bool,

    /// Only keep transactions made in a different country
    #[arg(long = "different-country-only")]
    pub different_country_only: bool,

    /// Case-insensitive text matched against the merchant name
    #[arg(long = "merchant", value_name = "TEXT")]
    pub merchant: Option<String>,

    /// Risk categories to keep
    #[arg(
        long = "risk",
        value_name = "CATEGORIES",
        value_delimiter = ',',
        help = "Comma-separated risk categories: red, yellow, green (default: all)"
    )]
    pub risk: Vec<RiskCategory>,

    /// Number of pages of rows to show
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Write the high-risk filtered transactions as CSV instead of the report
    #[arg(long = "export")]
    pub export: bool,
}

/// Available ingestion sources
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceType {
    Simulated,
    Files,
}

impl CliArgs {
    /// The source to run
    ///
    /// An explicit `--source` wins; otherwise files are read when any were
    /// given and transactions are simulated when none were.
    pub fn source_type(&self) -> SourceType {
        match self.source {
            Some(source) => source,
            None if self.files.is_empty() => SourceType::Simulated,
            None => SourceType::Files,
        }
    }

    /// Create an IngestConfig from CLI arguments
    ///
    /// Zero values are replaced with defaults and a warning is logged.
    ///
    /// # Returns
    ///
    /// An `IngestConfig` with values from CLI arguments or defaults.
    pub fn to_ingest_config(&self) -> IngestConfig {
        let config = if self.count.is_some() || self.interval_ms.is_some() {
            let default = IngestConfig::default();
            IngestConfig::new(
                self.count.unwrap_or(default.batch_size),
                self.interval_ms
                    .map(Duration::from_millis)
                    .unwrap_or(default.interval),
            )
        } else {
            IngestConfig::default()
        };

        config
            .with_seed(self.seed)
            .with_files(self.files.clone())
    }

    /// Create the FilterCriteria described by the filter flags
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search.clone().unwrap_or_default(),
            min_fraud_prob: self.min_prob,
            max_fraud_prob: self.max_prob,
            foreign_only: self.foreign_only,
            different_country_only: self.different_country_only,
            merchant_name: self.merchant.clone().unwrap_or_default(),
            risk_categories: self.risk.iter().copied().collect(),
        }
    }
}
