//! Review session state
//!
//! The ReviewSession is the single owner of the transaction collection and the
//! live filter criteria. Every derived view (filtered list, statistics, pages,
//! export) is recomputed from scratch from those two pieces of state, so there
//! is no incremental view to keep in sync.
//!
//! # Ordering
//!
//! Transactions are held newest first: each ingested record is placed at the
//! front of the collection. Filtering preserves that order; pages are sorted
//! by risk on top of it.

use crate::core::aggregate::{aggregate, Statistics};
use crate::core::engine::{filter, high_risk, sort_by_risk_descending};
use crate::ingest::LoadEvent;
use crate::io::csv_format::to_delimited_text;
use crate::types::{FilterCriteria, ReviewError, RiskLevel, Transaction};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Default number of rows revealed per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One row of a [`PageView`]
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Stable row key: `"{account_number}-{index}"`
    ///
    /// Account numbers are not unique, so the row index is part of the key.
    pub key: String,

    pub risk: RiskLevel,

    pub transaction: Transaction,
}

/// The visible slice of the filtered, risk-sorted transactions
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Rows revealed so far (pages accumulate: page 2 shows 20 rows)
    pub rows: Vec<DisplayRow>,

    /// Number of transactions matching the current criteria
    pub total: usize,

    /// The page that was requested (at least 1)
    pub page: usize,

    /// Whether another page would reveal more rows
    pub has_more: bool,
}

/// Owner of the transaction collection and the live filter criteria
#[derive(Debug, Clone)]
pub struct ReviewSession {
    records: VecDeque<Transaction>,
    criteria: FilterCriteria,
    page_size: usize,
    failed_loads: usize,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    /// Create an empty session with default criteria
    pub fn new() -> Self {
        ReviewSession {
            records: VecDeque::new(),
            criteria: FilterCriteria::default(),
            page_size: DEFAULT_PAGE_SIZE,
            failed_loads: 0,
        }
    }

    /// Create a session pre-populated with `records`
    ///
    /// `records` is taken as already being in display order (newest first).
    pub fn with_records(records: Vec<Transaction>) -> Self {
        ReviewSession {
            records: records.into(),
            ..Self::new()
        }
    }

    /// Change the number of rows revealed per page
    ///
    /// A page size of zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 {
            warn!(
                page_size,
                default = DEFAULT_PAGE_SIZE,
                "Invalid page size, using default"
            );
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    /// Add a newly loaded transaction to the front of the collection
    pub fn ingest(&mut self, record: Transaction) {
        debug!(
            account_number = record.account_number,
            prob_fraud = record.prob_fraud,
            risk = %record.risk_level(),
            "Transaction ingested"
        );
        self.records.push_front(record);
    }

    /// Apply an event delivered by an ingestion source
    ///
    /// Loaded records are ingested; failures are counted and otherwise leave
    /// the collection unchanged.
    pub fn apply(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded(record) => self.ingest(record),
            LoadEvent::Failed { origin, error } => {
                self.failed_loads += 1;
                warn!(%origin, %error, "Skipping input that failed to load");
            }
        }
    }

    /// All transactions, newest first
    pub fn records(&self) -> impl ExactSizeIterator<Item = &Transaction> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of inputs that failed to load
    pub fn failed_loads(&self) -> usize {
        self.failed_loads
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Mutable access to the live criteria for field-by-field edits
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Restore the default, unconstrained criteria
    pub fn reset_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Transactions matching the current criteria, newest first
    pub fn filtered(&self) -> Vec<Transaction> {
        filter(self.records.iter(), &self.criteria)
    }

    /// Statistics over the filtered transactions
    pub fn statistics(&self) -> Statistics {
        aggregate(&self.filtered())
    }

    /// Filtered transactions eligible for export (`prob_fraud > 0.8`)
    pub fn high_risk(&self) -> Vec<Transaction> {
        high_risk(&self.filtered())
    }

    /// Export the filtered high-risk transactions as delimited text
    ///
    /// # Returns
    ///
    /// * `Ok(String)` with a header line and one line per transaction
    /// * `Err(ReviewError::EmptyExport)` if no filtered transaction is high risk
    pub fn export_high_risk(&self) -> Result<String, ReviewError> {
        to_delimited_text(&self.high_risk())
    }

    /// Reveal the first `page` pages of filtered transactions, riskiest first
    ///
    /// Page numbers start at 1; page 0 is treated as page 1.
    ///
    /// # Arguments
    ///
    /// * `page` - How many pages to reveal
    ///
    /// # Returns
    ///
    /// A [`PageView`] containing at most `page * page_size` rows.
    pub fn page(&self, page: usize) -> PageView {
        let page = page.max(1);
        let sorted = sort_by_risk_descending(&self.filtered());
        let total = sorted.len();
        let shown = page.saturating_mul(self.page_size).min(total);

        let rows = sorted
            .into_iter()
            .take(shown)
            .enumerate()
            .map(|(index, transaction)| DisplayRow {
                key: format!("{}-{}", transaction.account_number, index),
                risk: transaction.risk_level(),
                transaction,
            })
            .collect();

        PageView {
            rows,
            total,
            page,
            has_more: shown < total,
        }
    }
}
