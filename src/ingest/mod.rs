//! Ingestion sources for scored transactions
//!
//! A source produces transactions one at a time on a fixed cadence and hands
//! each one to a [`RecordSink`]. Two implementations can be selected at
//! runtime through [`create_source`]:
//!
//! - [`SimulatedSource`] replays a freshly generated batch of mock records
//! - [`FileSource`] reads one JSON record per file
//!
//! Both run on a spawned Tokio task and stop through a cancellation token
//! checked before every delivery.

use crate::cli::SourceType;
use crate::types::{ReviewError, Transaction};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub mod file_source;
pub mod generator;
mod schedule;
pub mod simulated;

pub use file_source::FileSource;
pub use generator::{sample_transactions, TransactionGenerator, MERCHANT_CATALOG};
pub use simulated::SimulatedSource;

/// Receiver of ingested records
///
/// Called from the source's task, once per delivered record, in delivery order.
pub trait RecordSink: Send + Sync {
    /// Accept one newly loaded transaction
    fn on_record_loaded(&self, record: Transaction);

    /// Report a record that could not be loaded
    ///
    /// # Arguments
    ///
    /// * `origin` - The file or source the record came from
    /// * `error` - Why loading failed
    fn on_load_failed(&self, origin: &str, error: ReviewError) {
        warn!(%origin, %error, "Failed to load transaction");
    }
}

impl<F> RecordSink for F
where
    F: Fn(Transaction) + Send + Sync,
{
    fn on_record_loaded(&self, record: Transaction) {
        self(record)
    }
}

/// Outcome of one delivery, as forwarded by [`ChannelSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    Loaded(Transaction),
    Failed { origin: String, error: ReviewError },
}

/// Sink that forwards every delivery over an unbounded channel
///
/// Lets the owner of a review session apply records on its own task.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<LoadEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver its events arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<LoadEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn forward(&self, event: LoadEvent) {
        if self.sender.send(event).is_err() {
            debug!("Load event dropped, receiver closed");
        }
    }
}

impl RecordSink for ChannelSink {
    fn on_record_loaded(&self, record: Transaction) {
        self.forward(LoadEvent::Loaded(record));
    }

    fn on_load_failed(&self, origin: &str, error: ReviewError) {
        self.forward(LoadEvent::Failed {
            origin: origin.to_string(),
            error,
        });
    }
}

/// A producer of transactions delivered on a timer
///
/// `start` and `stop` must be called from within a Tokio runtime.
pub trait IngestionSource: Send {
    /// Begin delivering records
    ///
    /// Starting a running source abandons the current stream and begins a
    /// fresh one; there is never more than one stream per source.
    fn start(&mut self);

    /// Halt all further deliveries
    ///
    /// Safe to call when the source is idle.
    fn stop(&mut self);

    /// Whether deliveries are still pending
    fn is_running(&self) -> bool;
}

/// Configuration shared by the ingestion sources
#[derive(Clone, Debug, PartialEq)]
pub struct IngestConfig {
    /// Number of generated records per simulated run
    pub batch_size: usize,
    /// Delay before each delivery
    pub interval: Duration,
    /// Seed for the generator; entropy when absent
    pub seed: Option<u64>,
    /// Candidate record files for the file source
    pub files: Vec<PathBuf>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: 50,
            interval: Duration::from_millis(500),
            seed: None,
            files: Vec::new(),
        }
    }
}

impl IngestConfig {
    /// Create an IngestConfig with custom cadence
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, interval: Duration) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "Invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let interval = if interval.is_zero() {
            warn!(
                default_ms = default.interval.as_millis() as u64,
                "Invalid interval (0ms), using default"
            );
            default.interval
        } else {
            interval
        };

        Self {
            batch_size,
            interval,
            ..default
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }
}

/// Create an ingestion source based on the specified source type
///
/// # Arguments
///
/// * `source_type` - Which source to build
/// * `config` - Cadence, batch size, seed and file list
/// * `sink` - Receiver of every delivered record
///
/// # Returns
///
/// * `Ok(Box<dyn IngestionSource>)` - An idle source; call `start` to begin
/// * `Err(ReviewError::NoInputFiles)` - The file source was chosen without files
pub fn create_source(
    source_type: SourceType,
    config: IngestConfig,
    sink: Arc<dyn RecordSink>,
) -> Result<Box<dyn IngestionSource>, ReviewError> {
    match source_type {
        SourceType::Simulated => Ok(Box::new(SimulatedSource::new(config, sink))),
        SourceType::Files => {
            if config.files.is_empty() {
                return Err(ReviewError::NoInputFiles);
            }
            Ok(Box::new(FileSource::new(config.files, config.interval, sink)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transaction::tests::transaction;
    use rstest::rstest;
    use std::sync::Mutex;

    #[rstest]
    #[case::defaults(50, 500, 50, 500)]
    #[case::custom(10, 20, 10, 20)]
    #[case::zero_batch(0, 20, 50, 20)]
    #[case::zero_interval(10, 0, 10, 500)]
    fn test_ingest_config_new(
        #[case] batch_size: usize,
        #[case] interval_ms: u64,
        #[case] expected_batch: usize,
        #[case] expected_ms: u64,
    ) {
        let config = IngestConfig::new(batch_size, Duration::from_millis(interval_ms));
        assert_eq!(config.batch_size, expected_batch);
        assert_eq!(config.interval, Duration::from_millis(expected_ms));
        assert_eq!(config.seed, None);
        assert!(config.files.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |record: Transaction| seen.lock().unwrap().push(record.merchant_name);

        sink.on_record_loaded(transaction(0.5, "Lyft #1"));
        sink.on_load_failed("x.json", ReviewError::parse_error("x.json", "bad"));

        assert_eq!(*seen.lock().unwrap(), vec!["Lyft #1".to_string()]);
    }

    #[test]
    fn test_channel_sink_forwards_events() {
        let (sink, mut rx) = ChannelSink::new();
        let error = ReviewError::parse_error("x.json", "bad");

        sink.on_record_loaded(transaction(0.5, "Lyft #1"));
        sink.on_load_failed("x.json", error.clone());

        assert_eq!(
            rx.try_recv().unwrap(),
            LoadEvent::Loaded(transaction(0.5, "Lyft #1"))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            LoadEvent::Failed {
                origin: "x.json".to_string(),
                error
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_sink_survives_closed_receiver() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        sink.on_record_loaded(transaction(0.5, "Lyft #1"));
    }

    #[test]
    fn test_create_file_source_requires_files() {
        let (sink, _rx) = ChannelSink::new();
        let result = create_source(SourceType::Files, IngestConfig::default(), Arc::new(sink));
        assert!(matches!(result, Err(ReviewError::NoInputFiles)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_source_returns_idle_source() {
        let (sink, _rx) = ChannelSink::new();
        let config = IngestConfig::default().with_files(vec![PathBuf::from("a.json")]);

        for source_type in [SourceType::Simulated, SourceType::Files] {
            let source = create_source(source_type, config.clone(), Arc::new(sink.clone())).unwrap();
            assert!(!source.is_running());
        }
    }
}
