//! File-backed transaction stream
//!
//! Reads one JSON transaction per file, one file per interval, never more
//! than one read outstanding. Files that fail to read or parse are reported
//! to the sink and skipped.

use crate::ingest::schedule::{RunHandle, Ticker};
use crate::ingest::{IngestionSource, RecordSink};
use crate::io::parse_transaction;
use crate::types::{ReviewError, Transaction};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Whether a path names a JSON record file
///
/// Only the `.json` suffix of the file name is checked (case-sensitive).
pub fn is_json_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"))
}

/// Ingestion source reading user-supplied JSON files
pub struct FileSource {
    files: Vec<PathBuf>,
    interval: Duration,
    sink: Arc<dyn RecordSink>,
    handle: Option<RunHandle>,
}

impl FileSource {
    /// Create a file source over the JSON files among `candidates`
    ///
    /// # Arguments
    ///
    /// * `candidates` - Paths to consider, in delivery order
    /// * `interval` - Delay before each file is read
    /// * `sink` - Receiver of parsed records and per-file failures
    pub fn new(candidates: Vec<PathBuf>, interval: Duration, sink: Arc<dyn RecordSink>) -> Self {
        let (files, skipped): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|path| is_json_file(path));

        for path in &skipped {
            debug!(path = %path.display(), "Skipping non-JSON file");
        }

        Self {
            files,
            interval,
            sink,
            handle: None,
        }
    }

    /// The files this source will read
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

async fn load_file(path: &Path, origin: &str) -> Result<Transaction, ReviewError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReviewError::read_error(origin, &e))?;
    parse_transaction(origin, &text)
}

impl IngestionSource for FileSource {
    fn start(&mut self) {
        if self.handle.take().is_some_and(|previous| !previous.is_finished()) {
            info!("Restarting file source, pending files abandoned");
        }

        let files = self.files.clone();
        let sink = Arc::clone(&self.sink);
        let interval = self.interval;

        info!(files = files.len(), "File source started");

        self.handle = Some(RunHandle::spawn(move |token| async move {
            let mut ticker = Ticker::new(interval, token);
            let mut loaded = 0usize;
            let mut failed = 0usize;

            for path in &files {
                if !ticker.tick().await {
                    debug!(loaded, failed, "File source cancelled");
                    return;
                }

                let origin = path.display().to_string();
                let result = load_file(path, &origin).await;
                let delivered = ticker.deliver(|| match result {
                    Ok(record) => {
                        loaded += 1;
                        sink.on_record_loaded(record);
                    }
                    Err(error) => {
                        failed += 1;
                        debug!(%origin, %error, "File could not be loaded");
                        sink.on_load_failed(&origin, error);
                    }
                });
                if !delivered {
                    debug!(loaded, failed, "File source cancelled");
                    return;
                }
            }

            info!(loaded, failed, "File source finished");
        }));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            info!("File source stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for FileSource {
    fn drop(&mut self) {
        self.stop();
    }
}
