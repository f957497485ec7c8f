//! Simulated transaction stream
//!
//! Each run generates a fresh batch up front, then replays it one record per
//! interval. The first record arrives one interval after `start`.

use crate::ingest::generator::TransactionGenerator;
use crate::ingest::schedule::{RunHandle, Ticker};
use crate::ingest::{IngestConfig, IngestionSource, RecordSink};
use std::sync::Arc;
use tracing::{debug, info};

/// Ingestion source replaying generated mock transactions
pub struct SimulatedSource {
    config: IngestConfig,
    generator: TransactionGenerator,
    sink: Arc<dyn RecordSink>,
    handle: Option<RunHandle>,
}

impl SimulatedSource {
    pub fn new(config: IngestConfig, sink: Arc<dyn RecordSink>) -> Self {
        let generator = TransactionGenerator::from_seed(config.seed);
        Self {
            config,
            generator,
            sink,
            handle: None,
        }
    }
}

impl IngestionSource for SimulatedSource {
    fn start(&mut self) {
        if self.handle.take().is_some_and(|previous| !previous.is_finished()) {
            info!("Restarting simulated source, pending deliveries abandoned");
        }

        let batch = self.generator.generate_batch(self.config.batch_size);
        let sink = Arc::clone(&self.sink);
        let interval = self.config.interval;

        info!(
            batch_size = batch.len(),
            interval_ms = interval.as_millis() as u64,
            "Simulated source started"
        );

        self.handle = Some(RunHandle::spawn(move |token| async move {
            let mut ticker = Ticker::new(interval, token);
            let total = batch.len();

            for (delivered, record) in batch.into_iter().enumerate() {
                if !ticker.tick().await || !ticker.deliver(|| sink.on_record_loaded(record)) {
                    debug!(delivered, total, "Simulated source cancelled");
                    return;
                }
            }

            info!(delivered = total, "Simulated source finished");
        }));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            info!("Simulated source stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SimulatedSource {
    fn drop(&mut self) {
        self.stop();
    }
}
