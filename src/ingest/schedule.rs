//! Cancellable interval scheduling shared by the ingestion sources
//!
//! A running source owns one [`RunHandle`]: a spawned task plus the
//! cancellation token that task checks before every delivery. Stopping a
//! source cancels the token; the task notices on its next check and returns.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Shortest period a [`Ticker`] accepts
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to one running delivery task
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub(crate) struct RunHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl RunHandle {
    /// Spawn `work` on the current Tokio runtime
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub(crate) fn spawn<F, Fut>(work: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let task = tokio::spawn(work(token.clone()));
        Self { token, task }
    }

    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Fixed-period ticker that yields to cancellation
///
/// The first tick fires one full period after creation.
#[derive(Debug)]
pub(crate) struct Ticker {
    interval: Interval,
    token: CancellationToken,
}

impl Ticker {
    pub(crate) fn new(period: Duration, token: CancellationToken) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval, token }
    }

    /// Wait for the next tick
    ///
    /// Returns `false` if the token was cancelled before or while waiting.
    pub(crate) async fn tick(&mut self) -> bool {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => false,
            _ = self.interval.tick() => !self.token.is_cancelled(),
        }
    }

    /// Run `delivery` unless the token was cancelled since the last tick
    ///
    /// Returns `false`, without running `delivery`, once cancelled.
    pub(crate) fn deliver(&self, delivery: impl FnOnce()) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        delivery();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticker_waits_one_period_before_first_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(500), CancellationToken::new());

        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::from_millis(500));
        assert!(ticker.tick().await);
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_stops_on_cancel() {
        let token = CancellationToken::new();
        let mut ticker = Ticker::new(Duration::from_millis(500), token.clone());

        token.cancel();
        assert!(!ticker.tick().await);
        assert!(!ticker.deliver(|| panic!("delivered after cancel")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_tick_blocks_delivery() {
        let token = CancellationToken::new();
        let mut ticker = Ticker::new(Duration::from_millis(500), token.clone());
        let mut delivered = 0;

        assert!(ticker.tick().await);
        assert!(ticker.deliver(|| delivered += 1));

        assert!(ticker.tick().await);
        token.cancel();
        assert!(!ticker.deliver(|| delivered += 1));
        assert_eq!(delivered, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_task() {
        let (tx, mut rx) = tokio::sync::oneshot::channel();
        let handle = RunHandle::spawn(|token| async move {
            token.cancelled().await;
            let _ = tx.send(());
        });

        drop(handle);
        assert!(rx.try_recv().is_err());
        time::sleep(Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_ok());
    }
}
