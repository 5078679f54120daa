//! Bounded task runner for generation requests.
//!
//! Replaces fire-and-forget spawning with a semaphore-gated pool: requests
//! are accepted immediately and queue for a generation slot inside their own
//! task, so the HTTP handler never blocks and pollers keep the same status
//! contract while a request waits.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

/// Default number of simultaneous generation runs.
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Runs generation futures with bounded concurrency and graceful shutdown.
///
/// Every submitted run shares one cancellation token; `shutdown` cancels it
/// and waits for in-flight runs to drain. Runs still queued for a slot at
/// shutdown are dropped without starting.
pub struct TaskRunner {
    semaphore: Arc<Semaphore>,
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl TaskRunner {
    /// Create a runner allowing `max_concurrent` simultaneous runs.
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// The shared cancellation token, for wiring into pipeline runs.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Spawn a generation future under the concurrency bound.
    ///
    /// Returns immediately; the permit is acquired inside the spawned task,
    /// so excess submissions queue rather than rejecting or blocking.
    pub fn submit<F>(&self, request_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let semaphore = Arc::clone(&self.semaphore);
        let cancel = self.cancel.clone();
        let request_id = request_id.to_string();

        self.tracker.spawn(async move {
            // Biased: shutdown wins over a free permit.
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(request_id = %request_id, "Dropping queued run, runner is shutting down");
                }
                permit = semaphore.acquire_owned() => {
                    let _permit = permit.expect("Semaphore should not be closed");
                    debug!(request_id = %request_id, "Generation slot acquired");
                    future.await;
                }
            }
        });
    }

    /// Number of generation slots currently free.
    pub fn available_slots(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Cancel all runs and wait for in-flight ones to finish.
    pub async fn shutdown(&self) {
        info!("Shutting down task runner");
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        info!("All generation runs drained");
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrency_is_bounded() {
        let runner = TaskRunner::new(1);
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        for i in 0..3 {
            let active = Arc::clone(&active);
            let peak = Arc::clone(&peak);
            runner.submit(&format!("req-{i}"), async move {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            });
        }

        runner.tracker.close();
        runner.tracker.wait().await;
        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn shutdown_waits_for_running_tasks() {
        let runner = TaskRunner::new(2);
        let finished = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&finished);
        runner.submit("req-1", async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });

        // Give the task a chance to grab its permit before cancelling.
        tokio::time::sleep(Duration::from_millis(5)).await;
        runner.shutdown().await;
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn shutdown_drops_queued_tasks() {
        let runner = TaskRunner::new(1);
        let queued_ran = Arc::new(AtomicBool::new(false));

        runner.submit("req-holding-slot", async {
            tokio::time::sleep(Duration::from_millis(50)).await;
        });
        tokio::time::sleep(Duration::from_millis(5)).await;

        let flag = Arc::clone(&queued_ran);
        runner.submit("req-queued", async move {
            flag.store(true, Ordering::SeqCst);
        });

        runner.shutdown().await;
        assert!(!queued_ran.load(Ordering::SeqCst));
    }
}
