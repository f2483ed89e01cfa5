use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::ticket::SubmissionReceipt;
use crate::error::AppResult;

/// Fire-and-forget execution for the asynchronous endpoint mode.
///
/// The HTTP caller never waits on a permit; tasks over the bound queue inside
/// their spawned task instead of piling up as unbounded in-flight work.
/// Outcomes are never reported back over HTTP, only logged.
#[derive(Clone)]
pub struct BackgroundDispatcher {
    permits: Arc<Semaphore>,
}

impl BackgroundDispatcher {
    pub fn new(max_in_flight: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_in_flight)),
        }
    }

    pub fn spawn<F>(&self, endpoint: &'static str, pipeline: F)
    where
        F: Future<Output = AppResult<SubmissionReceipt>> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        tokio::spawn(async move {
            // acquire() only fails if the semaphore is closed, which we never do.
            let Ok(_permit) = permits.acquire().await else {
                return;
            };
            match pipeline.await {
                Ok(receipt) => {
                    tracing::info!(endpoint, status = receipt.status, "background ticket filed");
                }
                Err(err) => {
                    tracing::error!(endpoint, "background ticket failed: {err}");
                }
            }
        });
    }
}
