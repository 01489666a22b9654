//! Link verification
//!
//! This module contains:
//! - The [`LinkVerifier`] seam and its HTTP implementation
//! - [`VerificationPool`], which runs verifications concurrently under a fixed
//!   number of permits and tallies outcomes through a single collector

use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{JoinHandle, JoinSet};

/// Outcome of probing one link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Reachable,
    Broken,
}

impl LinkStatus {
    pub fn is_broken(&self) -> bool {
        matches!(self, LinkStatus::Broken)
    }
}

/// Probes a single absolute URL for liveness
pub trait LinkVerifier: Send + Sync + 'static {
    fn check(&self, url: &str) -> impl Future<Output = LinkStatus> + Send;
}

/// Verifies links with an HTTP GET and a fixed timeout
///
/// A link is broken when the request fails at the transport level (timeout,
/// refused connection, DNS failure, invalid URL) or the status is 400 or above.
/// The body is never read; dropping the response releases the connection.
#[derive(Debug, Clone)]
pub struct HttpLinkVerifier {
    client: Client,
    timeout: Duration,
}

impl HttpLinkVerifier {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

impl LinkVerifier for HttpLinkVerifier {
    async fn check(&self, url: &str) -> LinkStatus {
        match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) if response.status().as_u16() >= 400 => {
                tracing::debug!("Link {} returned status {}", url, response.status());
                LinkStatus::Broken
            }
            Ok(_) => LinkStatus::Reachable,
            Err(e) => {
                if e.is_timeout() {
                    tracing::debug!("Link {} timed out", url);
                } else {
                    tracing::debug!("Link {} failed: {}", url, e);
                }
                LinkStatus::Broken
            }
        }
    }
}

/// Bounded fan-out of link verifications for one analysis
///
/// At most `max_in_flight` verifications run at once; [`schedule`](Self::schedule)
/// waits for a free permit before spawning. Tasks never touch the analysis
/// result: each sends its outcome on a channel drained by one collector task.
/// [`finish`](Self::finish) is the barrier that waits for every task.
pub struct VerificationPool<V: LinkVerifier> {
    verifier: Arc<V>,
    permits: Arc<Semaphore>,
    tasks: JoinSet<()>,
    outcomes: mpsc::UnboundedSender<LinkStatus>,
    collector: JoinHandle<usize>,
    scheduled: usize,
}

impl<V: LinkVerifier> VerificationPool<V> {
    /// Creates a pool and starts its collector
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(verifier: Arc<V>, max_in_flight: usize) -> Self {
        let (outcomes, mut receiver) = mpsc::unbounded_channel::<LinkStatus>();

        let collector = tokio::spawn(async move {
            let mut broken = 0;
            while let Some(status) = receiver.recv().await {
                if status.is_broken() {
                    broken += 1;
                }
            }
            broken
        });

        Self {
            verifier,
            permits: Arc::new(Semaphore::new(max_in_flight)),
            tasks: JoinSet::new(),
            outcomes,
            collector,
            scheduled: 0,
        }
    }

    /// Number of verifications scheduled so far
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Schedules a verification of `url`, waiting while all permits are taken
    pub async fn schedule(&mut self, url: String) {
        self.scheduled += 1;

        let permit = match self.permits.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => {
                // Only possible if the semaphore was closed
                tracing::warn!("Verification permits closed, counting {} as broken", url);
                let _ = self.outcomes.send(LinkStatus::Broken);
                return;
            }
        };

        let verifier = Arc::clone(&self.verifier);
        let outcomes = self.outcomes.clone();

        self.tasks.spawn(async move {
            let status = verifier.check(&url).await;
            drop(permit);
            tracing::debug!("Verified {}: {:?}", url, status);
            let _ = outcomes.send(status);
        });
    }

    /// Waits for every scheduled verification and returns the broken count
    ///
    /// A verification task that panicked is counted as broken.
    pub async fn finish(self) -> usize {
        let Self {
            mut tasks,
            outcomes,
            collector,
            ..
        } = self;

        drop(outcomes);

        let mut panicked = 0;
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::warn!("Link verification task failed: {}", e);
                panicked += 1;
            }
        }

        let broken = match collector.await {
            Ok(broken) => broken,
            Err(e) => {
                tracing::warn!("Verification collector failed: {}", e);
                0
            }
        };

        broken + panicked
    }
}
