//! In-memory submitter.
//!
//! Records every submission it receives and answers after an optional
//! delay. Outcomes can be scripted, which makes it the driver of choice
//! for demos and tests where no real receiver exists.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{Submission, Submitter};
use crate::error::SubmitError;

/// Latency of [`MemorySubmitter::simulated`], mimicking a slow backend.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(2);

/// Submitter that keeps submissions in memory.
///
/// Each call records the submission first, waits for the configured delay,
/// then answers with the next scripted outcome, falling back to the
/// default outcome (accept unless built with [`rejecting`](Self::rejecting)).
#[derive(Debug, Default)]
pub struct MemorySubmitter {
    received: Mutex<Vec<Submission>>,
    script: Mutex<VecDeque<Result<(), SubmitError>>>,
    fallback: Option<SubmitError>,
    delay: Option<Duration>,
}

impl MemorySubmitter {
    /// Accepts everything immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts everything after [`SIMULATED_LATENCY`].
    #[must_use]
    pub fn simulated() -> Self {
        Self::new().with_delay(SIMULATED_LATENCY)
    }

    /// Rejects every unscripted call with `reason`.
    #[must_use]
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            fallback: Some(SubmitError::rejected(reason)),
            ..Self::default()
        }
    }

    /// Answers only after `delay`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queues the outcome of a future call. Queued outcomes are consumed in
    /// order before the default applies.
    pub fn push_outcome(&self, outcome: Result<(), SubmitError>) {
        self.script.lock().push_back(outcome);
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.received.lock().len()
    }

    /// Every submission received, in call order.
    #[must_use]
    pub fn received(&self) -> Vec<Submission> {
        self.received.lock().clone()
    }

    /// The most recent submission, if any.
    #[must_use]
    pub fn last(&self) -> Option<Submission> {
        self.received.lock().last().cloned()
    }
}

#[async_trait]
impl Submitter for MemorySubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        self.received.lock().push(submission.clone());
        tracing::debug!(fields = submission.len(), "memory submitter received submission");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.script.lock().pop_front();
        match scripted {
            Some(outcome) => outcome,
            None => self.fallback.clone().map_or(Ok(()), Err),
        }
    }
}
