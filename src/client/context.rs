//! # Request Context
//!
//! Caller-supplied cancellation and deadline for a single `get`. The context is
//! threaded through every live query the reconciler issues; the cache lookup never
//! blocks and ignores it.

use crate::error::{StoreError, StoreResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadline {
    at: Instant,
    budget: Duration,
}

/// Cancellation and deadline applied to live store calls
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: CancellationToken,
    deadline: Option<Deadline>,
}

impl RequestContext {
    /// Context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Context bound to an existing cancellation token
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancellation: token,
            deadline: None,
        }
    }

    /// Context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::background().bounded_by(Some(timeout))
    }

    /// Copy of this context whose deadline is no later than `now + timeout`
    ///
    /// A timeout too large to represent as an instant imposes no deadline.
    pub fn bounded_by(&self, timeout: Option<Duration>) -> Self {
        let mut bounded = self.clone();
        let candidate = timeout.and_then(|budget| {
            Instant::now()
                .checked_add(budget)
                .map(|at| Deadline { at, budget })
        });
        if let Some(candidate) = candidate {
            bounded.deadline = match self.deadline {
                Some(existing) if existing.at <= candidate.at => Some(existing),
                _ => Some(candidate),
            };
        }
        bounded
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Time left before the deadline, if one is set
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.at.saturating_duration_since(Instant::now()))
    }

    /// Drive a store call to completion unless the context is cancelled or expires first
    pub async fn run<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        if self.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        let guarded = async {
            tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => Err(StoreError::Cancelled),
                result = call => result,
            }
        };

        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline.at, guarded)
                .await
                .map_err(|_| StoreError::DeadlineExceeded(deadline.budget))?,
            None => guarded.await,
        }
    }
}
