//! Bounded concurrency gate for outbound deliveries.
//!
//! The gate implements the pipeline's backpressure policy: accumulate up to
//! `capacity` pending futures, then resolve the whole batch before admitting
//! more. Batches are strictly sequential — batch N fully settles before
//! batch N+1 starts — so at no instant are more than `capacity` deliveries
//! in flight.

use futures::future::{join_all, BoxFuture};
use futures::{Future, FutureExt};

/// A fixed-capacity batch of pending futures.
pub struct BatchGate<'a, T> {
    capacity: usize,
    pending: Vec<BoxFuture<'a, T>>,
}

impl<'a, T> BatchGate<'a, T> {
    /// Create a gate admitting at most `capacity` futures per batch.
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            pending: Vec::with_capacity(capacity),
        }
    }

    /// Queue a future for the current batch.
    pub fn push(&mut self, future: impl Future<Output = T> + Send + 'a) {
        self.pending.push(future.boxed());
    }

    /// Whether the current batch has reached capacity and must be drained
    /// before another future is admitted.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pending.len() >= self.capacity
    }

    /// Number of futures queued in the current batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the current batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Run the queued batch to completion and return every outcome.
    ///
    /// All futures in the batch run concurrently; the call returns only once
    /// every one of them has settled.
    pub async fn drain(&mut self) -> Vec<T> {
        let batch: Vec<_> = self.pending.drain(..).collect();
        join_all(batch).await
    }
}
