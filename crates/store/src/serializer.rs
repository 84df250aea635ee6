// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write serialization for the record store
//!
//! An append is a read-modify-write cycle over the whole snapshot. Two
//! cycles interleaving would both compute the same next identifier and the
//! later write would silently drop the earlier one. The serializer queues
//! exclusive operations so each cycle runs to completion before the next
//! starts.

use std::future::Future;
use tokio::sync::Mutex;

/// Queues mutating store operations so they never interleave.
///
/// Reads do not enter the queue: a stale read racing a write is acceptable,
/// a duplicate identifier is not.
#[derive(Debug, Default)]
pub struct WriteSerializer {
    lock: Mutex<()>,
}

impl WriteSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an operation while holding exclusive access.
    ///
    /// Waiters are granted access in arrival order (tokio's mutex is FIFO).
    /// Once dequeued an operation runs to completion; a failing operation
    /// does not affect the ones still queued.
    pub async fn run_exclusive<F, T>(&self, op: F) -> T
    where
        F: Future<Output = T>,
    {
        let _guard = self.lock.lock().await;
        op.await
    }
}

#[cfg(test)]
#[path = "serializer_tests.rs"]
mod tests;
