// src/save/pool.rs
// =============================================================================
// A bounded worker pool for async jobs.
//
// `WorkerPool::run` turns a list of inputs into a stream of outputs, running
// at most `max_workers` jobs at the same time. Results come back in the order
// they finish, not the order they were submitted.
//
// Under the hood this is `buffer_unordered`: the stream keeps up to N futures
// in flight and starts the next one as soon as a slot frees up.
// =============================================================================

use futures::stream::{self, Stream, StreamExt};
use std::future::Future;

#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    max_workers: usize,
}

impl WorkerPool {
    /// A pool that runs up to `max_workers` jobs at once (at least 1)
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Runs `job` for every item, yielding results as they complete
    pub fn run<I, F, Fut>(&self, items: I, job: F) -> impl Stream<Item = Fut::Output>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Fut,
        Fut: Future,
    {
        stream::iter(items.into_iter().map(job)).buffer_unordered(self.max_workers)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Is this a thread pool?
//    - Not exactly. All jobs run as futures on the tokio runtime
//    - While one page waits on the network or the disk, others make progress
//    - The limit still caps how many requests hit the server at once
//
// 2. Why `impl Stream` as the return type?
//    - The concrete stream type is long and unnameable (it contains the
//      closure type); `impl Trait` lets the caller just use it as a Stream
// -----------------------------------------------------------------------------
