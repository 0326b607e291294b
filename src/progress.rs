//! Periodic search-progress reporting.
//!
//! The search itself is single-threaded; a reporter thread only reads the
//! shared counters through atomic loads and never touches engine state, so
//! no synchronization beyond the atomics is needed. The reporter runs
//! until the search's stop flag is set, which the solver does as soon as
//! the search returns.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::dlx::SearchControl;

/// One progress reading.
#[derive(Clone, Copy, Debug)]
pub struct ProgressSnapshot {
    pub elapsed: Duration,
    pub nodes_visited: u64,
    pub solutions_found: u64,
}

/// A background thread delivering counter snapshots at a fixed interval.
pub struct ProgressReporter {
    handle: Option<JoinHandle<()>>,
}

impl ProgressReporter {
    /// Spawns the reporter.
    ///
    /// Every `interval` the callback receives a fresh snapshot; the thread
    /// exits once `control`'s stop flag is set (one final snapshot may be
    /// delivered after the flag goes up, since the sleep completes first).
    pub fn spawn<F>(control: Arc<SearchControl>, interval: Duration, mut report: F) -> Self
    where
        F: FnMut(ProgressSnapshot) + Send + 'static,
    {
        let handle = thread::spawn(move || {
            let started = Instant::now();
            while !control.stop_requested() {
                thread::sleep(interval);
                report(ProgressSnapshot {
                    elapsed: started.elapsed(),
                    nodes_visited: control.nodes_visited(),
                    solutions_found: control.solutions_found(),
                });
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Waits for the reporter thread to exit.
    ///
    /// Blocks until the stop flag is observed, so request the stop first.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
