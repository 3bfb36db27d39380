//! Per-run counters and timing.
//!
//! The counters only ever go up. A new [`Instrumentation`] is created for every run, which is the
//! only way to start again from zero.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, PoisonError,
};
use std::time::{Duration, Instant};

use serde::Serialize;

/// A point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub comparisons: usize,
    pub operations: usize,
}

/// Counters shared between a running sort and whoever reports on it.
///
/// Clones observe the same counters, so a reporter can read a [`snapshot`](Self::snapshot) at any
/// time while the sort keeps recording.
#[derive(Debug, Clone, Default)]
pub struct Instrumentation {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    comparisons: AtomicUsize,
    operations: AtomicUsize,
    span: Mutex<Span>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Span {
    started: Option<Instant>,
    finished: Option<Instant>,
}

impl Instrumentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// One value-to-value decision.
    pub fn record_comparison(&self) {
        self.inner.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    /// One swap, positional write or elimination.
    pub fn record_operation(&self) {
        self.inner.operations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Counts {
        Counts {
            comparisons: self.inner.comparisons.load(Ordering::Relaxed),
            operations: self.inner.operations.load(Ordering::Relaxed),
        }
    }

    /// Starts the clock. Only the first call counts.
    pub fn start(&self) {
        let mut span = self.span();
        span.started.get_or_insert_with(Instant::now);
    }

    /// Stops the clock. Only the first call counts.
    pub fn finish(&self) {
        let mut span = self.span();
        if span.started.is_some() {
            span.finished.get_or_insert_with(Instant::now);
        }
    }

    /// Time spent so far on the monotonic clock. Zero before [`start`](Self::start).
    pub fn elapsed(&self) -> Duration {
        let span = *self.span();
        match span {
            Span {
                started: Some(started),
                finished: Some(finished),
            } => finished.duration_since(started),
            Span {
                started: Some(started),
                finished: None,
            } => started.elapsed(),
            _ => Duration::ZERO,
        }
    }

    fn span(&self) -> std::sync::MutexGuard<'_, Span> {
        self.inner
            .span
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
