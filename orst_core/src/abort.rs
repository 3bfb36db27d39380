//! Cooperative cancellation of running races.
//!
//! An [`AbortSignal`] owns an epoch counter. Every race captures the epoch it was started in as an
//! [`AbortToken`]; aborting bumps the epoch, so every token captured before the bump reports
//! itself as aborted while races started afterwards are unaffected.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Why a sort stopped before finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Interrupt {
    #[error("the run was aborted")]
    Aborted,
}

/// The writing side of cancellation. Cloning shares the same epoch.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    epoch: Arc<AtomicU64>,
}

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts every token handed out so far. Irreversible for those tokens.
    pub fn abort(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }

    /// Hands out a token bound to the current epoch.
    pub fn token(&self) -> AbortToken {
        AbortToken {
            epoch: Some(Arc::clone(&self.epoch)),
            captured: self.epoch.load(Ordering::Acquire),
        }
    }
}

/// The reading side of cancellation, checked at every suspension point.
///
/// The default token is not attached to any signal and never aborts.
#[derive(Debug, Clone, Default)]
pub struct AbortToken {
    epoch: Option<Arc<AtomicU64>>,
    captured: u64,
}

impl AbortToken {
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.epoch
            .as_ref()
            .is_some_and(|epoch| epoch.load(Ordering::Acquire) != self.captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_token_never_aborts() {
        assert!(!AbortToken::default().is_aborted());
    }

    #[test]
    fn abort_hits_earlier_tokens_only() {
        let signal = AbortSignal::new();
        let first = signal.token();
        let also_first = first.clone();
        assert!(!first.is_aborted());

        signal.abort();
        let second = signal.token();

        assert!(first.is_aborted());
        assert!(also_first.is_aborted());
        assert!(!second.is_aborted());

        signal.abort();
        assert!(first.is_aborted());
        assert!(second.is_aborted());
    }
}
