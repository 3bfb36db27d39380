//! Turns the user facing speed into the delay every sorter waits between steps.
//!
//! The speed scale runs from [`MIN_SPEED`] to [`MAX_SPEED`]. Speed 1 waits [`MAX_DELAY_MS`]
//! milliseconds per step, speed 100 does not wait at all and only yields to the executor, so a
//! hot loop can never starve whoever is drawing the bars.
//!
//! ```
//! use orst_core::pacing::{delay_for_speed, Pacing};
//! use std::time::Duration;
//!
//! assert_eq!(delay_for_speed(1), Duration::from_millis(500));
//! assert_eq!(delay_for_speed(100), Duration::ZERO);
//!
//! let pacing = Pacing::new(1);
//! let shared = pacing.clone();
//! pacing.set_speed(100);
//! assert_eq!(shared.current_delay(), Duration::ZERO);
//! ```

use std::sync::{
    atomic::{AtomicU32, AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
pub const DEFAULT_SPEED: u32 = 50;
pub const MAX_DELAY_MS: u64 = 500;

/// Suspension factors. Scan loops use the smaller ones so they do not feel slower than the
/// swaps and writes they lead up to.
pub const FULL: f64 = 1.0;
pub const HALF: f64 = 0.5;
pub const QUARTER: f64 = 0.25;

/// Clamps a speed into `[MIN_SPEED, MAX_SPEED]`.
pub fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// `round(MAX_DELAY_MS * (MAX_SPEED - speed) / (MAX_SPEED - MIN_SPEED))`, never increasing in
/// `speed`.
pub fn delay_for_speed(speed: u32) -> Duration {
    let steps = u64::from(MAX_SPEED - clamp_speed(speed));
    let span = u64::from(MAX_SPEED - MIN_SPEED);
    Duration::from_millis((MAX_DELAY_MS * steps * 2 + span) / (span * 2))
}

/// Shared pacing state.
///
/// Clones share the same delay: the user interface is the only writer and every running sort
/// reads the latest value at its next step. A read that is one step stale is fine.
#[derive(Debug, Clone)]
pub struct Pacing {
    speed: Arc<AtomicU32>,
    delay_ms: Arc<AtomicU64>,
}

impl Pacing {
    pub fn new(speed: u32) -> Self {
        let speed = clamp_speed(speed);
        Self {
            speed: Arc::new(AtomicU32::new(speed)),
            delay_ms: Arc::new(AtomicU64::new(millis(delay_for_speed(speed)))),
        }
    }

    /// Pacing at full speed: every suspension is a bare yield.
    pub fn unpaced() -> Self {
        Self::new(MAX_SPEED)
    }

    /// Changes the speed for everyone holding a clone of this pacing, mid-run included.
    pub fn set_speed(&self, speed: u32) {
        let clamped = clamp_speed(speed);
        if clamped != speed {
            tracing::warn!(speed, clamped, "speed out of range, clamping");
        }

        self.speed.store(clamped, Ordering::Release);
        self.delay_ms
            .store(millis(delay_for_speed(clamped)), Ordering::Release);
    }

    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Acquire)
    }

    pub fn current_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::Acquire))
    }

    /// Waits `current_delay() * factor`. A zero wait still yields once.
    pub async fn suspend(&self, factor: f64) {
        let delay = self.current_delay().mul_f64(factor.max(0.0));
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_bounds() {
        assert_eq!(delay_for_speed(MIN_SPEED), Duration::from_millis(500));
        assert_eq!(delay_for_speed(MAX_SPEED), Duration::ZERO);
        assert_eq!(delay_for_speed(0), delay_for_speed(MIN_SPEED));
        assert_eq!(delay_for_speed(1000), delay_for_speed(MAX_SPEED));
    }

    #[test]
    fn delay_never_increases_with_speed() {
        let delays = (MIN_SPEED..=MAX_SPEED)
            .map(delay_for_speed)
            .collect::<Vec<_>>();
        assert!(delays.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(delay_for_speed(50), Duration::from_millis(253));
    }

    #[test]
    fn speed_is_shared_between_clones() {
        let pacing = Pacing::default();
        let reader = pacing.clone();
        assert_eq!(reader.speed(), DEFAULT_SPEED);

        pacing.set_speed(250);
        assert_eq!(reader.speed(), MAX_SPEED);
        assert_eq!(reader.current_delay(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn suspend_waits_for_the_scaled_delay() {
        let pacing = Pacing::new(MIN_SPEED);
        let start = tokio::time::Instant::now();
        pacing.suspend(HALF).await;
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(250));
        assert!(waited < Duration::from_millis(300));
    }

    #[tokio::test]
    async fn unpaced_suspend_yields() {
        let pacing = Pacing::unpaced();
        pacing.suspend(FULL).await;
        pacing.suspend(-1.0).await;
    }
}
