//! What a running sort tells the outside world.
//!
//! The engine never draws anything itself. Every comparison, swap and write is announced to an
//! [`EffectSink`] (bars, highlights) and, when sound is on, to a [`ToneEmitter`]. Both are fire and
//! forget: the only waiting the engine does is its own pacing.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::race::RunId;

/// A single visual event.
///
/// Index pairs name the two positions involved. When a position is compared against a value the
/// sorter holds aside (a pivot or a key), both slots carry that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    CompareStart([usize; 2]),
    CompareEnd([usize; 2]),
    SwapStart([usize; 2]),
    SwapEnd([usize; 2]),
    Write { index: usize, value: u32 },
    MarkSorted(usize),
    Eliminate(usize),
}

impl Effect {
    /// `true` for the events that announce a change to the sequence.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Effect::SwapEnd(_) | Effect::Write { .. } | Effect::Eliminate(_)
        )
    }
}

/// Receives visual events from every run of a race. `run` tells the runs apart.
pub trait EffectSink: Send + Sync {
    fn emit(&self, run: RunId, effect: Effect);
}

impl<F> EffectSink for F
where
    F: Fn(RunId, Effect) + Send + Sync,
{
    fn emit(&self, run: RunId, effect: Effect) {
        self(run, effect)
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EffectSink for NullSink {
    fn emit(&self, _run: RunId, _effect: Effect) {}
}

/// Logs every event at `TRACE` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EffectSink for TracingSink {
    fn emit(&self, run: RunId, effect: Effect) {
        tracing::trace!(%run, ?effect, "effect");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Used for comparisons.
    Sine,
    /// Used for swaps and writes.
    Square,
}

/// Plays a short tone. Implementations may skip tones freely and must never block.
pub trait ToneEmitter: Send + Sync {
    fn play(&self, frequency: f32, waveform: Waveform);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ToneEmitter for Silent {
    fn play(&self, _frequency: f32, _waveform: Waveform) {}
}

/// Pitch of the tone for a bar of the given value: 200 Hz plus 5 Hz per unit.
pub fn frequency_for(value: u32) -> f32 {
    200.0 + 5.0 * value as f32
}

/// Drops tones that arrive sooner than `min_interval` after the last one that played.
#[derive(Debug)]
pub struct Throttled<T> {
    inner: T,
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl<T> Throttled<T> {
    pub fn new(inner: T, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last: Mutex::new(None),
        }
    }
}

impl<T> ToneEmitter for Throttled<T>
where
    T: ToneEmitter,
{
    fn play(&self, frequency: f32, waveform: Waveform) {
        let now = Instant::now();
        {
            let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
            if (*last).is_some_and(|last| now.duration_since(last) < self.min_interval) {
                return;
            }
            *last = Some(now);
        }
        self.inner.play(frequency, waveform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct Tones(Arc<Mutex<Vec<(f32, Waveform)>>>);

    impl ToneEmitter for Tones {
        fn play(&self, frequency: f32, waveform: Waveform) {
            self.0.lock().unwrap().push((frequency, waveform));
        }
    }

    #[test]
    fn frequency_follows_value() {
        assert_eq!(frequency_for(0), 200.0);
        assert_eq!(frequency_for(100), 700.0);
    }

    #[test]
    fn throttled_drops_bursts() {
        let tones = Tones::default();
        let throttled = Throttled::new(tones.clone(), Duration::from_secs(60));

        throttled.play(300.0, Waveform::Sine);
        throttled.play(400.0, Waveform::Square);
        throttled.play(500.0, Waveform::Square);

        assert_eq!(*tones.0.lock().unwrap(), vec![(300.0, Waveform::Sine)]);
    }

    #[test]
    fn unthrottled_plays_everything() {
        let tones = Tones::default();
        let throttled = Throttled::new(tones.clone(), Duration::ZERO);

        throttled.play(300.0, Waveform::Sine);
        throttled.play(400.0, Waveform::Square);

        assert_eq!(tones.0.lock().unwrap().len(), 2);
    }

    #[test]
    fn closures_are_sinks() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            move |run: RunId, effect: Effect| seen.lock().unwrap().push((run, effect))
        };

        sink.emit(RunId(3), Effect::MarkSorted(1));
        assert_eq!(*seen.lock().unwrap(), vec![(RunId(3), Effect::MarkSorted(1))]);
    }

    #[test]
    fn mutation_events() {
        assert!(Effect::SwapEnd([0, 1]).is_mutation());
        assert!(Effect::Write { index: 0, value: 3 }.is_mutation());
        assert!(Effect::Eliminate(2).is_mutation());
        assert!(!Effect::CompareStart([0, 1]).is_mutation());
        assert!(!Effect::SwapStart([0, 1]).is_mutation());
        assert!(!Effect::MarkSorted(0).is_mutation());
    }
}
