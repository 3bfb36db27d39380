//! The sequence every sorter works through.
//!
//! A [`Sequence`] owns the elements of one run. Sorters never index into it directly to change
//! anything: they compare, swap, write and (in elimination mode) remove through the async methods
//! here, and each of those
//!
//! 1. refuses to start once the run has been aborted,
//! 2. announces itself to the [`EffectSink`] and plays its tone,
//! 3. suspends for the current pacing delay,
//! 4. checks for an abort again, and only then
//! 5. touches the data and records the step.
//!
//! So the visual side of a step is always out before the step's effect on the data is computed,
//! and nothing at all is emitted or mutated after an abort has been seen.
//!
//! ```
//! use orst_core::sequence::Sequence;
//! use std::cmp::Ordering;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut seq = Sequence::from_values(&[3, 1, 2]);
//! if seq.compare(0, 1).await? == Ordering::Greater {
//!     seq.swap(0, 1).await?;
//! }
//! assert_eq!(seq.values(), [1, 3, 2]);
//! assert_eq!(seq.counts().comparisons, 1);
//! assert_eq!(seq.counts().operations, 1);
//! # Ok::<(), orst_core::Interrupt>(())
//! # }).unwrap();
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::abort::{AbortToken, Interrupt};
use crate::effects::{frequency_for, Effect, EffectSink, NullSink, ToneEmitter, Waveform};
use crate::instrument::{Counts, Instrumentation};
use crate::pacing::{Pacing, FULL, QUARTER};
use crate::race::RunId;

/// One bar. `value` is what gets compared; `tag` is the position the element had in the base
/// dataset and only exists so that stability can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Element {
    pub value: u32,
    pub tag: usize,
}

/// The elements of a single run together with everything a step needs: pacing, counters,
/// cancellation and the effect sink.
pub struct Sequence {
    elements: Vec<Element>,
    eliminating: bool,
    run: RunId,
    instrumentation: Instrumentation,
    pacing: Pacing,
    abort: AbortToken,
    effects: Arc<dyn EffectSink>,
    tone: Option<Arc<dyn ToneEmitter>>,
}

impl Sequence {
    /// Builds a standalone sequence: unpaced, silent, never aborted. Tags are the indices.
    pub fn from_values(values: &[u32]) -> Self {
        Self::from_elements(
            values
                .iter()
                .enumerate()
                .map(|(tag, &value)| Element { value, tag })
                .collect(),
        )
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            eliminating: false,
            run: RunId::default(),
            instrumentation: Instrumentation::new(),
            pacing: Pacing::unpaced(),
            abort: AbortToken::default(),
            effects: Arc::new(NullSink),
            tone: None,
        }
    }

    /// Switches the sequence into elimination mode, the only mode in which
    /// [`remove`](Self::remove) is allowed and the length may shrink.
    pub fn eliminating(mut self) -> Self {
        self.eliminating = true;
        self
    }

    pub fn with_run(mut self, run: RunId) -> Self {
        self.run = run;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_abort(mut self, abort: AbortToken) -> Self {
        self.abort = abort;
        self
    }

    pub fn with_effects(mut self, effects: Arc<dyn EffectSink>) -> Self {
        self.effects = effects;
        self
    }

    pub fn with_tone(mut self, tone: Arc<dyn ToneEmitter>) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_instrumentation(mut self, instrumentation: Instrumentation) -> Self {
        self.instrumentation = instrumentation;
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_eliminating(&self) -> bool {
        self.eliminating
    }

    /// Plain read. Not a comparison, not paced.
    pub fn value_at(&self, i: usize) -> u32 {
        self.check(i);
        self.elements[i].value
    }

    /// Plain read. Not a comparison, not paced.
    pub fn element_at(&self, i: usize) -> Element {
        self.check(i);
        self.elements[i]
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }

    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    /// Uncounted check of the sorted postcondition.
    pub fn is_ascending(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].value <= w[1].value)
    }

    pub fn instrumentation(&self) -> &Instrumentation {
        &self.instrumentation
    }

    pub fn counts(&self) -> Counts {
        self.instrumentation.snapshot()
    }

    /// Compares the values at `i` and `j` with a full pacing delay. One comparison.
    pub async fn compare(&self, i: usize, j: usize) -> Result<Ordering, Interrupt> {
        self.compare_scaled(i, j, FULL).await
    }

    /// [`compare`](Self::compare) with a scaled delay, for tight scan loops.
    pub async fn compare_scaled(
        &self,
        i: usize,
        j: usize,
        factor: f64,
    ) -> Result<Ordering, Interrupt> {
        self.check(i);
        self.check(j);
        self.live()?;

        self.emit(Effect::CompareStart([i, j]));
        self.play(self.elements[i].value, Waveform::Sine);
        self.suspend(factor).await?;

        self.instrumentation.record_comparison();
        let ordering = self.elements[i].value.cmp(&self.elements[j].value);
        self.emit(Effect::CompareEnd([i, j]));
        Ok(ordering)
    }

    /// Compares the value at `i` against a value held aside by the sorter. One comparison.
    pub async fn compare_to(&self, i: usize, value: u32) -> Result<Ordering, Interrupt> {
        self.compare_to_scaled(i, value, FULL).await
    }

    pub async fn compare_to_scaled(
        &self,
        i: usize,
        value: u32,
        factor: f64,
    ) -> Result<Ordering, Interrupt> {
        self.check(i);
        self.live()?;

        self.emit(Effect::CompareStart([i, i]));
        self.play(self.elements[i].value, Waveform::Sine);
        self.suspend(factor).await?;

        self.instrumentation.record_comparison();
        let ordering = self.elements[i].value.cmp(&value);
        self.emit(Effect::CompareEnd([i, i]));
        Ok(ordering)
    }

    /// Compares two values that are both held aside, for example inside a buffer. One
    /// comparison, no index events.
    pub async fn compare_values(&self, a: u32, b: u32) -> Result<Ordering, Interrupt> {
        self.live()?;
        self.suspend(QUARTER).await?;
        self.instrumentation.record_comparison();
        Ok(a.cmp(&b))
    }

    /// Exchanges the elements at `i` and `j`. One operation.
    pub async fn swap(&mut self, i: usize, j: usize) -> Result<(), Interrupt> {
        self.check(i);
        self.check(j);
        self.live()?;

        self.emit(Effect::SwapStart([i, j]));
        self.play(self.elements[i].value, Waveform::Square);
        self.suspend(FULL).await?;

        self.elements.swap(i, j);
        self.instrumentation.record_operation();
        self.emit(Effect::SwapEnd([i, j]));
        Ok(())
    }

    /// Overwrites position `i`. One operation, no comparison.
    pub async fn write(&mut self, i: usize, element: Element) -> Result<(), Interrupt> {
        self.check(i);
        self.live()?;
        self.suspend(FULL).await?;

        self.elements[i] = element;
        self.instrumentation.record_operation();
        self.emit(Effect::Write {
            index: i,
            value: element.value,
        });
        self.play(element.value, Waveform::Square);
        Ok(())
    }

    /// Deletes position `i`, shifting everything after it one place left. One operation.
    ///
    /// # Panics
    ///
    /// Panics unless the sequence was made [`eliminating`](Self::eliminating).
    pub async fn remove(&mut self, i: usize) -> Result<Element, Interrupt> {
        assert!(
            self.eliminating,
            "remove is only available on an eliminating sequence"
        );
        self.check(i);
        self.live()?;
        self.suspend(FULL).await?;

        let removed = self.elements.remove(i);
        self.instrumentation.record_operation();
        self.emit(Effect::Eliminate(i));
        Ok(removed)
    }

    /// Announces that position `i` holds its final element. Not paced, not counted.
    pub fn mark_sorted(&self, i: usize) {
        self.check(i);
        self.emit(Effect::MarkSorted(i));
    }

    /// A paced pause without any data access. Fails once the run has been aborted.
    pub async fn suspend(&self, factor: f64) -> Result<(), Interrupt> {
        self.live()?;
        self.pacing.suspend(factor).await;
        self.live()
    }

    fn live(&self) -> Result<(), Interrupt> {
        if self.abort.is_aborted() {
            Err(Interrupt::Aborted)
        } else {
            Ok(())
        }
    }

    fn emit(&self, effect: Effect) {
        self.effects.emit(self.run, effect);
    }

    fn play(&self, value: u32, waveform: Waveform) {
        if let Some(tone) = &self.tone {
            tone.play(frequency_for(value), waveform);
        }
    }

    fn check(&self, i: usize) {
        assert!(
            i < self.elements.len(),
            "index {i} out of range for a sequence of length {}",
            self.elements.len()
        );
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("run", &self.run)
            .field("values", &self.values())
            .field("eliminating", &self.eliminating)
            .field("counts", &self.counts())
            .finish()
    }
}
