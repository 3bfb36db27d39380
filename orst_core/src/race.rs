//! Running one or more sorters over the same input.
//!
//! A [`Visualizer`] holds the pacing, the abort signal and the effect/tone outputs shared by every
//! race it starts. [`Visualizer::start_run`] copies the base dataset once per algorithm and
//! returns a [`Race`]; awaiting [`Race::finish`] drives every run on the current task, interleaving
//! them at their suspension points, and resolves once all of them are done.
//!
//! ```
//! use orst_core::{AlgorithmId, Config, RunStatus, Visualizer};
//!
//! let visualizer = Visualizer::new(Config {
//!     speed: 100,
//!     ..Config::default()
//! });
//! let base = [9, 4, 7, 1, 8];
//! let race = visualizer.start_run(&base, &[AlgorithmId::Bubble, AlgorithmId::Merge]);
//!
//! let reports = tokio::runtime::Builder::new_current_thread()
//!     .enable_all()
//!     .build()
//!     .unwrap()
//!     .block_on(race.finish());
//!
//! for report in &reports {
//!     assert_eq!(report.status, RunStatus::Completed);
//!     assert_eq!(report.final_values, [1, 4, 7, 8, 9]);
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::{
    atomic::{AtomicU8, Ordering},
    Arc,
};
use std::time::Duration;

use futures::{future::join_all, FutureExt};
use serde::{Serialize, Serializer};
use tracing::{debug, error, info};

use crate::abort::{AbortSignal, Interrupt};
use crate::config::Config;
use crate::dataset::generate_base_dataset;
use crate::effects::{EffectSink, NullSink, Silent, ToneEmitter};
use crate::instrument::{Counts, Instrumentation};
use crate::pacing::Pacing;
use crate::sequence::Sequence;
use crate::sorters::{AlgorithmId, Sorter};

/// Position of a run within its race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RunId(pub usize);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

/// `Idle → Running → {Completed | Aborted | Failed}`. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RunState {
    Idle = 0,
    Running = 1,
    Completed = 2,
    Aborted = 3,
    Failed = 4,
}

impl RunState {
    fn from_u8(state: u8) -> Self {
        match state {
            0 => RunState::Idle,
            1 => RunState::Running,
            2 => RunState::Completed,
            3 => RunState::Aborted,
            _ => RunState::Failed,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Aborted | RunState::Failed
        )
    }
}

/// A live view on one run, usable while the race is still going.
#[derive(Debug, Clone)]
pub struct RunHandle {
    id: RunId,
    algorithm: AlgorithmId,
    state: Arc<AtomicU8>,
    instrumentation: Instrumentation,
}

impl RunHandle {
    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn state(&self) -> RunState {
        RunState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn snapshot(&self) -> Counts {
        self.instrumentation.snapshot()
    }

    pub fn elapsed(&self) -> Duration {
        self.instrumentation.elapsed()
    }

    fn set_state(&self, state: RunState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RunStatus {
    /// Finished with the sequence in ascending order.
    Completed,
    /// Stopped at a suspension point after [`Visualizer::abort`].
    Aborted,
    /// Panicked, or returned without leaving the sequence ascending.
    Failed { reason: String },
}

impl RunStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }

    pub fn state(&self) -> RunState {
        match self {
            RunStatus::Completed => RunState::Completed,
            RunStatus::Aborted => RunState::Aborted,
            RunStatus::Failed { .. } => RunState::Failed,
        }
    }
}

/// Final numbers for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub id: RunId,
    pub algorithm: AlgorithmId,
    #[serde(flatten)]
    pub status: RunStatus,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
    pub comparisons: usize,
    pub operations: usize,
    pub final_values: Vec<u32>,
}

fn as_millis<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Orders reports for a leaderboard: completed runs first, fastest first, ties broken by fewer
/// operations; aborted runs next and failed runs last.
pub fn leaderboard(reports: &[RunReport]) -> Vec<&RunReport> {
    let mut board = reports.iter().collect::<Vec<_>>();
    board.sort_by_key(|report| {
        let rank = match report.status {
            RunStatus::Completed => 0,
            RunStatus::Aborted => 1,
            RunStatus::Failed { .. } => 2,
        };
        (rank, report.elapsed, report.operations, report.id)
    });
    board
}

/// Owns the state shared by every race: pacing, cancellation and the outputs.
pub struct Visualizer {
    config: Config,
    pacing: Pacing,
    abort: AbortSignal,
    effects: Arc<dyn EffectSink>,
    tone: Arc<dyn ToneEmitter>,
}

impl Visualizer {
    /// A silent visualizer that drops every effect. The config is clamped first.
    pub fn new(config: Config) -> Self {
        let config = config.clamped();
        Self {
            pacing: Pacing::new(config.speed),
            abort: AbortSignal::new(),
            effects: Arc::new(NullSink),
            tone: Arc::new(Silent),
            config,
        }
    }

    pub fn with_effects<E>(mut self, effects: E) -> Self
    where
        E: EffectSink + 'static,
    {
        self.effects = Arc::new(effects);
        self
    }

    /// Tones only play when the config has `sound` switched on.
    pub fn with_tone<T>(mut self, tone: T) -> Self
    where
        T: ToneEmitter + 'static,
    {
        self.tone = Arc::new(tone);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Changes the speed of every race this visualizer started, in-flight runs included.
    pub fn set_speed(&self, speed: u32) {
        self.pacing.set_speed(speed);
    }

    /// A fresh base dataset of the configured size.
    pub fn generate_base_dataset(&self) -> Vec<u32> {
        generate_base_dataset(self.config.size)
    }

    /// Prepares one run per algorithm, each over its own copy of `base`.
    ///
    /// Nothing runs until the returned [`Race`] is finished.
    pub fn start_run(&self, base: &[u32], algorithms: &[AlgorithmId]) -> Race {
        let token = self.abort.token();
        let tone = self.config.sound.then(|| Arc::clone(&self.tone));

        let runs = algorithms
            .iter()
            .enumerate()
            .map(|(index, &algorithm)| {
                let id = RunId(index);
                let sorter = algorithm.sorter();
                let instrumentation = Instrumentation::new();

                let mut sequence = Sequence::from_values(base)
                    .with_run(id)
                    .with_pacing(self.pacing.clone())
                    .with_abort(token.clone())
                    .with_effects(Arc::clone(&self.effects))
                    .with_instrumentation(instrumentation.clone());
                if let Some(tone) = &tone {
                    sequence = sequence.with_tone(Arc::clone(tone));
                }
                if sorter.eliminates() {
                    sequence = sequence.eliminating();
                }

                debug!(%id, %algorithm, eliminating = sequence.is_eliminating(), "run prepared");
                Run {
                    handle: RunHandle {
                        id,
                        algorithm,
                        state: Arc::new(AtomicU8::new(RunState::Idle as u8)),
                        instrumentation,
                    },
                    sequence,
                    sorter,
                }
            })
            .collect::<Vec<_>>();

        info!(runs = runs.len(), len = base.len(), "race prepared");
        Race { runs }
    }

    /// [`start_run`](Self::start_run) with the algorithms selected in the config.
    pub fn start_selected(&self, base: &[u32]) -> Race {
        self.start_run(base, &self.config.algorithms)
    }

    /// Aborts every race started so far. Their unfinished runs stop at their next suspension
    /// point. Races started afterwards are unaffected.
    pub fn abort(&self) {
        info!("aborting running races");
        self.abort.abort();
    }
}

impl fmt::Debug for Visualizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visualizer")
            .field("config", &self.config)
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

/// A set of prepared runs over identical copies of one base dataset.
#[derive(Debug)]
pub struct Race {
    runs: Vec<Run>,
}

impl Race {
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Handles for reporting while the race runs.
    pub fn handles(&self) -> Vec<RunHandle> {
        self.runs.iter().map(|run| run.handle.clone()).collect()
    }

    /// Runs everything concurrently and resolves once every run has finished, one report per
    /// run in the order the algorithms were given.
    pub async fn finish(self) -> Vec<RunReport> {
        join_all(self.runs.into_iter().map(Run::drive)).await
    }
}

struct Run {
    handle: RunHandle,
    sequence: Sequence,
    sorter: Box<dyn Sorter>,
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("handle", &self.handle)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl Run {
    async fn drive(self) -> RunReport {
        let Run {
            handle,
            mut sequence,
            sorter,
        } = self;

        handle.set_state(RunState::Running);
        handle.instrumentation.start();
        debug!(id = %handle.id, algorithm = %handle.algorithm, "run started");

        let outcome = AssertUnwindSafe(sorter.sort(&mut sequence))
            .catch_unwind()
            .await;
        handle.instrumentation.finish();

        let status = match outcome {
            Ok(Ok(())) if sequence.is_ascending() => RunStatus::Completed,
            Ok(Ok(())) => RunStatus::Failed {
                reason: String::from("sequence not ascending"),
            },
            Ok(Err(Interrupt::Aborted)) => RunStatus::Aborted,
            Err(panic) => RunStatus::Failed {
                reason: panic_reason(panic.as_ref()),
            },
        };

        if status.is_completed() {
            for i in 0..sequence.len() {
                sequence.mark_sorted(i);
            }
        }
        handle.set_state(status.state());

        let Counts {
            comparisons,
            operations,
        } = handle.snapshot();
        let elapsed = handle.elapsed();

        match &status {
            RunStatus::Failed { reason } => {
                error!(id = %handle.id, algorithm = %handle.algorithm, %reason, "run failed")
            }
            status => info!(
                id = %handle.id,
                algorithm = %handle.algorithm,
                ?status,
                comparisons,
                operations,
                ?elapsed,
                "run finished"
            ),
        }

        RunReport {
            id: handle.id,
            algorithm: handle.algorithm,
            status,
            elapsed,
            comparisons,
            operations,
            final_values: sequence.into_elements().into_iter().map(|e| e.value).collect(),
        }
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("the run panicked")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: usize, status: RunStatus, elapsed: u64, operations: usize) -> RunReport {
        RunReport {
            id: RunId(id),
            algorithm: AlgorithmId::Bubble,
            status,
            elapsed: Duration::from_millis(elapsed),
            comparisons: 0,
            operations,
            final_values: Vec::new(),
        }
    }

    #[test]
    fn leaderboard_ranks_completed_first() {
        let failed = RunStatus::Failed {
            reason: String::from("boom"),
        };
        let reports = [
            report(0, failed, 1, 1),
            report(1, RunStatus::Aborted, 2, 1),
            report(2, RunStatus::Completed, 30, 5),
            report(3, RunStatus::Completed, 10, 9),
            report(4, RunStatus::Completed, 10, 3),
        ];

        let order = leaderboard(&reports)
            .into_iter()
            .map(|r| r.id.0)
            .collect::<Vec<_>>();
        assert_eq!(order, [4, 3, 2, 1, 0]);
    }

    #[test]
    fn panic_messages_are_kept() {
        let boxed: Box<dyn Any + Send> = Box::new("index 9 out of range");
        assert_eq!(panic_reason(boxed.as_ref()), "index 9 out of range");

        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_reason(boxed.as_ref()), "owned");

        let boxed: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_reason(boxed.as_ref()), "the run panicked");
    }

    #[test]
    fn report_serializes_flat() {
        let json = serde_json::to_value(report(1, RunStatus::Completed, 2, 3)).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["algorithm"], "bubble");
        assert_eq!(json["elapsed_ms"], 2.0);
        assert_eq!(json["operations"], 3);

        let json = serde_json::to_value(report(
            1,
            RunStatus::Failed {
                reason: String::from("boom"),
            },
            2,
            3,
        ))
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "boom");
    }

    #[tokio::test]
    async fn handles_follow_the_state_machine() {
        let visualizer = Visualizer::new(Config {
            speed: 100,
            ..Config::default()
        });
        let race = visualizer.start_run(&[3, 2, 1], &[AlgorithmId::Insertion]);
        let handles = race.handles();
        assert_eq!(handles[0].state(), RunState::Idle);
        assert_eq!(handles[0].snapshot(), Counts::default());

        let reports = race.finish().await;
        assert_eq!(handles[0].state(), RunState::Completed);
        assert_eq!(handles[0].snapshot().comparisons, reports[0].comparisons);
        assert_eq!(reports[0].final_values, [1, 2, 3]);
    }

    struct Panicking;

    impl Sorter for Panicking {
        fn name(&self) -> &'static str {
            "Panicking"
        }

        fn sort<'a>(&'a self, seq: &'a mut Sequence) -> crate::sorters::SortFuture<'a> {
            Box::pin(async move {
                seq.compare(0, 1).await?;
                panic!("sorter exploded");
            })
        }
    }

    struct Lazy;

    impl Sorter for Lazy {
        fn name(&self) -> &'static str {
            "Lazy"
        }

        fn sort<'a>(&'a self, _seq: &'a mut Sequence) -> crate::sorters::SortFuture<'a> {
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test]
    async fn failures_stay_inside_their_run() {
        let visualizer = Visualizer::new(Config {
            speed: 100,
            ..Config::default()
        });
        let mut race = visualizer.start_run(
            &[5, 3, 9, 1],
            &[AlgorithmId::Bubble, AlgorithmId::Quick, AlgorithmId::Merge],
        );
        race.runs[0].sorter = Box::new(Panicking);
        race.runs[1].sorter = Box::new(Lazy);
        let handles = race.handles();

        let reports = race.finish().await;

        assert_eq!(
            reports[0].status,
            RunStatus::Failed {
                reason: String::from("sorter exploded")
            }
        );
        assert_eq!(
            reports[1].status,
            RunStatus::Failed {
                reason: String::from("sequence not ascending")
            }
        );
        assert_eq!(reports[2].status, RunStatus::Completed);
        assert_eq!(reports[2].final_values, [1, 3, 5, 9]);
        assert_eq!(handles[0].state(), RunState::Failed);
        assert_eq!(reports[0].comparisons, 1);
    }

    #[tokio::test]
    async fn empty_race_finishes_immediately() {
        let visualizer = Visualizer::new(Config::default());
        let race = visualizer.start_run(&[1, 2], &[]);
        assert!(race.is_empty());
        assert!(race.finish().await.is_empty());
    }

    #[test]
    fn config_is_clamped_on_the_way_in() {
        let visualizer = Visualizer::new(Config {
            size: 500,
            speed: 0,
            ..Config::default()
        });
        assert_eq!(visualizer.config().size, crate::config::MAX_SIZE);
        assert_eq!(visualizer.config().speed, crate::pacing::MIN_SPEED);
        assert_eq!(visualizer.generate_base_dataset().len(), crate::config::MAX_SIZE);
    }

    #[test]
    fn only_stalin_may_shrink_its_sequence() {
        let visualizer = Visualizer::new(Config::default());
        let race = visualizer.start_run(
            &[3, 1, 2],
            &[AlgorithmId::Bubble, AlgorithmId::Stalin, AlgorithmId::Quick],
        );
        let eliminating = race
            .runs
            .iter()
            .map(|run| run.sequence.is_eliminating())
            .collect::<Vec<_>>();
        assert_eq!(eliminating, [false, true, false]);
    }
}
