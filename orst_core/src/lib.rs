//! # Introduction
//!
//! Sorting algorithms you can watch. Every algorithm in [`sorters`] runs against a [`Sequence`]
//! that paces each step, counts comparisons and operations, and reports what happens to an
//! [`EffectSink`] so that something else can draw the bars. Several algorithms can race over
//! copies of the same input through a [`Visualizer`].
//!
//! # Example
//!
//! ```
//! use orst_core::{AlgorithmId, Config, Visualizer};
//!
//! let visualizer = Visualizer::new(Config {
//!     size: 20,
//!     speed: 100,
//!     ..Config::default()
//! });
//! let base = visualizer.generate_base_dataset();
//! let race = visualizer.start_run(&base, &[AlgorithmId::Bubble, AlgorithmId::Quick]);
//!
//! let reports = tokio::runtime::Builder::new_current_thread()
//!     .enable_all()
//!     .build()
//!     .unwrap()
//!     .block_on(race.finish());
//!
//! let mut expected = base.clone();
//! expected.sort();
//! for report in reports {
//!     assert!(report.status.is_completed());
//!     assert_eq!(report.final_values, expected);
//! }
//! ```

pub mod abort;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod effects;
pub mod error;
pub mod instrument;
pub mod pacing;
pub mod race;
pub mod sequence;
pub mod sorters;

pub use abort::Interrupt;
pub use config::Config;
pub use dataset::{generate_base_dataset, generate_base_dataset_with};
pub use effects::{Effect, EffectSink, ToneEmitter};
pub use error::{OrstError, Result};
pub use race::{Race, RunHandle, RunId, RunReport, RunState, RunStatus, Visualizer};
pub use sequence::{Element, Sequence};
pub use sorters::{AlgorithmId, Sorter};
