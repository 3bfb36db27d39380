//! Command line front end: the `race`, `list` and `generate` commands of the `orst` binary.

mod board;
mod progress;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::effects::{Throttled, ToneEmitter, TracingSink, Waveform};
use crate::{
    generate_base_dataset, generate_base_dataset_with, AlgorithmId, Config, RunReport, Visualizer,
};

/// Race sorting algorithms over the same random input. Values given on the command line win over
/// the ones from `--config`.
#[derive(Debug, Args)]
pub struct RaceArgs {
    /// Algorithms to race, comma separated. See `orst list` for the names.
    #[arg(short, long, value_delimiter = ',')]
    algorithms: Vec<AlgorithmId>,

    /// Number of values to sort, between 5 and 100.
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Speed between 1 (half a second per step) and 100 (no delay).
    #[arg(short, long)]
    speed: Option<u32>,

    /// Seed for the input, to repeat a race exactly.
    #[arg(long)]
    seed: Option<u64>,

    /// Ring the terminal bell on comparisons and moves.
    #[arg(long)]
    sound: bool,

    /// Print the reports as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// TOML file with default settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every visual effect at TRACE level.
    #[arg(long)]
    trace_effects: bool,
}

#[derive(Serialize)]
struct RaceOutput<'a> {
    seed: Option<u64>,
    base: &'a [u32],
    runs: &'a [RunReport],
}

impl RaceArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let mut visualizer = Visualizer::new(self.merged_config()?)
            .with_tone(Throttled::new(Bell, BELL_INTERVAL));
        if self.trace_effects {
            visualizer = visualizer.with_effects(TracingSink);
        }

        let base = match self.seed {
            Some(seed) => generate_base_dataset_with(
                &mut StdRng::seed_from_u64(seed),
                visualizer.config().size,
            ),
            None => visualizer.generate_base_dataset(),
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("unable to start the async runtime")?;
        let reports = quiet_panics(|| {
            runtime.block_on(async {
                let race = visualizer.start_selected(&base);
                progress::watch(&visualizer, race, !self.json).await
            })
        })?;

        if self.json {
            let output = RaceOutput {
                seed: self.seed,
                base: &base,
                runs: &reports,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            board::print_race(&base, &reports);
        }

        Ok(())
    }

    fn merged_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        if !self.algorithms.is_empty() {
            config.algorithms = self.algorithms.clone();
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        config.sound |= self.sound;

        Ok(config.clamped())
    }
}

/// List the available algorithms.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show stable algorithms.
    #[arg(long)]
    stable: bool,
}

impl ListArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let algorithms = AlgorithmId::ALL
            .into_iter()
            .filter(|algorithm| !self.stable || algorithm.is_stable())
            .collect::<Vec<_>>();
        board::print_algorithms(&algorithms);
        Ok(())
    }
}

/// Print a random base dataset.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of values, between 5 and 100.
    #[arg(short = 'n', long, default_value_t = crate::config::DEFAULT_SIZE)]
    size: usize,

    /// Seed for the generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON array.
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let values = match self.seed {
            Some(seed) => generate_base_dataset_with(&mut StdRng::seed_from_u64(seed), self.size),
            None => generate_base_dataset(self.size),
        };

        if self.json {
            println!("{}", serde_json::to_string(&values)?);
        } else {
            let line = values
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
        Ok(())
    }
}

/// Runs `f` with a panic hook that logs instead of printing over the spinners. A panicking
/// sorter already shows up as a failed run on the leaderboard.
fn quiet_panics<R>(f: impl FnOnce() -> R) -> R {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|info| tracing::debug!(%info, "sorter panicked")));
    let result = f();
    std::panic::set_hook(previous);
    result
}

/// Shortest gap between two bells.
const BELL_INTERVAL: Duration = Duration::from_millis(120);

/// Rings the terminal bell. Pitch and waveform are lost on a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bell;

impl ToneEmitter for Bell {
    fn play(&self, _frequency: f32, _waveform: Waveform) {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07").and_then(|()| stderr.flush());
    }
}
