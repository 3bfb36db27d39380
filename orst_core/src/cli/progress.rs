//! Live spinners for a running race.

use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::warn;

use crate::race::RunState;
use crate::{Race, RunHandle, RunReport, Visualizer};

const TEMPLATE: &str = "{prefix:>30.bold} {spinner:.green} [{elapsed_precise}] {msg}";
const REFRESH: Duration = Duration::from_millis(80);

/// Drives `race` to the end while keeping one spinner per run up to date. Ctrl-C aborts the race
/// instead of killing the process, so the reports of the runs that were cut short still print.
pub(super) async fn watch(
    visualizer: &Visualizer,
    race: Race,
    visible: bool,
) -> anyhow::Result<Vec<RunReport>> {
    let multi = if visible {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    };
    let style = ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let bars = race
        .handles()
        .into_iter()
        .map(|handle| {
            let bar = multi.add(ProgressBar::new_spinner());
            bar.set_style(style.clone());
            bar.set_prefix(handle.algorithm().name());
            (handle, bar)
        })
        .collect::<Vec<_>>();

    let finish = race.finish();
    tokio::pin!(finish);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut ticker = tokio::time::interval(REFRESH);
    let mut interrupted = false;

    let reports = loop {
        tokio::select! {
            reports = &mut finish => break reports,
            _ = ticker.tick() => {
                for (handle, bar) in &bars {
                    refresh(handle, bar);
                }
            }
            signal = &mut ctrl_c, if !interrupted => {
                signal?;
                interrupted = true;
                warn!("interrupted, aborting the race");
                visualizer.abort();
            }
        }
    };

    for (handle, bar) in &bars {
        refresh(handle, bar);
        bar.finish();
    }
    Ok(reports)
}

fn refresh(handle: &RunHandle, bar: &ProgressBar) {
    let counts = handle.snapshot();
    let state = match handle.state() {
        RunState::Idle => "waiting",
        RunState::Running => "sorting",
        RunState::Completed => "done",
        RunState::Aborted => "aborted",
        RunState::Failed => "failed",
    };
    bar.set_message(format!(
        "{:>8} comparisons {:>8} operations  {state}",
        counts.comparisons, counts.operations
    ));
    bar.tick();
}
