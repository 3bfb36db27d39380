use std::sync::{Arc, Mutex};

use orst_core::effects::Waveform;
use orst_core::race::{leaderboard, RunState};
use orst_core::{
    generate_base_dataset_with, AlgorithmId, Config, Effect, RunId, RunStatus, ToneEmitter,
    Visualizer,
};
use rand::{rngs::StdRng, SeedableRng};
use utilities::{fast_visualizer, sorted_copy, RecordingSink};

fn seeded_base(size: usize) -> Vec<u32> {
    generate_base_dataset_with(&mut StdRng::seed_from_u64(20), size)
}

#[tokio::test]
async fn runs_are_independent_copies() {
    let base = seeded_base(20);
    let visualizer = fast_visualizer();
    let race = visualizer.start_run(&base, &[AlgorithmId::Bubble, AlgorithmId::Quick]);

    let reports = race.finish().await;

    assert_eq!(reports.len(), 2);
    for report in &reports {
        assert_eq!(report.status, RunStatus::Completed, "{}", report.algorithm);
        assert_eq!(report.final_values, sorted_copy(&base));
    }
    assert_eq!(reports[0].algorithm, AlgorithmId::Bubble);
    assert_eq!(reports[1].algorithm, AlgorithmId::Quick);
    assert_ne!(reports[0].comparisons, reports[1].comparisons);
}

#[tokio::test]
async fn runs_interleave() {
    let sink = RecordingSink::new();
    let visualizer = fast_visualizer().with_effects(sink.clone());
    let base = seeded_base(30);

    visualizer
        .start_run(&base, &[AlgorithmId::Selection, AlgorithmId::Heap])
        .finish()
        .await;

    let first = sink.events().into_iter().take(4).map(|(run, _)| run).collect::<Vec<_>>();
    assert!(first.contains(&RunId(0)));
    assert!(first.contains(&RunId(1)));
}

#[tokio::test]
async fn every_mutation_is_announced() {
    let sink = RecordingSink::new();
    let visualizer = fast_visualizer().with_effects(sink.clone());
    let base = seeded_base(25);

    let reports = visualizer
        .start_run(&base, &[AlgorithmId::Cocktail, AlgorithmId::Radix])
        .finish()
        .await;

    for report in reports {
        let effects = sink.of(report.id);
        let mutations = effects.iter().filter(|e| e.is_mutation()).count();
        let compares = effects
            .iter()
            .filter(|e| matches!(e, Effect::CompareEnd(_)))
            .count();
        assert_eq!(mutations, report.operations, "{}", report.algorithm);
        // Distribution sorts also compare values held aside, which has no index to show.
        assert!(compares <= report.comparisons, "{}", report.algorithm);

        let sorted = effects
            .iter()
            .filter(|e| matches!(e, Effect::MarkSorted(_)))
            .count();
        assert!(sorted >= base.len(), "{}", report.algorithm);
    }
}

#[tokio::test]
async fn abort_stops_every_unfinished_run() {
    let sink = RecordingSink::new();
    let visualizer = fast_visualizer().with_effects(sink.clone());
    let base = seeded_base(60);
    let race = visualizer.start_run(
        &base,
        &[AlgorithmId::Bogo, AlgorithmId::Stooge, AlgorithmId::Bozo],
    );
    let handles = race.handles();

    let abort_when_busy = async {
        while !handles.iter().all(|handle| handle.snapshot().comparisons > 10) {
            tokio::task::yield_now().await;
        }
        visualizer.abort();
        sink.len()
    };
    let (reports, seen_at_abort) = tokio::join!(race.finish(), abort_when_busy);

    for report in &reports {
        assert_eq!(report.status, RunStatus::Aborted, "{}", report.algorithm);
        assert_eq!(sorted_copy(&report.final_values), sorted_copy(&base));
    }
    for handle in &handles {
        assert_eq!(handle.state(), RunState::Aborted);
    }
    assert_eq!(sink.len(), seen_at_abort, "effects emitted after the abort");

    // A race started afterwards is not affected.
    let reports = visualizer
        .start_run(&base, &[AlgorithmId::Merge])
        .finish()
        .await;
    assert_eq!(reports[0].status, RunStatus::Completed);
}

#[tokio::test]
async fn leaderboard_puts_aborted_runs_last() {
    let visualizer = fast_visualizer();
    let base = seeded_base(40);
    let race = visualizer.start_run(&base, &[AlgorithmId::Bogo, AlgorithmId::Insertion]);
    let handles = race.handles();

    let abort_after_insertion = async {
        while !handles[1].state().is_finished() {
            tokio::task::yield_now().await;
        }
        visualizer.abort();
    };
    let (reports, ()) = tokio::join!(race.finish(), abort_after_insertion);

    let board = leaderboard(&reports);
    assert_eq!(board[0].algorithm, AlgorithmId::Insertion);
    assert_eq!(board[0].status, RunStatus::Completed);
    assert_eq!(board[1].status, RunStatus::Aborted);
}

#[tokio::test(start_paused = true)]
async fn set_speed_reaches_running_sorts() {
    let visualizer = Visualizer::new(Config {
        speed: 1,
        ..Config::default()
    });
    let base = seeded_base(10);
    let race = visualizer.start_run(&base, &[AlgorithmId::Bubble]);
    let handles = race.handles();

    let speed_up = async {
        while handles[0].snapshot().comparisons == 0 {
            tokio::task::yield_now().await;
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
        visualizer.set_speed(100);
    };
    let started = tokio::time::Instant::now();
    let (reports, ()) = tokio::join!(race.finish(), speed_up);

    assert_eq!(reports[0].status, RunStatus::Completed);
    assert_eq!(visualizer.pacing().speed(), 100);
    // At speed 1 the comparisons alone would take 500 ms each.
    let slow = std::time::Duration::from_millis(500) * reports[0].comparisons as u32;
    assert!(started.elapsed() < slow);
}

#[derive(Clone, Default)]
struct Tones(Arc<Mutex<Vec<Waveform>>>);

impl ToneEmitter for Tones {
    fn play(&self, _frequency: f32, waveform: Waveform) {
        self.0.lock().unwrap().push(waveform);
    }
}

#[tokio::test]
async fn tones_only_play_with_sound_on() {
    let base = seeded_base(10);

    let muted = Tones::default();
    Visualizer::new(Config {
        speed: 100,
        sound: false,
        ..Config::default()
    })
    .with_tone(muted.clone())
    .start_run(&base, &[AlgorithmId::Bubble])
    .finish()
    .await;
    assert!(muted.0.lock().unwrap().is_empty());

    let loud = Tones::default();
    let reports = Visualizer::new(Config {
        speed: 100,
        sound: true,
        ..Config::default()
    })
    .with_tone(loud.clone())
    .start_run(&base, &[AlgorithmId::Bubble])
    .finish()
    .await;

    let tones = loud.0.lock().unwrap();
    let sines = tones.iter().filter(|w| **w == Waveform::Sine).count();
    let squares = tones.iter().filter(|w| **w == Waveform::Square).count();
    assert_eq!(sines, reports[0].comparisons);
    assert_eq!(squares, reports[0].operations);
}

#[tokio::test]
async fn selected_algorithms_come_from_the_config() {
    let visualizer = Visualizer::new(Config {
        speed: 100,
        size: 12,
        algorithms: vec![AlgorithmId::Shell, AlgorithmId::Counting, AlgorithmId::Stalin],
        ..Config::default()
    });
    let base = visualizer.generate_base_dataset();
    assert_eq!(base.len(), 12);

    let reports = visualizer.start_selected(&base).finish().await;
    let algorithms = reports.iter().map(|r| r.algorithm).collect::<Vec<_>>();
    assert_eq!(
        algorithms,
        [AlgorithmId::Shell, AlgorithmId::Counting, AlgorithmId::Stalin]
    );
    assert!(reports.iter().all(|r| r.status.is_completed()));
    assert!(reports[2].final_values.len() <= base.len());
}
