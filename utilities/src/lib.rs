//! Shared helpers for the `orst_core` integration tests.

mod inputs;
mod recording;

pub use inputs::TestInputs;
pub use recording::RecordingSink;

use orst_core::{AlgorithmId, Config, Visualizer};

/// A visualizer running at full speed, so that races finish as fast as the executor allows.
pub fn fast_visualizer() -> Visualizer {
    Visualizer::new(Config {
        speed: 100,
        ..Config::default()
    })
}

/// Every algorithm that promises an ascending result. Bogo and bozo sort are left out as well:
/// they only finish quickly on tiny inputs.
pub fn ordering_algorithms() -> Vec<AlgorithmId> {
    AlgorithmId::ALL
        .into_iter()
        .filter(|algorithm| {
            !matches!(
                algorithm,
                AlgorithmId::Stalin | AlgorithmId::Bogo | AlgorithmId::Bozo
            )
        })
        .collect()
}

/// The multiset of `values`, for permutation checks.
pub fn sorted_copy(values: &[u32]) -> Vec<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}
