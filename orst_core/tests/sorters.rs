use orst_core::sorters::StalinSorter;
use orst_core::{AlgorithmId, Sequence, Sorter};
use utilities::{ordering_algorithms, sorted_copy, TestInputs};

async fn sort(algorithm: AlgorithmId, values: &[u32]) -> Sequence {
    let mut seq = Sequence::from_values(values);
    algorithm
        .sorter()
        .sort(&mut seq)
        .await
        .unwrap_or_else(|_| panic!("{algorithm} was interrupted"));
    seq
}

#[tokio::test]
async fn every_algorithm_sorts_every_input() {
    let inputs = TestInputs::new();
    for algorithm in ordering_algorithms() {
        for (label, values) in inputs.all() {
            let seq = sort(algorithm, values).await;
            assert_eq!(
                seq.values(),
                sorted_copy(values),
                "{algorithm} on the {label} input"
            );
        }
    }
}

#[tokio::test]
async fn random_sorters_finish_on_tiny_inputs() {
    for algorithm in [AlgorithmId::Bogo, AlgorithmId::Bozo] {
        for values in [&[][..], &[1], &[2, 1], &[3, 1, 2], &[4, 4, 1, 4]] {
            let seq = sort(algorithm, values).await;
            assert_eq!(seq.values(), sorted_copy(values), "{algorithm}");
        }
    }
}

#[tokio::test]
async fn sorting_only_permutes() {
    let inputs = TestInputs::new();
    for algorithm in ordering_algorithms() {
        let seq = sort(algorithm, &inputs.random).await;

        let mut tags = seq.elements().iter().map(|e| e.tag).collect::<Vec<_>>();
        tags.sort_unstable();
        assert_eq!(tags, (0..inputs.random.len()).collect::<Vec<_>>(), "{algorithm}");

        for element in seq.elements() {
            assert_eq!(element.value, inputs.random[element.tag], "{algorithm}");
        }
    }
}

#[tokio::test]
async fn stable_algorithms_keep_equal_values_in_order() {
    let inputs = TestInputs::new();
    for algorithm in AlgorithmId::ALL.into_iter().filter(AlgorithmId::is_stable) {
        for values in [&inputs.few_unique, &inputs.random, &inputs.all_equal] {
            let seq = sort(algorithm, values).await;
            for pair in seq.elements().windows(2) {
                if pair[0].value == pair[1].value {
                    assert!(
                        pair[0].tag < pair[1].tag,
                        "{algorithm} reordered equal values: {pair:?}"
                    );
                }
            }
        }
    }
}

#[tokio::test]
async fn stalin_keeps_the_running_maximum() {
    let mut seq = Sequence::from_values(&[3, 1, 4, 1, 5, 9, 2, 6]).eliminating();
    StalinSorter.sort(&mut seq).await.unwrap();
    assert_eq!(seq.values(), [3, 4, 5, 9]);

    let inputs = TestInputs::new();
    for (label, values) in inputs.all() {
        let mut seq = Sequence::from_values(values).eliminating();
        StalinSorter.sort(&mut seq).await.unwrap();

        let mut expected = Vec::new();
        for &value in values {
            if expected.last().map_or(true, |&last| value >= last) {
                expected.push(value);
            }
        }
        assert_eq!(seq.values(), expected, "{label}");
    }
}

#[tokio::test]
async fn bubble_sort_compares_every_pair_of_a_descending_input() {
    for n in [5_usize, 17, 40] {
        let values = (1..=n as u32).rev().collect::<Vec<_>>();
        let seq = sort(AlgorithmId::Bubble, &values).await;
        assert_eq!(seq.counts().comparisons, n * (n - 1) / 2);
    }
}

#[tokio::test]
async fn every_algorithm_counts_its_work() {
    let inputs = TestInputs::new();
    for algorithm in ordering_algorithms() {
        let seq = sort(algorithm, &inputs.reversed).await;
        let counts = seq.counts();
        assert!(counts.operations > 0, "{algorithm} moved nothing");
        // Distribution sorts place by key and may need no comparison at all on this input.
        if !matches!(
            algorithm.family(),
            orst_core::sorters::Family::Distribution
        ) {
            assert!(counts.comparisons > 0, "{algorithm} compared nothing");
        }
    }
}
