//! The algorithm library.
//!
//! Every algorithm implements [`Sorter`] and works exclusively through a [`Sequence`], so every
//! comparison and every move is paced, counted and announced. [`AlgorithmId`] names the whole
//! fixed set and hands out boxed sorters for it.
//!
//! # Example
//!
//! ```
//! use orst_core::sequence::Sequence;
//! use orst_core::sorters::{AlgorithmId, BubbleSorter, Sorter};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut seq = Sequence::from_values(&[1, 3, 2, 5, 4]);
//! BubbleSorter.sort(&mut seq).await?;
//! assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
//!
//! let mut seq = Sequence::from_values(&[1, 3, 2, 5, 4]);
//! AlgorithmId::Pdq.sorter().sort(&mut seq).await?;
//! assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
//! # Ok::<(), orst_core::Interrupt>(())
//! # }).unwrap();
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::abort::Interrupt;
use crate::error::OrstError;
use crate::sequence::Sequence;

/// Generates the tests every sorter has to pass. The optional length bounds the reversed and
/// random inputs for the algorithms that cannot cope with long ones.
#[cfg(test)]
macro_rules! sorter_tests {
    ($sorter:expr) => {
        sorter_tests!($sorter, 200);
    };
    ($sorter:expr, $len:expr) => {
        #[tokio::test]
        async fn arbitrary_array() {
            let sorted = crate::sorters::sorted_with(&$sorter, &[1, 5, 4, 2, 3]).await;
            assert_eq!(sorted, [1, 2, 3, 4, 5]);
        }

        #[tokio::test]
        async fn sorted_array() {
            let values = (1..10).collect::<Vec<u32>>();
            assert_eq!(crate::sorters::sorted_with(&$sorter, &values).await, values);
        }

        #[tokio::test]
        async fn very_unsorted() {
            let values = (1..=$len).rev().collect::<Vec<u32>>();
            assert_eq!(
                crate::sorters::sorted_with(&$sorter, &values).await,
                (1..=$len).collect::<Vec<u32>>()
            );
        }

        #[tokio::test]
        async fn random_with_duplicates() {
            use rand::{rngs::StdRng, Rng, SeedableRng};

            let mut rng = StdRng::seed_from_u64(7);
            let values = (0..$len)
                .map(|_| rng.gen_range(0..=20))
                .collect::<Vec<u32>>();
            let mut expected = values.clone();
            expected.sort();
            assert_eq!(crate::sorters::sorted_with(&$sorter, &values).await, expected);
        }

        #[tokio::test]
        async fn simple_edge_cases() {
            assert!(crate::sorters::sorted_with(&$sorter, &[]).await.is_empty());
            assert_eq!(crate::sorters::sorted_with(&$sorter, &[1]).await, [1]);
            assert_eq!(crate::sorters::sorted_with(&$sorter, &[1, 2]).await, [1, 2]);
            assert_eq!(crate::sorters::sorted_with(&$sorter, &[2, 1]).await, [1, 2]);
            assert_eq!(crate::sorters::sorted_with(&$sorter, &[3, 1, 2]).await, [1, 2, 3]);
            assert_eq!(
                crate::sorters::sorted_with(&$sorter, &[7, 7, 7, 7]).await,
                [7, 7, 7, 7]
            );
        }
    };
}

/// Inputs that push a partitioning sorter into its most lopsided splits.
#[cfg(test)]
macro_rules! partition_tests {
    ($sorter:expr) => {
        #[tokio::test]
        async fn lopsided_partitions() {
            let ascending = (0..100).collect::<Vec<u32>>();
            assert_eq!(
                crate::sorters::sorted_with(&$sorter, &ascending).await,
                ascending
            );

            let descending = (0..100).rev().collect::<Vec<u32>>();
            assert_eq!(
                crate::sorters::sorted_with(&$sorter, &descending).await,
                ascending
            );

            assert_eq!(crate::sorters::sorted_with(&$sorter, &[7; 100]).await, [7; 100]);
        }
    };
}

mod common;

mod bitonic_sorter;
mod bogo_sorter;
mod bozo_sorter;
mod bubble_sorter;
mod bucket_sorter;
mod cocktail_sorter;
mod comb_sorter;
mod counting_sorter;
mod cycle_sorter;
mod dual_pivot_sorter;
mod flash_sorter;
mod flux_sorter;
mod gnome_sorter;
mod heap_sorter;
mod insertion_sorter;
mod intro_sorter;
mod merge_sorter;
mod odd_even_sorter;
mod pancake_sorter;
mod pdq_sorter;
mod quad_sorter;
mod quick_3way_sorter;
mod quick_sorter;
mod radix_sorter;
mod selection_sorter;
mod shell_sorter;
mod slow_sorter;
mod stalin_sorter;
mod stooge_sorter;
mod tim_sorter;

pub use bitonic_sorter::BitonicSorter;
pub use bogo_sorter::BogoSorter;
pub use bozo_sorter::BozoSorter;
pub use bubble_sorter::BubbleSorter;
pub use bucket_sorter::BucketSorter;
pub use cocktail_sorter::CocktailSorter;
pub use comb_sorter::CombSorter;
pub use counting_sorter::CountingSorter;
pub use cycle_sorter::CycleSorter;
pub use dual_pivot_sorter::DualPivotSorter;
pub use flash_sorter::FlashSorter;
pub use flux_sorter::FluxSorter;
pub use gnome_sorter::GnomeSorter;
pub use heap_sorter::HeapSorter;
pub use insertion_sorter::InsertionSorter;
pub use intro_sorter::IntroSorter;
pub use merge_sorter::MergeSorter;
pub use odd_even_sorter::OddEvenSorter;
pub use pancake_sorter::PancakeSorter;
pub use pdq_sorter::PdqSorter;
pub use quad_sorter::QuadSorter;
pub use quick_3way_sorter::Quick3WaySorter;
pub use quick_sorter::QuickSorter;
pub use radix_sorter::RadixSorter;
pub use selection_sorter::SelectionSorter;
pub use shell_sorter::ShellSorter;
pub use slow_sorter::SlowSorter;
pub use stalin_sorter::StalinSorter;
pub use stooge_sorter::StoogeSorter;
pub use tim_sorter::TimSorter;

/// What [`Sorter::sort`] returns. Boxed so that `Sorter` stays object safe and recursive sorters
/// can call themselves.
pub type SortFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Interrupt>> + Send + 'a>>;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `sort` must leave the sequence ascending when it returns `Ok`, and must return
/// `Err(Interrupt::Aborted)` as soon as any sequence operation does.
pub trait Sorter: Send + Sync {
    fn name(&self) -> &'static str;

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a>;

    /// Whether the sorter deletes elements instead of ordering them. Only such sorters get an
    /// [`eliminating`](Sequence::eliminating) sequence.
    fn eliminates(&self) -> bool {
        false
    }
}

/// The way an algorithm gets elements into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Exchange,
    Selection,
    Insertion,
    Merge,
    Partition,
    Hybrid,
    Distribution,
    Network,
    Silly,
    Random,
    Elimination,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self {
            Family::Exchange => "exchange",
            Family::Selection => "selection",
            Family::Insertion => "insertion",
            Family::Merge => "merge",
            Family::Partition => "partition",
            Family::Hybrid => "hybrid",
            Family::Distribution => "distribution",
            Family::Network => "network",
            Family::Silly => "silly",
            Family::Random => "random",
            Family::Elimination => "elimination",
        };
        f.write_str(family)
    }
}

/// Every algorithm the library knows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    Bubble,
    Cocktail,
    OddEven,
    Comb,
    Gnome,
    Selection,
    DoubleSelection,
    Cycle,
    Pancake,
    Heap,
    Insertion,
    BinaryInsertion,
    Shell,
    Merge,
    BottomUpMerge,
    Tim,
    Quad,
    Quick,
    #[serde(rename = "quick-3way")]
    #[value(name = "quick-3way")]
    Quick3Way,
    DualPivot,
    Intro,
    Pdq,
    Flux,
    Counting,
    Radix,
    Bucket,
    Flash,
    Bitonic,
    Stooge,
    Slow,
    Bogo,
    Bozo,
    Stalin,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 33] = [
        AlgorithmId::Bubble,
        AlgorithmId::Cocktail,
        AlgorithmId::OddEven,
        AlgorithmId::Comb,
        AlgorithmId::Gnome,
        AlgorithmId::Selection,
        AlgorithmId::DoubleSelection,
        AlgorithmId::Cycle,
        AlgorithmId::Pancake,
        AlgorithmId::Heap,
        AlgorithmId::Insertion,
        AlgorithmId::BinaryInsertion,
        AlgorithmId::Shell,
        AlgorithmId::Merge,
        AlgorithmId::BottomUpMerge,
        AlgorithmId::Tim,
        AlgorithmId::Quad,
        AlgorithmId::Quick,
        AlgorithmId::Quick3Way,
        AlgorithmId::DualPivot,
        AlgorithmId::Intro,
        AlgorithmId::Pdq,
        AlgorithmId::Flux,
        AlgorithmId::Counting,
        AlgorithmId::Radix,
        AlgorithmId::Bucket,
        AlgorithmId::Flash,
        AlgorithmId::Bitonic,
        AlgorithmId::Stooge,
        AlgorithmId::Slow,
        AlgorithmId::Bogo,
        AlgorithmId::Bozo,
        AlgorithmId::Stalin,
    ];

    /// The kebab-case identifier used on the command line and in config files.
    pub fn id(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Cocktail => "cocktail",
            AlgorithmId::OddEven => "odd-even",
            AlgorithmId::Comb => "comb",
            AlgorithmId::Gnome => "gnome",
            AlgorithmId::Selection => "selection",
            AlgorithmId::DoubleSelection => "double-selection",
            AlgorithmId::Cycle => "cycle",
            AlgorithmId::Pancake => "pancake",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::BinaryInsertion => "binary-insertion",
            AlgorithmId::Shell => "shell",
            AlgorithmId::Merge => "merge",
            AlgorithmId::BottomUpMerge => "bottom-up-merge",
            AlgorithmId::Tim => "tim",
            AlgorithmId::Quad => "quad",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Quick3Way => "quick-3way",
            AlgorithmId::DualPivot => "dual-pivot",
            AlgorithmId::Intro => "intro",
            AlgorithmId::Pdq => "pdq",
            AlgorithmId::Flux => "flux",
            AlgorithmId::Counting => "counting",
            AlgorithmId::Radix => "radix",
            AlgorithmId::Bucket => "bucket",
            AlgorithmId::Flash => "flash",
            AlgorithmId::Bitonic => "bitonic",
            AlgorithmId::Stooge => "stooge",
            AlgorithmId::Slow => "slow",
            AlgorithmId::Bogo => "bogo",
            AlgorithmId::Bozo => "bozo",
            AlgorithmId::Stalin => "stalin",
        }
    }

    /// Human readable name, the same one the sorter reports.
    pub fn name(&self) -> &'static str {
        self.sorter().name()
    }

    pub fn family(&self) -> Family {
        match self {
            AlgorithmId::Bubble
            | AlgorithmId::Cocktail
            | AlgorithmId::OddEven
            | AlgorithmId::Comb
            | AlgorithmId::Gnome => Family::Exchange,
            AlgorithmId::Selection
            | AlgorithmId::DoubleSelection
            | AlgorithmId::Cycle
            | AlgorithmId::Pancake
            | AlgorithmId::Heap => Family::Selection,
            AlgorithmId::Insertion | AlgorithmId::BinaryInsertion | AlgorithmId::Shell => {
                Family::Insertion
            }
            AlgorithmId::Merge
            | AlgorithmId::BottomUpMerge
            | AlgorithmId::Tim
            | AlgorithmId::Quad => Family::Merge,
            AlgorithmId::Quick
            | AlgorithmId::Quick3Way
            | AlgorithmId::DualPivot
            | AlgorithmId::Flux => Family::Partition,
            AlgorithmId::Intro | AlgorithmId::Pdq => Family::Hybrid,
            AlgorithmId::Counting
            | AlgorithmId::Radix
            | AlgorithmId::Bucket
            | AlgorithmId::Flash => Family::Distribution,
            AlgorithmId::Bitonic => Family::Network,
            AlgorithmId::Stooge | AlgorithmId::Slow => Family::Silly,
            AlgorithmId::Bogo | AlgorithmId::Bozo => Family::Random,
            AlgorithmId::Stalin => Family::Elimination,
        }
    }

    /// Whether equal values keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            AlgorithmId::Insertion
                | AlgorithmId::BinaryInsertion
                | AlgorithmId::Merge
                | AlgorithmId::BottomUpMerge
                | AlgorithmId::Tim
                | AlgorithmId::Quad
                | AlgorithmId::Flux
                | AlgorithmId::Counting
                | AlgorithmId::Radix
                | AlgorithmId::Bucket
        )
    }

    pub fn sorter(&self) -> Box<dyn Sorter> {
        match self {
            AlgorithmId::Bubble => Box::new(BubbleSorter),
            AlgorithmId::Cocktail => Box::new(CocktailSorter),
            AlgorithmId::OddEven => Box::new(OddEvenSorter),
            AlgorithmId::Comb => Box::new(CombSorter),
            AlgorithmId::Gnome => Box::new(GnomeSorter),
            AlgorithmId::Selection => Box::new(SelectionSorter { double: false }),
            AlgorithmId::DoubleSelection => Box::new(SelectionSorter { double: true }),
            AlgorithmId::Cycle => Box::new(CycleSorter),
            AlgorithmId::Pancake => Box::new(PancakeSorter),
            AlgorithmId::Heap => Box::new(HeapSorter),
            AlgorithmId::Insertion => Box::new(InsertionSorter { smart: false }),
            AlgorithmId::BinaryInsertion => Box::new(InsertionSorter { smart: true }),
            AlgorithmId::Shell => Box::new(ShellSorter),
            AlgorithmId::Merge => Box::new(MergeSorter { bottom_up: false }),
            AlgorithmId::BottomUpMerge => Box::new(MergeSorter { bottom_up: true }),
            AlgorithmId::Tim => Box::new(TimSorter),
            AlgorithmId::Quad => Box::new(QuadSorter),
            AlgorithmId::Quick => Box::new(QuickSorter),
            AlgorithmId::Quick3Way => Box::new(Quick3WaySorter),
            AlgorithmId::DualPivot => Box::new(DualPivotSorter),
            AlgorithmId::Intro => Box::new(IntroSorter),
            AlgorithmId::Pdq => Box::new(PdqSorter),
            AlgorithmId::Flux => Box::new(FluxSorter),
            AlgorithmId::Counting => Box::new(CountingSorter),
            AlgorithmId::Radix => Box::new(RadixSorter),
            AlgorithmId::Bucket => Box::new(BucketSorter),
            AlgorithmId::Flash => Box::new(FlashSorter),
            AlgorithmId::Bitonic => Box::new(BitonicSorter),
            AlgorithmId::Stooge => Box::new(StoogeSorter),
            AlgorithmId::Slow => Box::new(SlowSorter),
            AlgorithmId::Bogo => Box::new(BogoSorter),
            AlgorithmId::Bozo => Box::new(BozoSorter),
            AlgorithmId::Stalin => Box::new(StalinSorter),
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmId {
    type Err = OrstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AlgorithmId::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OrstError::UnknownAlgorithm(s.to_string()))
    }
}

/// Sorts a copy of `values` on a standalone sequence.
#[cfg(test)]
pub(crate) async fn sorted_with(sorter: &dyn Sorter, values: &[u32]) -> Vec<u32> {
    let mut seq = Sequence::from_values(values);
    sorter
        .sort(&mut seq)
        .await
        .expect("standalone sequences are never aborted");
    seq.values()
}
