use std::cmp::Ordering;

use crate::abort::Interrupt;
use crate::sequence::Sequence;
use crate::sorters::common::{
    floor_log2, heap_sort_range, insertion_range, lomuto, median_of_three,
};
use crate::sorters::{SortFuture, Sorter};

/// Ranges this short are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 16;
/// Swaps a partial insertion sort may spend before it gives up.
const PARTIAL_INSERTION_LIMIT: usize = 8;

/// A simplified [pattern-defeating quicksort](https://github.com/orlp/pdqsort).
///
/// # Explanation
///
/// Introsort with two additions. A partition that leaves one side with less than an eighth of
/// the range counts as bad: it spends one unit of a `log2 n` budget and shuffles a few elements on
/// both sides to break up whatever pattern caused it. Once the budget is gone the range is heap
/// sorted.
///
/// A partition that did not have to move anything hints at sorted input, so both sides get a
/// partial insertion sort first; if neither needs more than a handful of swaps the range is done.
pub struct PdqSorter;

impl Sorter for PdqSorter {
    fn name(&self) -> &'static str {
        "Pattern-Defeating Quick Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        pdq_sort(seq, 0, len, floor_log2(len))
    }
}

fn pdq_sort(
    seq: &mut Sequence,
    mut lo: usize,
    mut hi: usize,
    mut bad_allowed: u32,
) -> SortFuture<'_> {
    Box::pin(async move {
        loop {
            let len = hi - lo;
            if len <= INSERTION_THRESHOLD {
                return insertion_range(seq, lo, hi).await;
            }
            if bad_allowed == 0 {
                tracing::debug!(lo, hi, "too many bad partitions, falling back to heap sort");
                return heap_sort_range(seq, lo, hi).await;
            }

            median_of_three(seq, lo, hi).await?;
            let (pivot, untouched) = lomuto(seq, lo, hi).await?;
            let (left_len, right_len) = (pivot - lo, hi - pivot - 1);

            if left_len < len / 8 || right_len < len / 8 {
                bad_allowed -= 1;
                break_patterns(seq, lo, pivot).await?;
                break_patterns(seq, pivot + 1, hi).await?;
            } else if untouched
                && partial_insertion(seq, lo, pivot).await?
                && partial_insertion(seq, pivot + 1, hi).await?
            {
                return Ok(());
            }

            if left_len < right_len {
                pdq_sort(seq, lo, pivot, bad_allowed).await?;
                lo = pivot + 1;
            } else {
                pdq_sort(seq, pivot + 1, hi, bad_allowed).await?;
                hi = pivot;
            }
        }
    })
}

/// Swaps a few fixed positions so that a repeating bad pivot choice does not repeat again.
async fn break_patterns(seq: &mut Sequence, lo: usize, hi: usize) -> Result<(), Interrupt> {
    let len = hi.saturating_sub(lo);
    if len < 8 {
        return Ok(());
    }
    let quarter = len / 4;
    seq.swap(lo, lo + quarter).await?;
    seq.swap(lo + len / 2, lo + len / 2 + 1).await?;
    seq.swap(hi - 1, hi - 1 - quarter).await
}

/// Insertion sort that gives up after [`PARTIAL_INSERTION_LIMIT`] swaps. Returns whether the
/// range ended up sorted.
async fn partial_insertion(seq: &mut Sequence, lo: usize, hi: usize) -> Result<bool, Interrupt> {
    let mut swaps = 0;
    for unsorted in (lo + 1)..hi {
        let mut i = unsorted;
        while i > lo && seq.compare(i - 1, i).await? == Ordering::Greater {
            if swaps == PARTIAL_INSERTION_LIMIT {
                return Ok(false);
            }
            seq.swap(i - 1, i).await?;
            swaps += 1;
            i -= 1;
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(PdqSorter);

    #[tokio::test]
    async fn sorted_input_finishes_early() {
        let values = (0..100).collect::<Vec<u32>>();
        let mut seq = Sequence::from_values(&values);
        PdqSorter.sort(&mut seq).await.unwrap();
        assert_eq!(seq.values(), values);
        // One median, one partition, one check per side.
        assert!(seq.counts().comparisons < 3 * values.len());
    }

    #[tokio::test]
    async fn no_budget_means_heap_sort() {
        let values = (1..=50).rev().collect::<Vec<u32>>();
        let mut seq = Sequence::from_values(&values);
        pdq_sort(&mut seq, 0, values.len(), 0).await.unwrap();
        assert_eq!(seq.values(), (1..=50).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn partial_insertion_gives_up() {
        let mut seq = Sequence::from_values(&(1..=10).rev().collect::<Vec<u32>>());
        assert!(!partial_insertion(&mut seq, 0, 10).await.unwrap());

        let mut seq = Sequence::from_values(&[1, 2, 4, 3, 5]);
        assert!(partial_insertion(&mut seq, 0, 5).await.unwrap());
        assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
    }
}
