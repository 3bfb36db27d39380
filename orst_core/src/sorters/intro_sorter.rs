use crate::sequence::Sequence;
use crate::sorters::common::{
    floor_log2, heap_sort_range, insertion_range, lomuto, median_of_three,
};
use crate::sorters::{SortFuture, Sorter};

/// Ranges this short are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 16;

/// An implementation of [Introsort](https://en.wikipedia.org/wiki/Introsort)
///
/// Quicksort with a median-of-three pivot, switching to heap sort for any range that is still
/// being partitioned after `2 * log2 n` levels, and to insertion sort for short ranges.
pub struct IntroSorter;

impl Sorter for IntroSorter {
    fn name(&self) -> &'static str {
        "Intro Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        intro_sort(seq, 0, len, 2 * floor_log2(len))
    }
}

fn intro_sort(
    seq: &mut Sequence,
    mut lo: usize,
    mut hi: usize,
    mut depth: u32,
) -> SortFuture<'_> {
    Box::pin(async move {
        while hi - lo > INSERTION_THRESHOLD {
            if depth == 0 {
                tracing::debug!(lo, hi, "depth limit reached, falling back to heap sort");
                return heap_sort_range(seq, lo, hi).await;
            }
            depth -= 1;

            median_of_three(seq, lo, hi).await?;
            let (pivot, _) = lomuto(seq, lo, hi).await?;
            if pivot - lo < hi - pivot {
                intro_sort(seq, lo, pivot, depth).await?;
                lo = pivot + 1;
            } else {
                intro_sort(seq, pivot + 1, hi, depth).await?;
                hi = pivot;
            }
        }
        insertion_range(seq, lo, hi).await
    })
}
