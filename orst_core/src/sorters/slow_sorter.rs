use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Slowsort](https://en.wikipedia.org/wiki/Slowsort), the "multiply and
/// surrender" joke algorithm.
///
/// Both halves are sorted recursively, the larger of their maxima is moved to the end, and the
/// rest is sorted again without it. The last step is a loop instead of a call, which keeps the
/// recursion depth logarithmic.
pub struct SlowSorter;

impl Sorter for SlowSorter {
    fn name(&self) -> &'static str {
        "Slow Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        if len < 2 {
            return Box::pin(async { Ok(()) });
        }
        slow_sort(seq, 0, len - 1)
    }
}

/// Sorts the inclusive range `[lo, hi]`.
fn slow_sort(seq: &mut Sequence, lo: usize, mut hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            slow_sort(seq, lo, mid).await?;
            slow_sort(seq, mid + 1, hi).await?;
            if seq.compare(mid, hi).await? == Ordering::Greater {
                seq.swap(mid, hi).await?;
            }
            seq.mark_sorted(hi);
            hi -= 1;
        }
        Ok(())
    })
}
