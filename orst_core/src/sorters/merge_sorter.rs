use crate::sequence::Sequence;
use crate::sorters::common::merge;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Explanation
///
/// The top-down version splits the range in halves, sorts both recursively and merges them. The
/// bottom-up version merges runs of width 1, 2, 4, ... until a single run covers the whole
/// sequence. Both merge through a buffer holding the left run and write the result back, and
/// both are stable.
pub struct MergeSorter {
    pub bottom_up: bool,
}

impl Sorter for MergeSorter {
    fn name(&self) -> &'static str {
        if self.bottom_up {
            "Bottom-Up Merge Sort"
        } else {
            "Merge Sort"
        }
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        if self.bottom_up {
            Box::pin(async move {
                let mut width = 1;
                while width < len {
                    let mut lo = 0;
                    while lo + width < len {
                        let hi = (lo + 2 * width).min(len);
                        merge(seq, lo, lo + width, hi).await?;
                        lo += 2 * width;
                    }
                    width *= 2;
                }
                Ok(())
            })
        } else {
            merge_sort(seq, 0, len)
        }
    }
}

fn merge_sort(seq: &mut Sequence, lo: usize, hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        if hi - lo < 2 {
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        merge_sort(seq, lo, mid).await?;
        merge_sort(seq, mid, hi).await?;
        merge(seq, lo, mid, hi).await
    })
}
