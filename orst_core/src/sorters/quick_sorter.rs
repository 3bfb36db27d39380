use crate::sequence::Sequence;
use crate::sorters::common::lomuto;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Quicksort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_core::sequence::Sequence;
/// use orst_core::sorters::{QuickSorter, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut seq = Sequence::from_values(&[1, 5, 4, 2, 3]);
/// QuickSorter.sort(&mut seq).await.unwrap();
/// assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Quicksort is a divide-and-conquer algorithm. It works by selecting a 'pivot' element from the
/// array and partitioning the other elements into two sub-arrays, according to whether they are
/// less than or greater than the pivot.
///
/// This one uses the Lomuto scheme with the last element as the pivot. Only the smaller side is
/// sorted recursively; the larger side is handled by the loop, so the recursion never gets
/// deeper than `log2 n`.
pub struct QuickSorter;

impl Sorter for QuickSorter {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        quick_sort(seq, 0, len)
    }
}

fn quick_sort(seq: &mut Sequence, mut lo: usize, mut hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        while lo + 1 < hi {
            let (pivot, _) = lomuto(seq, lo, hi).await?;
            if pivot - lo < hi - pivot {
                quick_sort(seq, lo, pivot).await?;
                lo = pivot + 1;
            } else {
                quick_sort(seq, pivot + 1, hi).await?;
                hi = pivot;
            }
        }
        if lo + 1 == hi {
            seq.mark_sorted(lo);
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(QuickSorter);
    partition_tests!(QuickSorter);
}
