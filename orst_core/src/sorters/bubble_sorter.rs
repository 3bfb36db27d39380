use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_core::sequence::Sequence;
/// use orst_core::sorters::{BubbleSorter, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut seq = Sequence::from_values(&[1, 5, 4, 2, 3]);
/// BubbleSorter.sort(&mut seq).await.unwrap();
/// assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Bubble sort repeatedly steps through the list, compares adjacent elements and swaps them if
/// they are in the wrong order. Each pass carries the largest remaining element to the end.
///
/// Everything after the last swap of a pass is already in place, so the next pass stops there.
/// A pass without any swap ends the sort.
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let mut unsorted = seq.len();
            while unsorted > 1 {
                let mut last_swap = 0;
                for i in 1..unsorted {
                    if seq.compare(i - 1, i).await? == Ordering::Greater {
                        seq.swap(i - 1, i).await?;
                        last_swap = i;
                    }
                }
                for i in last_swap..unsorted {
                    seq.mark_sorted(i);
                }
                unsorted = last_swap;
            }
            Ok(())
        })
    }
}
