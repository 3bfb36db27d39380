use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::common::insertion_range;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time.
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there.
///
/// The plain version walks the element back with adjacent swaps. With `smart` set the location is
/// found with a binary search (the upper bound, so equal elements stay in order) and the larger
/// elements are shifted up with writes.
///
/// # Usage
///```
/// use orst_core::sequence::Sequence;
/// use orst_core::sorters::{InsertionSorter, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut seq = Sequence::from_values(&[1, 5, 4, 2, 3]);
/// InsertionSorter { smart: true }.sort(&mut seq).await.unwrap();
/// assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
/// # });
///```
pub struct InsertionSorter {
    pub smart: bool,
}

impl Sorter for InsertionSorter {
    fn name(&self) -> &'static str {
        if self.smart {
            "Binary Insertion Sort"
        } else {
            "Insertion Sort"
        }
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            if !self.smart {
                let len = seq.len();
                return insertion_range(seq, 0, len).await;
            }

            for unsorted in 1..seq.len() {
                let key = seq.element_at(unsorted);

                let (mut lo, mut hi) = (0, unsorted);
                while lo < hi {
                    let mid = lo + (hi - lo) / 2;
                    if seq.compare_to(mid, key.value).await? == Ordering::Greater {
                        hi = mid;
                    } else {
                        lo = mid + 1;
                    }
                }
                if lo == unsorted {
                    continue;
                }

                for i in ((lo + 1)..=unsorted).rev() {
                    let shifted = seq.element_at(i - 1);
                    seq.write(i, shifted).await?;
                }
                seq.write(lo, key).await?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod lame {
        use super::*;

        sorter_tests!(InsertionSorter { smart: false });
    }

    mod smart {
        use super::*;

        sorter_tests!(InsertionSorter { smart: true });
    }

    #[tokio::test]
    async fn binary_search_saves_comparisons() {
        let values = (1..=64).rev().collect::<Vec<u32>>();

        let mut lame = Sequence::from_values(&values);
        InsertionSorter { smart: false }.sort(&mut lame).await.unwrap();
        let mut smart = Sequence::from_values(&values);
        InsertionSorter { smart: true }.sort(&mut smart).await.unwrap();

        assert_eq!(lame.values(), smart.values());
        assert!(smart.counts().comparisons < lame.counts().comparisons);
    }
}
