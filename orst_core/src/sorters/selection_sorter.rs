use std::cmp::Ordering;

use crate::pacing::HALF;
use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_core::sequence::Sequence;
/// use orst_core::sorters::{SelectionSorter, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut seq = Sequence::from_values(&[1, 5, 4, 2, 3]);
/// SelectionSorter { double: true }.sort(&mut seq).await.unwrap();
/// assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// The algorithm divides the input list into two parts: a sorted sublist of items which is built
/// up from left to right at the front of the list and a sublist of the remaining unsorted items.
/// It repeatedly finds the smallest element in the unsorted sublist and exchanges it with the
/// leftmost unsorted element.
///
/// With `double` set, every scan picks up both the smallest and the largest element and the
/// sorted part grows from both ends.
pub struct SelectionSorter {
    pub double: bool,
}

impl Sorter for SelectionSorter {
    fn name(&self) -> &'static str {
        if self.double {
            "Double Selection Sort"
        } else {
            "Selection Sort"
        }
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            if !self.double {
                for unsorted in 0..seq.len() {
                    let mut smallest_in_rest = unsorted;
                    for i in (unsorted + 1)..seq.len() {
                        if seq.compare_scaled(i, smallest_in_rest, HALF).await? == Ordering::Less {
                            smallest_in_rest = i;
                        }
                    }
                    if unsorted != smallest_in_rest {
                        seq.swap(unsorted, smallest_in_rest).await?;
                    }
                    seq.mark_sorted(unsorted);
                }
                return Ok(());
            }

            let (mut lo, mut hi) = (0, seq.len());
            while lo + 1 < hi {
                let (mut min, mut max) = (lo, lo);
                for i in (lo + 1)..hi {
                    if seq.compare_scaled(i, min, HALF).await? == Ordering::Less {
                        min = i;
                    } else if seq.compare_scaled(i, max, HALF).await? == Ordering::Greater {
                        max = i;
                    }
                }

                if min != lo {
                    seq.swap(lo, min).await?;
                }
                // The maximum was sitting at `lo` and just moved to where the minimum was.
                if max == lo {
                    max = min;
                }
                if max != hi - 1 {
                    seq.swap(max, hi - 1).await?;
                }

                seq.mark_sorted(lo);
                seq.mark_sorted(hi - 1);
                lo += 1;
                hi -= 1;
            }
            if lo + 1 == hi {
                seq.mark_sorted(lo);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod single {
        use super::*;

        sorter_tests!(SelectionSorter { double: false });
    }

    mod double {
        use super::*;

        sorter_tests!(SelectionSorter { double: true });
    }

    #[tokio::test]
    async fn double_handles_max_at_the_front() {
        let mut seq = Sequence::from_values(&[9, 1, 5, 3]);
        SelectionSorter { double: true }.sort(&mut seq).await.unwrap();
        assert_eq!(seq.values(), [1, 3, 5, 9]);
    }

    #[tokio::test]
    async fn at_most_one_swap_per_position() {
        let mut seq = Sequence::from_values(&(1..=30).rev().collect::<Vec<_>>());
        SelectionSorter { double: false }.sort(&mut seq).await.unwrap();
        assert!(seq.counts().operations < 30);
    }
}
