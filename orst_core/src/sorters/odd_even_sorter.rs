use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Odd-Even Sort](https://en.wikipedia.org/wiki/Odd%E2%80%93even_sort),
/// also known as brick sort.
///
/// Alternates between comparing the pairs at odd/even and even/odd index pairs until a full
/// round swaps nothing.
pub struct OddEvenSorter;

impl Sorter for OddEvenSorter {
    fn name(&self) -> &'static str {
        "Odd-Even Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let last = seq.len().saturating_sub(1);
            let mut sorted = false;
            while !sorted {
                sorted = true;
                for start in [1, 0] {
                    for i in (start..last).step_by(2) {
                        if seq.compare(i, i + 1).await? == Ordering::Greater {
                            seq.swap(i, i + 1).await?;
                            sorted = false;
                        }
                    }
                }
            }
            Ok(())
        })
    }
}
