use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Comb Sort](https://en.wikipedia.org/wiki/Comb_sort)
///
/// Bubble sort over a gap that starts at the length and shrinks by a factor of 1.3 every pass,
/// which moves small values from the end ("turtles") forward quickly. Once the gap reaches 1 it
/// keeps going until a pass makes no swap.
pub struct CombSorter;

impl Sorter for CombSorter {
    fn name(&self) -> &'static str {
        "Comb Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            let mut gap = len;
            let mut swapped = true;
            while gap > 1 || swapped {
                gap = (gap * 10 / 13).max(1);
                swapped = false;
                for i in 0..len.saturating_sub(gap) {
                    if seq.compare(i, i + gap).await? == Ordering::Greater {
                        seq.swap(i, i + gap).await?;
                        swapped = true;
                    }
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(CombSorter);
}
