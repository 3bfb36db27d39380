use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Stooge Sort](https://en.wikipedia.org/wiki/Stooge_sort)
///
/// Swaps the ends if needed, then sorts the first two thirds, the last two thirds and the first
/// two thirds again. Roughly `O(n^2.7)`.
pub struct StoogeSorter;

impl Sorter for StoogeSorter {
    fn name(&self) -> &'static str {
        "Stooge Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        if len < 2 {
            return Box::pin(async { Ok(()) });
        }
        stooge_sort(seq, 0, len - 1)
    }
}

/// Sorts the inclusive range `[lo, hi]`.
fn stooge_sort(seq: &mut Sequence, lo: usize, hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        if seq.compare(lo, hi).await? == Ordering::Greater {
            seq.swap(lo, hi).await?;
        }
        let len = hi - lo + 1;
        if len > 2 {
            let third = len / 3;
            stooge_sort(seq, lo, hi - third).await?;
            stooge_sort(seq, lo + third, hi).await?;
            stooge_sort(seq, lo, hi - third).await?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(StoogeSorter, 40);
}
