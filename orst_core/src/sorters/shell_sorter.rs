use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// Marcin Ciura's experimentally derived gap sequence.
const GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// An implementation of [Shellsort](https://en.wikipedia.org/wiki/Shellsort)
///
/// Gapped insertion sort: elements `gap` apart are sorted first, for a shrinking sequence of
/// gaps ending with 1, at which point it is a plain insertion sort over an almost sorted input.
pub struct ShellSorter;

impl Sorter for ShellSorter {
    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            for gap in GAPS.into_iter().filter(|&gap| gap < len) {
                for unsorted in gap..len {
                    let mut i = unsorted;
                    while i >= gap && seq.compare(i - gap, i).await? == Ordering::Greater {
                        seq.swap(i - gap, i).await?;
                        i -= gap;
                    }
                }
            }
            Ok(())
        })
    }
}
