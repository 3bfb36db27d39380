use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Cycle Sort](https://en.wikipedia.org/wiki/Cycle_sort)
///
/// Every element is moved straight to its final position, which is found by counting how many
/// elements are smaller. The element it displaces is placed next, until the cycle closes back at
/// the start. Each swap puts one element where it belongs for good.
pub struct CycleSorter;

impl Sorter for CycleSorter {
    fn name(&self) -> &'static str {
        "Cycle Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            for start in 0..len.saturating_sub(1) {
                loop {
                    let item = seq.value_at(start);
                    let mut pos = start;
                    for i in (start + 1)..len {
                        if seq.compare_to(i, item).await? == Ordering::Less {
                            pos += 1;
                        }
                    }
                    if pos == start {
                        break;
                    }
                    // Equal values already placed keep their slots.
                    while seq.compare_to(pos, item).await? == Ordering::Equal {
                        pos += 1;
                    }
                    seq.swap(start, pos).await?;
                    seq.mark_sorted(pos);
                }
                seq.mark_sorted(start);
            }
            Ok(())
        })
    }
}
