use std::cmp::Ordering;

use crate::pacing::HALF;
use crate::sequence::Sequence;
use crate::sorters::common::write_back;
use crate::sorters::{SortFuture, Sorter};

/// A stable three-way quicksort that partitions through buffers.
///
/// Every element of the range is compared against the middle element's value and appended to a
/// less, equal or greater buffer in scan order. The buffers are written back one after the other,
/// so equal elements keep the order they entered the partition in, and the equal block is final.
pub struct FluxSorter;

impl Sorter for FluxSorter {
    fn name(&self) -> &'static str {
        "Flux Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        flux_sort(seq, 0, len)
    }
}

fn flux_sort(seq: &mut Sequence, mut lo: usize, mut hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        while lo + 1 < hi {
            let pivot = seq.value_at(lo + (hi - lo) / 2);

            let (mut less, mut equal, mut greater) = (Vec::new(), Vec::new(), Vec::new());
            for i in lo..hi {
                let element = seq.element_at(i);
                match seq.compare_to_scaled(i, pivot, HALF).await? {
                    Ordering::Less => less.push(element),
                    Ordering::Equal => equal.push(element),
                    Ordering::Greater => greater.push(element),
                }
            }

            let lt = lo + less.len();
            let gt = lt + equal.len();
            less.append(&mut equal);
            less.append(&mut greater);
            write_back(seq, lo, &less).await?;
            for i in lt..gt {
                seq.mark_sorted(i);
            }

            if lt - lo < hi - gt {
                flux_sort(seq, lo, lt).await?;
                lo = gt;
            } else {
                flux_sort(seq, gt, hi).await?;
                hi = lt;
            }
        }
        Ok(())
    })
}
