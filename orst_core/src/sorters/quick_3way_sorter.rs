use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// Quicksort with Dijkstra's three-way partition.
///
/// The range is split into elements less than, equal to and greater than the pivot in a single
/// pass. The equal block is final, which makes inputs with many duplicates cheap.
pub struct Quick3WaySorter;

impl Sorter for Quick3WaySorter {
    fn name(&self) -> &'static str {
        "3-Way Quick Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        quick_sort(seq, 0, len)
    }
}

fn quick_sort(seq: &mut Sequence, mut lo: usize, mut hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        while lo + 1 < hi {
            let pivot = seq.value_at(lo);
            // [lo, lt) < pivot, [lt, i) == pivot, [gt, hi) > pivot
            let (mut lt, mut i, mut gt) = (lo, lo + 1, hi);
            while i < gt {
                match seq.compare_to(i, pivot).await? {
                    Ordering::Less => {
                        seq.swap(lt, i).await?;
                        lt += 1;
                        i += 1;
                    }
                    Ordering::Greater => {
                        gt -= 1;
                        if i != gt {
                            seq.swap(i, gt).await?;
                        }
                    }
                    Ordering::Equal => i += 1,
                }
            }
            for i in lt..gt {
                seq.mark_sorted(i);
            }

            if lt - lo < hi - gt {
                quick_sort(seq, lo, lt).await?;
                lo = gt;
            } else {
                quick_sort(seq, gt, hi).await?;
                hi = lt;
            }
        }
        if lo + 1 == hi {
            seq.mark_sorted(lo);
        }
        Ok(())
    })
}
