use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// Vladimir Yaroslavskiy's dual-pivot quicksort.
///
/// # Explanation
///
/// The outer elements of the range become the pivots `p <= q`. One pass splits the rest into
/// three parts, `< p`, `p..=q` and `> q`, and the pivots are swapped to the part boundaries where
/// they are final.
///
/// The two smaller parts are sorted recursively and the largest one by the loop. When both
/// pivots are equal the middle part holds nothing but copies of them and is skipped.
pub struct DualPivotSorter;

impl Sorter for DualPivotSorter {
    fn name(&self) -> &'static str {
        "Dual-Pivot Quick Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        dual_pivot(seq, 0, len)
    }
}

fn dual_pivot(seq: &mut Sequence, mut lo: usize, mut hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        while lo + 1 < hi {
            let (left, right) = (lo, hi - 1);
            if seq.compare(left, right).await? == Ordering::Greater {
                seq.swap(left, right).await?;
            }
            let (p, q) = (seq.value_at(left), seq.value_at(right));

            // (left, lt) < p, (gt, right) > q, [lt, k) in p..=q
            let mut lt = left + 1;
            let mut gt = right - 1;
            let mut k = lt;
            while k <= gt {
                if seq.compare_to(k, p).await? == Ordering::Less {
                    if k != lt {
                        seq.swap(k, lt).await?;
                    }
                    lt += 1;
                } else if seq.compare_to(k, q).await? == Ordering::Greater {
                    while k < gt && seq.compare_to(gt, q).await? == Ordering::Greater {
                        gt -= 1;
                    }
                    if k != gt {
                        seq.swap(k, gt).await?;
                    }
                    gt -= 1;
                    if seq.compare_to(k, p).await? == Ordering::Less {
                        if k != lt {
                            seq.swap(k, lt).await?;
                        }
                        lt += 1;
                    }
                }
                k += 1;
            }

            lt -= 1;
            gt += 1;
            if left != lt {
                seq.swap(left, lt).await?;
            }
            if right != gt {
                seq.swap(right, gt).await?;
            }
            seq.mark_sorted(lt);
            seq.mark_sorted(gt);

            let mut parts = vec![(lo, lt), (gt + 1, hi)];
            if seq.compare_values(p, q).await? != Ordering::Equal {
                parts.push((lt + 1, gt));
            }
            parts.sort_by_key(|&(start, end)| end.saturating_sub(start));

            let Some((largest_lo, largest_hi)) = parts.pop() else {
                return Ok(());
            };
            for (start, end) in parts {
                dual_pivot(seq, start, end).await?;
            }
            lo = largest_lo;
            hi = largest_hi;
        }
        Ok(())
    })
}
