//! Building blocks shared by several sorters. Ranges are half open, `[lo, hi)`.

use std::cmp::Ordering;

use crate::abort::Interrupt;
use crate::pacing::{HALF, QUARTER};
use crate::sequence::{Element, Sequence};

/// Insertion sort by adjacent swaps. Stable.
pub(crate) async fn insertion_range(
    seq: &mut Sequence,
    lo: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    for unsorted in (lo + 1)..hi {
        let mut i = unsorted;
        while i > lo && seq.compare(i - 1, i).await? == Ordering::Greater {
            seq.swap(i - 1, i).await?;
            i -= 1;
        }
    }
    Ok(())
}

/// In-place heap sort of a sub range, used as the fallback of the hybrid sorters.
pub(crate) async fn heap_sort_range(
    seq: &mut Sequence,
    lo: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    let len = hi - lo;
    for root in (0..len / 2).rev() {
        sift_down(seq, lo, root, len).await?;
    }
    for end in (1..len).rev() {
        seq.swap(lo, lo + end).await?;
        sift_down(seq, lo, 0, end).await?;
    }
    Ok(())
}

/// Restores the max-heap below `root` for a heap stored at `seq[lo..lo + len]`.
pub(crate) async fn sift_down(
    seq: &mut Sequence,
    lo: usize,
    mut root: usize,
    len: usize,
) -> Result<(), Interrupt> {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return Ok(());
        }
        if child + 1 < len && seq.compare(lo + child, lo + child + 1).await? == Ordering::Less {
            child += 1;
        }
        if seq.compare(lo + root, lo + child).await? != Ordering::Less {
            return Ok(());
        }
        seq.swap(lo + root, lo + child).await?;
        root = child;
    }
}

/// Stable merge of the sorted runs `[lo, mid)` and `[mid, hi)`.
///
/// Only the left run is buffered. The write cursor never overtakes the unread part of the right
/// run, so whatever is left of the right run once the buffer is drained is already in place.
pub(crate) async fn merge(
    seq: &mut Sequence,
    lo: usize,
    mid: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    if lo >= mid || mid >= hi {
        return Ok(());
    }
    if seq.compare(mid - 1, mid).await? != Ordering::Greater {
        return Ok(());
    }

    let left = seq.elements()[lo..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, lo);
    while i < left.len() && j < hi {
        // Right wins only when strictly smaller, which keeps equal elements in order.
        if seq.compare_to(j, left[i].value).await? == Ordering::Less {
            let element = seq.element_at(j);
            seq.write(k, element).await?;
            j += 1;
        } else {
            seq.write(k, left[i]).await?;
            i += 1;
        }
        k += 1;
    }
    while i < left.len() {
        seq.write(k, left[i]).await?;
        i += 1;
        k += 1;
    }
    Ok(())
}

/// Orders `lo`, the middle and `hi - 1`, then moves the median to `hi - 1` where the Lomuto
/// partition expects its pivot. Needs at least three elements.
pub(crate) async fn median_of_three(
    seq: &mut Sequence,
    lo: usize,
    hi: usize,
) -> Result<(), Interrupt> {
    debug_assert!(hi - lo >= 3);
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;

    if seq.compare(mid, lo).await? == Ordering::Less {
        seq.swap(mid, lo).await?;
    }
    if seq.compare(last, lo).await? == Ordering::Less {
        seq.swap(last, lo).await?;
    }
    if seq.compare(last, mid).await? == Ordering::Less {
        seq.swap(last, mid).await?;
    }
    seq.swap(mid, last).await
}

/// Lomuto partition around the last element. Returns the pivot's final index and whether the
/// range was already partitioned, that is whether nothing but the pivot had to move.
pub(crate) async fn lomuto(
    seq: &mut Sequence,
    lo: usize,
    hi: usize,
) -> Result<(usize, bool), Interrupt> {
    let pivot = hi - 1;
    let mut store = lo;
    let mut untouched = true;

    for i in lo..pivot {
        if seq.compare(i, pivot).await? == Ordering::Less {
            if i != store {
                seq.swap(i, store).await?;
                untouched = false;
            }
            store += 1;
        }
    }
    if store != pivot {
        seq.swap(store, pivot).await?;
    }
    seq.mark_sorted(store);

    Ok((store, untouched))
}

/// Counted scan for the ascending postcondition.
pub(crate) async fn check_sorted(
    seq: &Sequence,
    lo: usize,
    hi: usize,
) -> Result<bool, Interrupt> {
    for i in (lo + 1)..hi {
        if seq.compare_scaled(i - 1, i, HALF).await? == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Value of the largest element, found with counted comparisons. `None` when empty.
pub(crate) async fn max_value(seq: &Sequence) -> Result<Option<u32>, Interrupt> {
    if seq.is_empty() {
        return Ok(None);
    }
    let mut max = seq.value_at(0);
    for i in 1..seq.len() {
        if seq.compare_to_scaled(i, max, QUARTER).await? == Ordering::Greater {
            max = seq.value_at(i);
        }
    }
    Ok(Some(max))
}

/// Value of the smallest element, found with counted comparisons. `None` when empty.
pub(crate) async fn min_value(seq: &Sequence) -> Result<Option<u32>, Interrupt> {
    if seq.is_empty() {
        return Ok(None);
    }
    let mut min = seq.value_at(0);
    for i in 1..seq.len() {
        if seq.compare_to_scaled(i, min, QUARTER).await? == Ordering::Less {
            min = seq.value_at(i);
        }
    }
    Ok(Some(min))
}

/// Writes `elements` over `seq[lo..]`, skipping positions that already hold the right element.
pub(crate) async fn write_back(
    seq: &mut Sequence,
    lo: usize,
    elements: &[Element],
) -> Result<(), Interrupt> {
    for (offset, &element) in elements.iter().enumerate() {
        if seq.element_at(lo + offset) != element {
            seq.write(lo + offset, element).await?;
        }
    }
    Ok(())
}

/// `⌊log2 n⌋`, with `0` for `n <= 1`.
pub(crate) fn floor_log2(n: usize) -> u32 {
    n.max(1).ilog2()
}
