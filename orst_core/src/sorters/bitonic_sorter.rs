use std::cmp::Ordering;

use crate::abort::Interrupt;
use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Bitonic Sort](https://en.wikipedia.org/wiki/Bitonic_sorter) that works
/// for any length.
///
/// # Explanation
///
/// The classic network needs a power of two. This variant sorts the first half descending and
/// the second half ascending, then merges: elements are compare-exchanged with the one `m`
/// positions further, where `m` is the greatest power of two below the length, and both parts are
/// merged recursively.
pub struct BitonicSorter;

impl Sorter for BitonicSorter {
    fn name(&self) -> &'static str {
        "Bitonic Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        bitonic_sort(seq, 0, len, true)
    }
}

fn bitonic_sort(seq: &mut Sequence, lo: usize, len: usize, ascending: bool) -> SortFuture<'_> {
    Box::pin(async move {
        if len > 1 {
            let half = len / 2;
            bitonic_sort(seq, lo, half, !ascending).await?;
            bitonic_sort(seq, lo + half, len - half, ascending).await?;
            bitonic_merge(seq, lo, len, ascending).await?;
        }
        Ok(())
    })
}

fn bitonic_merge(seq: &mut Sequence, lo: usize, len: usize, ascending: bool) -> SortFuture<'_> {
    Box::pin(async move {
        if len > 1 {
            let m = greatest_power_of_two_below(len);
            for i in lo..(lo + len - m) {
                compare_exchange(seq, i, i + m, ascending).await?;
            }
            bitonic_merge(seq, lo, m, ascending).await?;
            bitonic_merge(seq, lo + m, len - m, ascending).await?;
        }
        Ok(())
    })
}

async fn compare_exchange(
    seq: &mut Sequence,
    i: usize,
    j: usize,
    ascending: bool,
) -> Result<(), Interrupt> {
    let out_of_order = if ascending {
        Ordering::Greater
    } else {
        Ordering::Less
    };
    if seq.compare(i, j).await? == out_of_order {
        seq.swap(i, j).await?;
    }
    Ok(())
}

fn greatest_power_of_two_below(n: usize) -> usize {
    let mut k = 1;
    while k < n {
        k <<= 1;
    }
    k >> 1
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(BitonicSorter);

    #[test]
    fn powers_below() {
        assert_eq!(greatest_power_of_two_below(2), 1);
        assert_eq!(greatest_power_of_two_below(5), 4);
        assert_eq!(greatest_power_of_two_below(8), 4);
        assert_eq!(greatest_power_of_two_below(9), 8);
    }

    #[tokio::test]
    async fn odd_lengths() {
        for len in [3_u32, 5, 7, 11, 13] {
            let values = (0..len).map(|v| (v * 2) % len).collect::<Vec<_>>();
            let mut seq = Sequence::from_values(&values);
            BitonicSorter.sort(&mut seq).await.unwrap();
            assert_eq!(seq.values(), (0..len).collect::<Vec<_>>());
        }
    }
}
