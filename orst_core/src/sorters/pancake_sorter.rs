use std::cmp::Ordering;

use crate::abort::Interrupt;
use crate::pacing::HALF;
use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Pancake Sort](https://en.wikipedia.org/wiki/Pancake_sorting)
///
/// The only allowed move is flipping a prefix. The largest unsorted element is flipped to the
/// front, then the whole unsorted prefix is flipped so that it lands at the back.
pub struct PancakeSorter;

impl Sorter for PancakeSorter {
    fn name(&self) -> &'static str {
        "Pancake Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            for size in (2..=seq.len()).rev() {
                let mut largest = 0;
                for i in 1..size {
                    if seq.compare_scaled(i, largest, HALF).await? == Ordering::Greater {
                        largest = i;
                    }
                }
                if largest != size - 1 {
                    if largest != 0 {
                        flip(seq, largest).await?;
                    }
                    flip(seq, size - 1).await?;
                }
                seq.mark_sorted(size - 1);
            }
            if !seq.is_empty() {
                seq.mark_sorted(0);
            }
            Ok(())
        })
    }
}

/// Reverses `seq[..=last]`.
async fn flip(seq: &mut Sequence, last: usize) -> Result<(), Interrupt> {
    let (mut i, mut j) = (0, last);
    while i < j {
        seq.swap(i, j).await?;
        i += 1;
        j -= 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(PancakeSorter);

    #[tokio::test]
    async fn flip_reverses_the_prefix() {
        let mut seq = Sequence::from_values(&[1, 2, 3, 4, 5]);
        flip(&mut seq, 3).await.unwrap();
        assert_eq!(seq.values(), [4, 3, 2, 1, 5]);
    }
}
