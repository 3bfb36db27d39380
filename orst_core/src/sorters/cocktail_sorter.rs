use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Cocktail Shaker Sort](https://en.wikipedia.org/wiki/Cocktail_shaker_sort)
///
/// Bubble sort in both directions: a forward pass carries the largest element right, a backward
/// pass carries the smallest left. Both ends shrink to the position of the last swap.
pub struct CocktailSorter;

impl Sorter for CocktailSorter {
    fn name(&self) -> &'static str {
        "Cocktail Shaker Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let (mut lo, mut hi) = (0, seq.len());
            while lo + 1 < hi {
                let mut last_swap = lo;
                for i in (lo + 1)..hi {
                    if seq.compare(i - 1, i).await? == Ordering::Greater {
                        seq.swap(i - 1, i).await?;
                        last_swap = i;
                    }
                }
                for i in last_swap..hi {
                    seq.mark_sorted(i);
                }
                hi = last_swap;

                let mut first_swap = hi;
                for i in ((lo + 1)..hi).rev() {
                    if seq.compare(i - 1, i).await? == Ordering::Greater {
                        seq.swap(i - 1, i).await?;
                        first_swap = i;
                    }
                }
                for i in lo..first_swap.min(hi) {
                    seq.mark_sorted(i);
                }
                lo = first_swap;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(CocktailSorter);

    #[tokio::test]
    async fn turtle_moves_in_one_backward_pass() {
        let mut seq = Sequence::from_values(&[2, 3, 4, 5, 1]);
        CocktailSorter.sort(&mut seq).await.unwrap();
        assert_eq!(seq.values(), [1, 2, 3, 4, 5]);
        assert_eq!(seq.counts().operations, 4);
    }
}
