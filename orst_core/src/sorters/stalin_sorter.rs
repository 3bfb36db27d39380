use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// Stalin sort: anything out of order is eliminated.
///
/// # Usage
///```
/// use orst_core::sequence::Sequence;
/// use orst_core::sorters::{Sorter, StalinSorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut seq = Sequence::from_values(&[3, 1, 4, 1, 5, 9, 2, 6]).eliminating();
/// StalinSorter.sort(&mut seq).await.unwrap();
/// assert_eq!(seq.values(), [3, 4, 5, 9]);
/// # });
///```
///
/// The first element survives. Scanning to the right, an element smaller than the last survivor
/// is removed, anything else survives and becomes the new bar to clear. This is the only sorter
/// that needs an [`eliminating`](Sequence::eliminating) sequence.
pub struct StalinSorter;

impl Sorter for StalinSorter {
    fn name(&self) -> &'static str {
        "Stalin Sort"
    }

    fn eliminates(&self) -> bool {
        true
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let mut i = 1;
            while i < seq.len() {
                if seq.compare(i, i - 1).await? == Ordering::Less {
                    seq.remove(i).await?;
                } else {
                    seq.mark_sorted(i - 1);
                    i += 1;
                }
            }
            if !seq.is_empty() {
                seq.mark_sorted(seq.len() - 1);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn survivors(values: &[u32]) -> Vec<u32> {
        let mut seq = Sequence::from_values(values).eliminating();
        StalinSorter.sort(&mut seq).await.unwrap();
        seq.values()
    }

    #[tokio::test]
    async fn keeps_the_running_maximum() {
        assert_eq!(survivors(&[3, 1, 4, 1, 5, 9, 2, 6]).await, [3, 4, 5, 9]);
    }

    #[tokio::test]
    async fn equal_values_survive() {
        assert_eq!(survivors(&[2, 2, 1, 2]).await, [2, 2, 2]);
    }

    #[tokio::test]
    async fn simple_edge_cases() {
        assert!(survivors(&[]).await.is_empty());
        assert_eq!(survivors(&[1]).await, [1]);
        assert_eq!(survivors(&[2, 1]).await, [2]);
        assert_eq!(survivors(&[1, 2, 3]).await, [1, 2, 3]);
        assert_eq!(survivors(&[5, 4, 3, 2, 1]).await, [5]);
    }

    #[tokio::test]
    async fn removals_are_operations() {
        let mut seq = Sequence::from_values(&[5, 4, 3]).eliminating();
        StalinSorter.sort(&mut seq).await.unwrap();
        assert_eq!(seq.counts().operations, 2);
        assert_eq!(seq.counts().comparisons, 2);
    }
}
