use crate::sequence::Sequence;
use crate::sorters::common::{insertion_range, merge};
use crate::sorters::{SortFuture, Sorter};

/// A merge sort that splits in quarters.
///
/// Each range is cut into four parts which are sorted recursively (ranges of up to four elements
/// by insertion), then merged as two pairs and finally as one. Stable.
pub struct QuadSorter;

impl Sorter for QuadSorter {
    fn name(&self) -> &'static str {
        "Quad Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        let len = seq.len();
        quad_sort(seq, 0, len)
    }
}

fn quad_sort(seq: &mut Sequence, lo: usize, hi: usize) -> SortFuture<'_> {
    Box::pin(async move {
        let len = hi - lo;
        if len <= 4 {
            return insertion_range(seq, lo, hi).await;
        }

        let q1 = lo + len / 4;
        let q2 = lo + len / 2;
        let q3 = lo + 3 * len / 4;
        quad_sort(seq, lo, q1).await?;
        quad_sort(seq, q1, q2).await?;
        quad_sort(seq, q2, q3).await?;
        quad_sort(seq, q3, hi).await?;

        merge(seq, lo, q1, q2).await?;
        merge(seq, q2, q3, hi).await?;
        merge(seq, lo, q2, hi).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(QuadSorter);

    #[tokio::test]
    async fn equal_values_keep_their_order() {
        let values = [5, 2, 5, 2, 5, 2, 5, 2, 5, 2, 5];
        let mut seq = Sequence::from_values(&values);
        QuadSorter.sort(&mut seq).await.unwrap();

        let tags = seq.elements().iter().map(|e| e.tag).collect::<Vec<_>>();
        assert_eq!(tags, [1, 3, 5, 7, 9, 0, 2, 4, 6, 8, 10]);
    }
}
