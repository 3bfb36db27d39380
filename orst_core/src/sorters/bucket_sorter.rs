use crate::pacing::QUARTER;
use crate::sequence::Sequence;
use crate::sorters::common::{insertion_range, max_value, min_value, write_back};
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Bucket Sort](https://en.wikipedia.org/wiki/Bucket_sort)
///
/// Elements are scattered in input order over `sqrt(n)` buckets covering equal slices of the
/// value range, gathered back bucket by bucket, and every bucket is finished with insertion
/// sort. Stable.
pub struct BucketSorter;

impl Sorter for BucketSorter {
    fn name(&self) -> &'static str {
        "Bucket Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            let (Some(min), Some(max)) = (min_value(seq).await?, max_value(seq).await?) else {
                return Ok(());
            };

            let bucket_count = ((len as f64).sqrt() as usize).max(1);
            let span = u64::from(max - min) + 1;
            let bucket_of =
                |value: u32| (u64::from(value - min) * bucket_count as u64 / span) as usize;

            let mut buckets = vec![Vec::new(); bucket_count];
            for i in 0..len {
                seq.suspend(QUARTER).await?;
                let element = seq.element_at(i);
                buckets[bucket_of(element.value)].push(element);
            }

            let mut lo = 0;
            let mut bounds = Vec::with_capacity(bucket_count);
            for bucket in &buckets {
                bounds.push((lo, lo + bucket.len()));
                lo += bucket.len();
            }
            write_back(seq, 0, &buckets.concat()).await?;

            for (lo, hi) in bounds {
                insertion_range(seq, lo, hi).await?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(BucketSorter);

    #[tokio::test]
    async fn equal_values_keep_their_order() {
        let mut seq = Sequence::from_values(&[50, 10, 50, 90, 10, 50]);
        BucketSorter.sort(&mut seq).await.unwrap();

        assert_eq!(seq.values(), [10, 10, 50, 50, 50, 90]);
        let tags = seq.elements().iter().map(|e| e.tag).collect::<Vec<_>>();
        assert_eq!(tags, [1, 4, 0, 2, 5, 3]);
    }
}
