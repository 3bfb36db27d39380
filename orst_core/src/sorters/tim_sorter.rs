use crate::sequence::Sequence;
use crate::sorters::common::{insertion_range, merge};
use crate::sorters::{SortFuture, Sorter};

/// Length of the runs sorted by insertion before merging starts.
const RUN: usize = 16;

/// A simplified [Timsort](https://en.wikipedia.org/wiki/Timsort)
///
/// Fixed runs of [`RUN`] elements are sorted with insertion sort, then merged pairwise into ever
/// longer runs. The merge skips pairs that are already in order, so sorted input costs little
/// more than one comparison per run boundary.
pub struct TimSorter;

impl Sorter for TimSorter {
    fn name(&self) -> &'static str {
        "Tim Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            for lo in (0..len).step_by(RUN) {
                insertion_range(seq, lo, (lo + RUN).min(len)).await?;
            }

            let mut width = RUN;
            while width < len {
                let mut lo = 0;
                while lo + width < len {
                    let hi = (lo + 2 * width).min(len);
                    merge(seq, lo, lo + width, hi).await?;
                    lo += 2 * width;
                }
                width *= 2;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(TimSorter);

    #[tokio::test]
    async fn sorted_input_is_cheap() {
        let mut seq = Sequence::from_values(&(0..64).collect::<Vec<_>>());
        TimSorter.sort(&mut seq).await.unwrap();
        assert_eq!(seq.counts().operations, 0);
        assert_eq!(seq.counts().comparisons, 4 * 15 + 3);
    }
}
