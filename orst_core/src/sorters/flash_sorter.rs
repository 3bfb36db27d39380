use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::common::{insertion_range, max_value, min_value};
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Flashsort](https://en.wikipedia.org/wiki/Flashsort)
///
/// # Explanation
///
/// Values are mapped linearly onto `m = 0.43 n` classes between the smallest and the largest
/// value. After counting the class sizes every class owns a contiguous region, and the elements
/// are permuted into their regions with swaps, one cycle leader at a time. The regions are then
/// almost sorted and a final insertion pass finishes the job.
pub struct FlashSorter;

impl Sorter for FlashSorter {
    fn name(&self) -> &'static str {
        "Flash Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            if len < 2 {
                return Ok(());
            }
            let (Some(min), Some(max)) = (min_value(seq).await?, max_value(seq).await?) else {
                return Ok(());
            };
            if seq.compare_values(min, max).await? == Ordering::Equal {
                return Ok(());
            }

            let classes = (len * 43 / 100).max(2);
            let class_of = |value: u32| {
                ((classes as u64 - 1) * u64::from(value - min) / u64::from(max - min)) as usize
            };

            let mut ends = vec![0_usize; classes];
            for i in 0..len {
                ends[class_of(seq.value_at(i))] += 1;
            }
            let mut next = vec![0_usize; classes];
            let mut total = 0;
            for class in 0..classes {
                next[class] = total;
                total += ends[class];
                ends[class] = total;
            }

            for class in 0..classes {
                while next[class] < ends[class] {
                    let i = next[class];
                    let target = class_of(seq.value_at(i));
                    if target == class {
                        next[class] += 1;
                    } else {
                        seq.swap(i, next[target]).await?;
                        next[target] += 1;
                    }
                }
            }

            insertion_range(seq, 0, len).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(FlashSorter);

    #[tokio::test]
    async fn evenly_spread_values() {
        let values = [90, 10, 50, 30, 70, 20, 80, 40, 60, 100];
        let mut seq = Sequence::from_values(&values);
        FlashSorter.sort(&mut seq).await.unwrap();
        assert_eq!(seq.values(), [10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }
}
