use crate::pacing::QUARTER;
use crate::sequence::Sequence;
use crate::sorters::common::{max_value, write_back};
use crate::sorters::{SortFuture, Sorter};

const BASE: u32 = 10;

/// An implementation of least significant digit [Radix Sort](https://en.wikipedia.org/wiki/Radix_sort)
///
/// One stable counting pass per decimal digit of the largest value, starting with the ones.
pub struct RadixSorter;

impl Sorter for RadixSorter {
    fn name(&self) -> &'static str {
        "Radix Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let Some(max) = max_value(seq).await? else {
                return Ok(());
            };

            let mut exponent = 1_u32;
            while max / exponent > 0 {
                let digit = |value: u32| (value / exponent % BASE) as usize;

                let mut starts = [0_usize; BASE as usize];
                for i in 0..seq.len() {
                    seq.suspend(QUARTER).await?;
                    starts[digit(seq.value_at(i))] += 1;
                }
                let mut next = 0;
                for start in starts.iter_mut() {
                    let count = *start;
                    *start = next;
                    next += count;
                }

                let input = seq.elements().to_vec();
                let mut output = input.clone();
                for element in input {
                    let position = &mut starts[digit(element.value)];
                    output[*position] = element;
                    *position += 1;
                }
                write_back(seq, 0, &output).await?;

                match exponent.checked_mul(BASE) {
                    Some(next) => exponent = next,
                    None => break,
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(RadixSorter);

    #[tokio::test]
    async fn equal_values_keep_their_order() {
        let mut seq = Sequence::from_values(&[21, 12, 21, 3, 12]);
        RadixSorter.sort(&mut seq).await.unwrap();

        assert_eq!(seq.values(), [3, 12, 12, 21, 21]);
        let tags = seq.elements().iter().map(|e| e.tag).collect::<Vec<_>>();
        assert_eq!(tags, [3, 1, 4, 0, 2]);
    }

    #[tokio::test]
    async fn all_zeros() {
        let mut seq = Sequence::from_values(&[0, 0, 0]);
        RadixSorter.sort(&mut seq).await.unwrap();
        assert_eq!(seq.counts().operations, 0);
    }
}
