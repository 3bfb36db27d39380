use crate::pacing::QUARTER;
use crate::sequence::Sequence;
use crate::sorters::common::{max_value, write_back};
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Counting Sort](https://en.wikipedia.org/wiki/Counting_sort)
///
/// # Explanation
///
/// Finds the largest value, counts how often every value occurs and turns the counts into
/// starting positions. Elements are then placed at their value's next free position in input
/// order, which keeps the sort stable, and written back wherever they moved.
pub struct CountingSorter;

impl Sorter for CountingSorter {
    fn name(&self) -> &'static str {
        "Counting Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let Some(max) = max_value(seq).await? else {
                return Ok(());
            };

            let mut counts = vec![0_usize; max as usize + 1];
            for i in 0..seq.len() {
                seq.suspend(QUARTER).await?;
                counts[seq.value_at(i) as usize] += 1;
            }

            let mut next = 0;
            for count in counts.iter_mut() {
                let starts_at = next;
                next += *count;
                *count = starts_at;
            }

            let input = seq.elements().to_vec();
            let mut output = input.clone();
            for element in input {
                let position = &mut counts[element.value as usize];
                output[*position] = element;
                *position += 1;
            }

            write_back(seq, 0, &output).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(CountingSorter);

    #[tokio::test]
    async fn equal_values_keep_their_order() {
        let mut seq = Sequence::from_values(&[3, 0, 3, 0, 3]);
        CountingSorter.sort(&mut seq).await.unwrap();

        let tags = seq.elements().iter().map(|e| e.tag).collect::<Vec<_>>();
        assert_eq!(tags, [1, 3, 0, 2, 4]);
    }
}
