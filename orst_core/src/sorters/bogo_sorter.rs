use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::sequence::Sequence;
use crate::sorters::common::check_sorted;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Bogosort](https://en.wikipedia.org/wiki/Bogosort)
///
/// Shuffles until sorted. There is no bound on how long that takes, a run only ends early when
/// its race is aborted.
pub struct BogoSorter;

impl Sorter for BogoSorter {
    fn name(&self) -> &'static str {
        "Bogo Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            let mut rng = StdRng::from_entropy();
            while !check_sorted(seq, 0, len).await? {
                // Fisher-Yates
                for i in (1..len).rev() {
                    let j = rng.gen_range(0..=i);
                    if i != j {
                        seq.swap(i, j).await?;
                    }
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(BogoSorter, 5);
}
