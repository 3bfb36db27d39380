use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::sequence::Sequence;
use crate::sorters::common::check_sorted;
use crate::sorters::{SortFuture, Sorter};

/// Bozosort: swap two random elements, check, repeat.
///
/// Like [`BogoSorter`](super::BogoSorter) it is unbounded.
pub struct BozoSorter;

impl Sorter for BozoSorter {
    fn name(&self) -> &'static str {
        "Bozo Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            let mut rng = StdRng::from_entropy();
            while !check_sorted(seq, 0, len).await? {
                let (i, j) = (rng.gen_range(0..len), rng.gen_range(0..len));
                if i != j {
                    seq.swap(i, j).await?;
                }
            }
            Ok(())
        })
    }
}
