use std::cmp::Ordering;

use crate::sequence::Sequence;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Gnome Sort](https://en.wikipedia.org/wiki/Gnome_sort)
///
/// The gnome looks at the flower pot next to him and the previous one; if they are in the right
/// order he steps one pot forward, otherwise he swaps them and steps one pot backwards.
pub struct GnomeSorter;

impl Sorter for GnomeSorter {
    fn name(&self) -> &'static str {
        "Gnome Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let mut i = 1;
            while i < seq.len() {
                if i == 0 || seq.compare(i - 1, i).await? != Ordering::Greater {
                    i += 1;
                } else {
                    seq.swap(i - 1, i).await?;
                    i -= 1;
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    sorter_tests!(GnomeSorter);
}
