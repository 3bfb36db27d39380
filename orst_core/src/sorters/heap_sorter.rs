use crate::sequence::Sequence;
use crate::sorters::common::sift_down;
use crate::sorters::{SortFuture, Sorter};

/// An implementation of [Heapsort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Explanation
///
/// The sequence is first rearranged into a binary max-heap, so the largest element sits at the
/// root. The root is then swapped with the last element of the heap, the heap shrinks by one and
/// the new root is sifted down until the heap property holds again. Repeating this fills the
/// sequence from the back.
pub struct HeapSorter;

impl Sorter for HeapSorter {
    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn sort<'a>(&'a self, seq: &'a mut Sequence) -> SortFuture<'a> {
        Box::pin(async move {
            let len = seq.len();
            for root in (0..len / 2).rev() {
                sift_down(seq, 0, root, len).await?;
            }
            for end in (1..len).rev() {
                seq.swap(0, end).await?;
                seq.mark_sorted(end);
                sift_down(seq, 0, 0, end).await?;
            }
            if len > 0 {
                seq.mark_sorted(0);
            }
            Ok(())
        })
    }
}
