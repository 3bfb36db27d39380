//! Base datasets shared by every run of a race.

use rand::Rng;

use crate::config::clamp_size;

/// Smallest value a generated bar can have.
pub const MIN_VALUE: u32 = 5;
/// Largest value a generated bar can have.
pub const MAX_VALUE: u32 = 100;

/// Generates `size` random values in `[MIN_VALUE, MAX_VALUE]`. The size is clamped into the
/// configured range first.
///
/// ```
/// let values = orst_core::generate_base_dataset(20);
/// assert_eq!(values.len(), 20);
/// assert!(values.iter().all(|v| (5..=100).contains(v)));
/// ```
pub fn generate_base_dataset(size: usize) -> Vec<u32> {
    generate_base_dataset_with(&mut rand::thread_rng(), size)
}

/// [`generate_base_dataset`] with a caller supplied generator, for reproducible races.
pub fn generate_base_dataset_with<R>(rng: &mut R, size: usize) -> Vec<u32>
where
    R: Rng + ?Sized,
{
    let size = clamp_size(size);
    (0..size)
        .map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_SIZE, MIN_SIZE};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn exact_length_and_range() {
        for size in MIN_SIZE..=MAX_SIZE {
            let values = generate_base_dataset(size);
            assert_eq!(values.len(), size);
            assert!(values
                .iter()
                .all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
        }
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        assert_eq!(generate_base_dataset(0).len(), MIN_SIZE);
        assert_eq!(generate_base_dataset(10_000).len(), MAX_SIZE);
    }

    #[test]
    fn seeded_generation_repeats() {
        let first = generate_base_dataset_with(&mut StdRng::seed_from_u64(42), 30);
        let second = generate_base_dataset_with(&mut StdRng::seed_from_u64(42), 30);
        assert_eq!(first, second);
    }
}
