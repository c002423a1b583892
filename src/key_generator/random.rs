use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate the keys `0..num` in a random order.
/// The same seed always produces the same permutation
pub struct RandomGenerator {
    /// Keys not yet published, in no particular order
    pending: Vec<usize>,
    rng: Pcg64,
}

impl RandomGenerator {
    pub fn new(num: usize, seed: u64) -> RandomGenerator {
        RandomGenerator {
            pending: (0..num).collect(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomGenerator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        // Lazy Fisher-Yates: draw any pending key and fill its slot with the last one
        if self.pending.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0, self.pending.len());
        Some(self.pending.swap_remove(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.pending.len();
        (size, Some(size))
    }
}

impl FusedIterator for RandomGenerator {}

impl ExactSizeIterator for RandomGenerator {}
