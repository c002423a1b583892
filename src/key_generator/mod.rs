//! Generators of distinct keys, used to feed trees in tests and benchmarks
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn permutations() {
        for num in vec![0, 1, 2, 5, 10, 100, 1000, 1001] {
            check_one(RandomGenerator::new(num, 17), num);
            check_one(SequentialGenerator::new(num, SequentialOrder::Ascending), num);
            check_one(SequentialGenerator::new(num, SequentialOrder::Descending), num);
        }
    }

    fn check_one<T>(gen: T, num: usize)
    where
        T: Iterator<Item = usize> + ExactSizeIterator,
    {
        assert_eq!(gen.len(), num);

        // Every key in 0..num exactly once
        let mut values: Vec<usize> = gen.collect();
        values.sort();
        assert_eq!(values, (0..num).collect::<Vec<_>>());
    }
}
