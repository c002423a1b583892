use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate the keys `0..num` in order
pub struct SequentialGenerator {
    position: usize,
    order: SequentialOrder,
    num: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialGenerator {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialGenerator {
        SequentialGenerator {
            position: 0,
            order,
            num,
        }
    }
}

impl Iterator for SequentialGenerator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            None
        } else {
            let key = match self.order {
                SequentialOrder::Ascending => self.position,
                SequentialOrder::Descending => self.num - 1 - self.position,
            };
            self.position += 1;
            Some(key)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialGenerator {}

impl ExactSizeIterator for SequentialGenerator {}
