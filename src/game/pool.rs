use crate::types::Number;
use rand::Rng;

pub const POOL_MIN: Number = 1;
pub const POOL_MAX: Number = 100;
pub const POOL_SIZE: usize = 100;

/// The set of lottery numbers not yet handed out this round.
///
/// Draws are uniform over the remaining set and never repeat a number until
/// [`NumberPool::reset`]. An exhausted pool reports `None` instead of
/// panicking so the caller can show a "finished" state.
#[derive(Debug, Clone)]
pub struct NumberPool {
    remaining: Vec<Number>,
}

impl NumberPool {
    pub fn new() -> Self {
        Self {
            remaining: (POOL_MIN..=POOL_MAX).collect(),
        }
    }

    /// Draw a random number without replacement. `None` once all 100 numbers
    /// have been issued.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Number> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }

    /// Restore the full 1..=100 set for a new round.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// How many numbers have been issued so far (the host status bar).
    pub fn issued(&self) -> usize {
        POOL_SIZE - self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Whether `number` is still waiting to be drawn.
    pub fn contains(&self, number: Number) -> bool {
        self.remaining.contains(&number)
    }
}

impl Default for NumberPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_are_distinct_and_in_range() {
        let mut pool = NumberPool::new();
        let mut rng = rand::rng();
        let mut seen = HashSet::new();

        for _ in 0..POOL_SIZE {
            let number = pool.draw(&mut rng).expect("pool should not be empty yet");
            assert!((POOL_MIN..=POOL_MAX).contains(&number));
            assert!(seen.insert(number), "number {} drawn twice", number);
        }

        assert_eq!(seen.len(), POOL_SIZE);
    }

    #[test]
    fn pool_reports_exhaustion_on_101st_draw() {
        let mut pool = NumberPool::new();
        let mut rng = rand::rng();

        for _ in 0..POOL_SIZE {
            assert!(pool.draw(&mut rng).is_some());
        }

        assert!(pool.is_exhausted());
        assert_eq!(pool.draw(&mut rng), None);
    }

    #[test]
    fn drawn_and_remaining_partition_the_pool() {
        let mut pool = NumberPool::new();
        let mut rng = rand::rng();
        let mut drawn = HashSet::new();

        for _ in 0..37 {
            drawn.insert(pool.draw(&mut rng).unwrap());
        }

        assert_eq!(pool.issued(), 37);
        assert_eq!(pool.remaining(), POOL_SIZE - 37);
        for n in POOL_MIN..=POOL_MAX {
            assert_ne!(drawn.contains(&n), pool.contains(n));
        }
    }

    #[test]
    fn reset_restores_the_full_set() {
        let mut pool = NumberPool::new();
        let mut rng = rand::rng();

        for _ in 0..50 {
            pool.draw(&mut rng);
        }
        pool.reset();

        assert_eq!(pool.remaining(), POOL_SIZE);
        assert_eq!(pool.issued(), 0);
    }
}
