use super::{GameError, NumberPool};
use crate::types::Assignment;

/// Append-only mapping of participant name to drawn number.
///
/// Owns the round's [`NumberPool`]; every successful registration consumes
/// one draw. Duplicate names are allowed and receive distinct numbers.
#[derive(Debug, Clone)]
pub struct AssignmentRegistry {
    pool: NumberPool,
    assignments: Vec<Assignment>,
}

impl AssignmentRegistry {
    pub fn new() -> Self {
        Self {
            pool: NumberPool::new(),
            assignments: Vec::new(),
        }
    }

    /// Draw a number for `name` and record the pairing.
    ///
    /// The name is trimmed first; an empty result is rejected before any
    /// draw happens.
    pub fn register(&mut self, name: &str) -> Result<Assignment, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }

        let number = self
            .pool
            .draw(&mut rand::rng())
            .ok_or(GameError::PoolExhausted)?;

        let assignment = Assignment {
            name: name.to_string(),
            number,
        };
        self.assignments.push(assignment.clone());
        Ok(assignment)
    }

    /// Assignments in registration order.
    pub fn list(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn count(&self) -> usize {
        self.assignments.len()
    }

    pub fn numbers_remaining(&self) -> usize {
        self.pool.remaining()
    }

    pub fn numbers_issued(&self) -> usize {
        self.pool.issued()
    }

    /// Discard all assignments and refill the pool for a new round.
    pub fn reset(&mut self) {
        self.pool.reset();
        self.assignments.clear();
    }
}

impl Default for AssignmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
