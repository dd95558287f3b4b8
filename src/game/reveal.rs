use crate::types::Assignment;

/// Iterates disclosures over a finalized assignment set.
///
/// The reveal order is a permutation of assignment positions sorted by
/// descending number, so the dramatic reveal runs from the largest number
/// down while the UI keeps each participant anchored at their registration
/// slot. The order is computed once, when the sequencer is built.
///
/// "Not started" is modeled as `revealed == None` rather than the -1 the
/// original UI used.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    order: Vec<usize>,
    revealed: Option<usize>,
}

impl RevealSequencer {
    pub fn new(assignments: &[Assignment]) -> Self {
        let mut order: Vec<usize> = (0..assignments.len()).collect();
        // Numbers are unique within a round, so no tie-break is needed.
        order.sort_by(|&a, &b| assignments[b].number.cmp(&assignments[a].number));
        Self {
            order,
            revealed: None,
        }
    }

    /// Begin disclosure with nothing revealed yet.
    pub fn start(&mut self) {
        self.revealed = Some(0);
    }

    /// Disclose one more entry. Calling past the end is a no-op that leaves
    /// the count at the total. Returns the new revealed count.
    pub fn advance(&mut self) -> usize {
        let next = match self.revealed {
            None => 0,
            Some(count) => (count + 1).min(self.order.len()),
        };
        self.revealed = Some(next);
        next
    }

    /// Whether the assignment at registration `position` has been disclosed.
    pub fn is_revealed(&self, position: usize) -> bool {
        let Some(count) = self.revealed else {
            return false;
        };
        self.order
            .iter()
            .position(|&p| p == position)
            .map(|rank| rank < count)
            .unwrap_or(false)
    }

    /// Back to "not started".
    pub fn reset(&mut self) {
        self.revealed = None;
    }

    /// Positions in disclosure order (largest number first).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// `None` before [`RevealSequencer::start`].
    pub fn revealed_count(&self) -> Option<usize> {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == Some(self.order.len())
    }

    /// (revealed, total) for the progress display; revealed is 0 before
    /// start.
    pub fn progress(&self) -> (usize, usize) {
        (self.revealed.unwrap_or(0), self.order.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(numbers: &[u8]) -> Vec<Assignment> {
        numbers
            .iter()
            .enumerate()
            .map(|(i, &number)| Assignment {
                name: format!("p{}", i),
                number,
            })
            .collect()
    }

    #[test]
    fn order_is_strictly_descending_by_number() {
        let assignments = assignments(&[12, 99, 4, 57, 31]);
        let sequencer = RevealSequencer::new(&assignments);

        let numbers: Vec<u8> = sequencer
            .order()
            .iter()
            .map(|&pos| assignments[pos].number)
            .collect();
        assert_eq!(numbers, [99, 57, 31, 12, 4]);
        assert!(numbers.windows(2).all(|w| w[0] > w[1]));

        // The order is a permutation of all positions.
        let mut positions: Vec<usize> = sequencer.order().to_vec();
        positions.sort_unstable();
        assert_eq!(positions, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn advance_clamps_at_total() {
        let assignments = assignments(&[10, 20, 30]);
        let mut sequencer = RevealSequencer::new(&assignments);
        sequencer.start();

        for _ in 0..5 {
            sequencer.advance();
        }

        assert_eq!(sequencer.revealed_count(), Some(3));
        assert!(sequencer.is_complete());
    }

    #[test]
    fn largest_number_is_revealed_first() {
        let assignments = assignments(&[10, 80, 45]);
        let mut sequencer = RevealSequencer::new(&assignments);

        sequencer.start();
        assert!(!sequencer.is_revealed(0));
        assert!(!sequencer.is_revealed(1));

        sequencer.advance();
        // Position 1 holds 80, the largest number.
        assert!(sequencer.is_revealed(1));
        assert!(!sequencer.is_revealed(0));
        assert!(!sequencer.is_revealed(2));

        sequencer.advance();
        assert!(sequencer.is_revealed(2));
        assert!(!sequencer.is_revealed(0));
    }

    #[test]
    fn nothing_is_revealed_before_start() {
        let assignments = assignments(&[10, 20]);
        let sequencer = RevealSequencer::new(&assignments);

        assert_eq!(sequencer.revealed_count(), None);
        assert!(!sequencer.is_revealed(0));
        assert!(!sequencer.is_revealed(1));
    }

    #[test]
    fn reset_returns_to_not_started() {
        let assignments = assignments(&[10, 20]);
        let mut sequencer = RevealSequencer::new(&assignments);
        sequencer.start();
        sequencer.advance();

        sequencer.reset();

        assert_eq!(sequencer.revealed_count(), None);
        assert!(!sequencer.is_revealed(0));
        assert_eq!(sequencer.progress(), (0, 2));
    }

    #[test]
    fn out_of_range_position_is_never_revealed() {
        let assignments = assignments(&[10]);
        let mut sequencer = RevealSequencer::new(&assignments);
        sequencer.start();
        sequencer.advance();

        assert!(sequencer.is_revealed(0));
        assert!(!sequencer.is_revealed(7));
    }
}
