/// The per-line array of blank values, indexed by blank id.
///
/// An empty string means unfilled. Slots fill strictly left-to-right in id
/// order: the learner picks *which word*, never *which blank*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTracker {
    blanks: Vec<String>,
}

impl SlotTracker {
    /// All `blank_count` slots start empty.
    pub fn new(blank_count: usize) -> Self {
        SlotTracker { blanks: vec![String::new(); blank_count] }
    }

    /// Lowest blank id that is still empty, or `None` when the line is full.
    pub fn first_empty(&self) -> Option<usize> {
        self.blanks.iter().position(String::is_empty)
    }

    /// Set `blanks[index] = word`. No-op when out of range or already
    /// filled; the engine only fills the id returned by `first_empty`.
    pub fn fill(&mut self, index: usize, word: &str) {
        match self.blanks.get_mut(index) {
            Some(slot) if slot.is_empty() => word.clone_into(slot),
            _ => {}
        }
    }

    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Element-wise, order-exact comparison against the line's solution.
    pub fn matches_solution(&self, solution: &[String]) -> bool {
        self.blanks.len() == solution.len()
            && self.blanks.iter().zip(solution).all(|(blank, token)| blank == token)
    }

    pub fn filled_count(&self) -> usize {
        self.blanks.iter().filter(|b| !b.is_empty()).count()
    }

    pub fn len(&self) -> usize {
        self.blanks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blanks.is_empty()
    }

    /// Slot values in id order; empty string marks an unfilled slot.
    pub fn values(&self) -> &[String] {
        &self.blanks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn slots_fill_left_to_right() {
        let mut slots = SlotTracker::new(3);
        assert_eq!(slots.first_empty(), Some(0));
        slots.fill(0, "seen");
        assert_eq!(slots.first_empty(), Some(1));
        slots.fill(1, "num");
        assert_eq!(slots.first_empty(), Some(2));
        slots.fill(2, "True");
        assert_eq!(slots.first_empty(), None);
        assert!(slots.is_complete());
    }

    #[test]
    fn fill_on_occupied_slot_is_ignored() {
        let mut slots = SlotTracker::new(2);
        slots.fill(0, "seen");
        slots.fill(0, "num");
        assert_eq!(slots.values()[0], "seen");
    }

    #[test]
    fn fill_out_of_range_is_ignored() {
        let mut slots = SlotTracker::new(1);
        slots.fill(5, "seen");
        assert_eq!(slots.filled_count(), 0);
    }

    #[test]
    fn matches_solution_requires_exact_order() {
        let mut slots = SlotTracker::new(2);
        slots.fill(0, "num");
        slots.fill(1, "seen");
        assert!(!slots.matches_solution(&solution(&["seen", "num"])));

        let mut slots = SlotTracker::new(2);
        slots.fill(0, "seen");
        slots.fill(1, "num");
        assert!(slots.matches_solution(&solution(&["seen", "num"])));
    }

    #[test]
    fn partial_fill_never_matches() {
        let mut slots = SlotTracker::new(2);
        slots.fill(0, "seen");
        assert!(!slots.matches_solution(&solution(&["seen", "num"])));
    }

    #[test]
    fn zero_blank_line_is_trivially_complete() {
        let slots = SlotTracker::new(0);
        assert!(slots.is_complete());
        assert!(slots.matches_solution(&[]));
    }
}
