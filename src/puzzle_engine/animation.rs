/// Tracks which blank slots have already fired their reveal animation during
/// the current line occupancy, so each filled blank animates exactly once.
///
/// The mark table is rebuilt (sized to the new line's blank count) on every
/// line change and reset. The same slot id filling again after a line change
/// is a new occupancy and animates again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationCoordinator {
    animated: Vec<bool>,
}

impl AnimationCoordinator {
    pub fn new(blank_count: usize) -> Self {
        AnimationCoordinator { animated: vec![false; blank_count] }
    }

    /// Clear all marks and resize for a new line occupancy.
    pub fn reset(&mut self, blank_count: usize) {
        self.animated.clear();
        self.animated.resize(blank_count, false);
    }

    /// Scan the slot values after a fill mutation and mark every non-empty,
    /// not-yet-animated slot. Returns the newly marked ids, in id order;
    /// the engine schedules one deferred reveal per returned id.
    pub fn observe(&mut self, slot_values: &[String]) -> Vec<usize> {
        let mut newly_marked = Vec::new();
        for (id, value) in slot_values.iter().enumerate() {
            if !value.is_empty() && !self.animated[id] {
                self.animated[id] = true;
                newly_marked.push(id);
            }
        }
        newly_marked
    }

    pub fn is_animated(&self, id: usize) -> bool {
        self.animated.get(id).copied().unwrap_or(false)
    }
}
