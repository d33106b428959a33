//! Read-only projections of engine state for the rendering collaborators.
//!
//! The code renderer and blank widgets never touch the engine's state
//! directly; they consume the [`RenderModel`] built here.

use serde::{Deserialize, Serialize};

use crate::puzzle_engine::models::{PuzzleLine, Segment};

/// The fixed marker substituted for an unfilled blank in rendered code.
pub const BLANK_PLACEHOLDER: &str = "___";

/// Concatenate a line's segments, substituting each blank with its filled
/// value or [`BLANK_PLACEHOLDER`] when still empty.
///
/// `slot_values` is indexed by blank id; an empty string means unfilled.
pub fn code_with_placeholders(line: &PuzzleLine, slot_values: &[String]) -> String {
    let mut code = String::new();
    for segment in &line.sentence {
        match segment {
            Segment::Text { content } => code.push_str(content),
            Segment::Blank { id } => match slot_values.get(*id) {
                Some(value) if !value.is_empty() => code.push_str(value),
                _ => code.push_str(BLANK_PLACEHOLDER),
            },
        }
    }
    code
}

/// Render a line with every blank substituted by its solution token.
/// This is what gets snapshotted into `previous_code` on line advance.
pub fn solution_code(line: &PuzzleLine) -> String {
    code_with_placeholders(line, &line.solution)
}

/// What one blank's display widget needs: its text, whether it holds a
/// placed word, and whether it is the next slot to be filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankView {
    pub id: usize,
    pub text: String,
    pub filled: bool,
    pub active: bool,
}

/// Everything the UI reads for one frame of the drill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Current line with placeholders/filled values substituted.
    pub code: String,
    /// Fully rendered code of the most recently completed line; empty at
    /// game start.
    pub previous_code: String,
    pub hint: String,
    /// One view per blank id, in id order.
    pub blanks: Vec<BlankView>,
    /// Remaining unplaced words, in bank order.
    pub word_bank: Vec<String>,
}

/// Build the per-blank views for a line. `active` is true only for the
/// first empty blank id.
pub fn blank_views(line: &PuzzleLine, slot_values: &[String]) -> Vec<BlankView> {
    let first_empty = slot_values.iter().position(String::is_empty);
    line.sentence
        .iter()
        .filter_map(|segment| match segment {
            Segment::Blank { id } => Some(*id),
            Segment::Text { .. } => None,
        })
        .map(|id| {
            let value = slot_values.get(id).map(String::as_str).unwrap_or("");
            BlankView {
                id,
                text: if value.is_empty() { BLANK_PLACEHOLDER.to_string() } else { value.to_string() },
                filled: !value.is_empty(),
                active: first_empty == Some(id),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_engine::catalog::PuzzleCatalog;

    fn slot_values(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_blanks_render_as_placeholder() {
        let catalog = PuzzleCatalog::has_duplicate_drill();
        let code = code_with_placeholders(catalog.line(0), &slot_values(&["", ""]));
        assert_eq!(
            code,
            "def hasDuplicate(self, nums: List[int]) -> bool:\n  ___ = set()\n  for ___ in nums:"
        );
    }

    #[test]
    fn filled_blanks_render_their_value() {
        let catalog = PuzzleCatalog::has_duplicate_drill();
        let code = code_with_placeholders(catalog.line(0), &slot_values(&["seen", ""]));
        assert_eq!(
            code,
            "def hasDuplicate(self, nums: List[int]) -> bool:\n  seen = set()\n  for ___ in nums:"
        );
    }

    #[test]
    fn solution_code_substitutes_every_blank() {
        let catalog = PuzzleCatalog::has_duplicate_drill();
        let code = solution_code(catalog.line(0));
        assert_eq!(
            code,
            "def hasDuplicate(self, nums: List[int]) -> bool:\n  seen = set()\n  for num in nums:"
        );
    }

    #[test]
    fn only_first_empty_blank_is_active() {
        let catalog = PuzzleCatalog::has_duplicate_drill();
        let views = blank_views(catalog.line(0), &slot_values(&["seen", ""]));
        assert_eq!(views.len(), 2);
        assert!(views[0].filled && !views[0].active);
        assert_eq!(views[0].text, "seen");
        assert!(!views[1].filled && views[1].active);
        assert_eq!(views[1].text, BLANK_PLACEHOLDER);
    }

    #[test]
    fn no_blank_is_active_on_a_full_line() {
        let catalog = PuzzleCatalog::has_duplicate_drill();
        let views = blank_views(catalog.line(0), &slot_values(&["seen", "num"]));
        assert!(views.iter().all(|v| !v.active));
    }
}
