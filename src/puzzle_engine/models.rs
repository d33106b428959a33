use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Line content
// ---------------------------------------------------------------------------

/// One piece of a line's sentence: literal code text, or a blank to fill.
///
/// A closed enum so the renderer's `match` is exhaustive; blank ids are dense
/// `0..k-1` within a line and define the fill order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { content: String },
    Blank { id: usize },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text { content: content.into() }
    }

    pub fn blank(id: usize) -> Self {
        Segment::Blank { id }
    }
}

/// One unit of the puzzle sequence: a code statement with blanks, the word
/// bank that solves it, a hint, and the canonical solution.
///
/// Immutable once the catalog is built. `words` must be a permutation of
/// `solution`; `catalog` validation enforces this at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleLine {
    pub sentence: Vec<Segment>,
    pub words: Vec<String>,
    pub hint: String,
    pub solution: Vec<String>,
}

impl PuzzleLine {
    /// Number of blank slots in this line.
    pub fn blank_count(&self) -> usize {
        self.sentence
            .iter()
            .filter(|s| matches!(s, Segment::Blank { .. }))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Engine lifecycle types
// ---------------------------------------------------------------------------

/// Where the engine is in the overall drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Blanks on the current line still accept fills.
    Playing,
    /// The last line was completed; no further mutation is accepted.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Playing => write!(f, "playing"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/// Deferred effects surfaced by [`tick`](crate::puzzle_engine::PuzzleEngine::tick),
/// in firing order.
///
/// The host forwards `RevealBlank` to the matching display widget's one-shot
/// "set revealed" control; the other two drive screen transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A filled blank's reveal animation should start now.
    RevealBlank { blank_id: usize },
    /// The engine moved on to the given line.
    AdvancedTo { line_index: usize },
    /// The final line was completed.
    Finished,
}
