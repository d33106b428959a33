//! Core puzzle engine — line progression, word bank, blank slots, and
//! reveal-animation sequencing.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: segments, puzzle lines, phase, engine events |
//! | `catalog`   | Validated line sequence + the built-in "hasDuplicate" drill |
//! | `word_bank` | Shuffled pool of unplaced words with remove-on-use |
//! | `slots`     | Per-line blank values and left-to-right fill order |
//! | `animation` | Once-per-occupancy reveal marks, reset on line change |
//! | `render`    | Read-only projections for the code renderer and widgets |
//! | `engine`    | `PuzzleEngine` — the state machine and its timer queue |

pub mod animation;
pub mod catalog;
pub mod engine;
pub mod models;
pub mod render;
pub mod slots;
pub mod word_bank;

// Re-export the public API surface so callers can use
// `puzzle_engine::PuzzleEngine` without reaching into sub-modules.
pub use animation::AnimationCoordinator;
pub use catalog::{CatalogError, PuzzleCatalog};
pub use engine::{PuzzleEngine, COMPLETION_DELAY_MS, REVEAL_DELAY_MS};
pub use models::{EngineEvent, Phase, PuzzleLine, Segment};
pub use render::{BlankView, RenderModel, BLANK_PLACEHOLDER};
pub use slots::SlotTracker;
pub use word_bank::WordBank;
