//! # code_fill_tutor
//!
//! An interactive "fill in the blank" coding tutor engine.
//!
//! The engine presents a multi-line code snippet one line at a time, hides
//! chosen tokens behind blanks, and lets a learner complete each line by
//! picking words from a shuffled word bank. Blanks always fill left-to-right;
//! when a line matches its solution, the engine advances to the next line
//! after a short delay, and each filled blank fires exactly one reveal
//! animation per line.
//!
//! ## How it works
//!
//! 1. Build a [`PuzzleCatalog`] (or use the built-in
//!    [`PuzzleCatalog::has_duplicate_drill`]) — content is validated eagerly,
//!    so the engine never sees malformed lines.
//! 2. Create a [`PuzzleEngine`] with an optional RNG seed; the word bank is
//!    shuffled with an unbiased Fisher-Yates.
//! 3. Feed learner choices to [`PuzzleEngine::select_word`] and drive time
//!    with [`PuzzleEngine::tick`], applying the returned [`EngineEvent`]s
//!    (reveal signals, line advances) in your UI.
//! 4. Render each frame from [`PuzzleEngine::render_model`] — a read-only
//!    projection with placeholder-substituted code, per-blank views, and the
//!    remaining word bank.
//!
//! ## Key properties
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same shuffles every time — useful for tests.
//! - **Total at runtime**: out-of-contract calls (word not in bank, line
//!   already full, drill finished) are silent no-ops, never errors.
//! - **Race-safe timers**: deferred work carries a generation guard, so a
//!   reset or line change silently cancels anything stale.
//!
//! ## Quick start
//!
//! ```rust
//! use code_fill_tutor::{EngineEvent, PuzzleCatalog, PuzzleEngine};
//!
//! let mut engine = PuzzleEngine::new(PuzzleCatalog::has_duplicate_drill(), Some(42));
//!
//! // The learner picks the two words for line 0 in solution order:
//! engine.select_word("seen");
//! engine.select_word("num");
//!
//! // Drive time forward; reveals fire at +50ms, the advance at +500ms.
//! for event in engine.tick(1_000) {
//!     match event {
//!         EngineEvent::RevealBlank { blank_id } => println!("reveal blank {blank_id}"),
//!         EngineEvent::AdvancedTo { line_index } => println!("now on line {line_index}"),
//!         EngineEvent::Finished => println!("done!"),
//!     }
//! }
//!
//! let frame = engine.render_model();
//! println!("{}", frame.code);
//! ```

pub mod puzzle_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `code_fill_tutor::PuzzleEngine`
// directly without reaching into `puzzle_engine::`.
pub use puzzle_engine::{
    BlankView, CatalogError, EngineEvent, Phase, PuzzleCatalog, PuzzleEngine,
    PuzzleLine, RenderModel, Segment, BLANK_PLACEHOLDER, COMPLETION_DELAY_MS,
    REVEAL_DELAY_MS,
};
