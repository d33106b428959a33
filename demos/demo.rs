//! Full walkthrough of the built-in "hasDuplicate" drill.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `code_fill_tutor` works end to end:
//!
//! 1. **One line in detail** — line 0 is shown blank-by-blank: the rendered
//!    code with `___` placeholders, the shuffled word bank, each selection,
//!    and the reveal/advance events that fire when time passes.
//!
//! 2. **The rest of the drill** — the remaining lines are solved with the
//!    same loop, printing the state after every advance, until the engine
//!    reports `Finished`.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes the shuffles fully deterministic.
//! - Selections always fill the lowest empty blank; the learner picks the
//!   word, never the slot.
//! - `tick(elapsed_ms)` drives the virtual clock: reveals come due at +50 ms,
//!   the line advance at +500 ms.
//! - `previous_code` carries the completed line's fully substituted code for
//!   the transition display, and survives a reset.

use code_fill_tutor::{EngineEvent, Phase, PuzzleCatalog, PuzzleEngine, COMPLETION_DELAY_MS};

/// Print the current frame: line number, hint, rendered code, and bank.
fn print_frame(engine: &PuzzleEngine) {
    let frame = engine.render_model();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Line {}  ({})", engine.current_line_index() + 1, engine.phase());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for code_line in frame.code.lines() {
        println!("    {code_line}");
    }
    println!();
    println!("  Hint: {}", frame.hint);
    println!("  Word bank: {:?}", frame.word_bank);
    println!();
}

/// Apply one batch of engine events, narrating each.
fn print_events(events: &[EngineEvent]) {
    for event in events {
        match event {
            EngineEvent::RevealBlank { blank_id } => {
                println!("  >> reveal animation for blank {blank_id}");
            }
            EngineEvent::AdvancedTo { line_index } => {
                println!("  >> advanced to line {}", line_index + 1);
            }
            EngineEvent::Finished => println!("  >> drill finished!"),
        }
    }
}

fn main() {
    let mut engine = PuzzleEngine::new(PuzzleCatalog::has_duplicate_drill(), Some(42));

    // ── Line 0 in detail ────────────────────────────────────────────────────
    println!();
    println!("══ Line 0, blank by blank ══");
    println!();
    print_frame(&engine);

    // Deliberately pick the words in the wrong order first: the fill sticks
    // (no rollback) but the line never matches, so no advance is scheduled.
    engine.select_word("num");
    engine.select_word("seen");
    print_events(&engine.tick(COMPLETION_DELAY_MS));
    println!("  After wrong order: blanks = {:?} (no advance)", engine.slot_values());
    println!();

    engine.reset();
    println!("  -- reset --");
    println!();

    // Now the correct order: each fill schedules a reveal, the completed
    // line schedules the delayed advance.
    for word in ["seen", "num"] {
        engine.select_word(word);
        println!("  selected {word:?}: code is now");
        println!("    {}", engine.render_model().code.replace('\n', "\n    "));
    }
    print_events(&engine.tick(COMPLETION_DELAY_MS));
    println!();
    println!("  previous_code snapshot:");
    for code_line in engine.previous_code().lines() {
        println!("    {code_line}");
    }
    println!();

    // ── The rest of the drill ───────────────────────────────────────────────
    println!("══ Remaining lines ══");
    println!();
    while engine.phase() == Phase::Playing {
        print_frame(&engine);
        let solution = engine.current_line().solution.clone();
        for word in &solution {
            engine.select_word(word);
        }
        print_events(&engine.tick(COMPLETION_DELAY_MS));
        println!();
    }

    println!("Final code:");
    for code_line in engine.previous_code().lines() {
        println!("    {code_line}");
    }
}
