//! The puzzle progression engine: accepts word selections, validates line
//! completion, and sequences the deferred line-advance and reveal effects.
//!
//! ## Timing model
//!
//! The engine owns a virtual clock. Deferred work (the 500 ms completion
//! delay, the 50 ms reveal delay) is queued as timers against that clock;
//! the host drives time with [`PuzzleEngine::tick`] and applies the returned
//! [`EngineEvent`]s. Every timer captures the generation counter of the line
//! occupancy it was scheduled under; a line change or reset bumps the
//! counter, so stale timers are dropped instead of mutating fresh state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::puzzle_engine::animation::AnimationCoordinator;
use crate::puzzle_engine::catalog::PuzzleCatalog;
use crate::puzzle_engine::models::{EngineEvent, Phase, PuzzleLine};
use crate::puzzle_engine::render::{blank_views, code_with_placeholders, solution_code, RenderModel};
use crate::puzzle_engine::slots::SlotTracker;
use crate::puzzle_engine::word_bank::WordBank;

/// Delay between a line being solved and the advance to the next line,
/// so the learner sees the completed line before it changes.
pub const COMPLETION_DELAY_MS: u64 = 500;

/// Delay between a blank being filled and its reveal signal, so the display
/// widget has mounted before the visual transition starts.
pub const REVEAL_DELAY_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    Reveal { blank_id: usize },
    Advance,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due_at: u64,
    generation: u64,
    action: TimerAction,
}

/// The drill state machine. Owns all mutable game state; the rendering
/// collaborators only read the projections it hands out.
#[derive(Debug)]
pub struct PuzzleEngine {
    catalog: PuzzleCatalog,
    rng: StdRng,
    current_line: usize,
    phase: Phase,
    previous_code: String,
    slots: SlotTracker,
    bank: WordBank,
    animation: AnimationCoordinator,
    now_ms: u64,
    generation: u64,
    timers: Vec<Timer>,
}

impl PuzzleEngine {
    /// Start a drill on line 0 with a freshly shuffled bank.
    ///
    /// `rng_seed: Some(u64)` makes every shuffle reproducible; `None` seeds
    /// from entropy.
    pub fn new(catalog: PuzzleCatalog, rng_seed: Option<u64>) -> Self {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let first = catalog.line(0);
        let slots = SlotTracker::new(first.blank_count());
        let bank = WordBank::new_shuffled(&first.words, &mut rng);
        let animation = AnimationCoordinator::new(first.blank_count());
        PuzzleEngine {
            catalog,
            rng,
            current_line: 0,
            phase: Phase::Playing,
            previous_code: String::new(),
            slots,
            bank,
            animation,
            now_ms: 0,
            generation: 0,
            timers: Vec::new(),
        }
    }

    // ── state machine transitions ───────────────────────────────────────────

    /// Place `word` into the first empty blank of the current line.
    ///
    /// Fills are always left-to-right: the learner chooses which word, the
    /// engine chooses the slot. Out-of-contract calls (drill finished, line
    /// full, word not in the bank) are silent no-ops.
    pub fn select_word(&mut self, word: &str) {
        if self.phase == Phase::Finished {
            trace!(word, "selection ignored: drill finished");
            return;
        }
        let Some(slot) = self.slots.first_empty() else {
            trace!(word, "selection ignored: line already full");
            return;
        };
        if !self.bank.contains(word) {
            trace!(word, "selection ignored: word not in bank");
            return;
        }

        self.slots.fill(slot, word);
        self.bank.remove(word);
        debug!(word, slot, line = self.current_line, "placed word");

        for blank_id in self.animation.observe(self.slots.values()) {
            self.schedule(REVEAL_DELAY_MS, TimerAction::Reveal { blank_id });
        }

        let line = self.catalog.line(self.current_line);
        if self.slots.matches_solution(&line.solution) {
            debug!(line = self.current_line, "line solved");
            self.schedule(COMPLETION_DELAY_MS, TimerAction::Advance);
        }
        // A wrong full fill simply stays: no rollback, no error. The bank is
        // a permutation of the solution, so completion is only reachable
        // through the correct tokens.
    }

    /// Advance the virtual clock by `elapsed_ms` and run every timer that
    /// comes due, in due-time order. Returns the effects for the host to
    /// apply (reveal signals, line transitions).
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<EngineEvent> {
        self.now_ms += elapsed_ms;
        let now = self.now_ms;

        let mut due: Vec<Timer> = Vec::new();
        self.timers.retain(|timer| {
            if timer.due_at <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|timer| timer.due_at);

        let mut events = Vec::new();
        for timer in due {
            if timer.generation != self.generation {
                trace!(action = ?timer.action, "dropped stale timer");
                continue;
            }
            match timer.action {
                TimerAction::Reveal { blank_id } => {
                    events.push(EngineEvent::RevealBlank { blank_id });
                }
                TimerAction::Advance => self.advance_line(&mut events),
            }
        }
        events
    }

    /// Return to line 0 with cleared blanks and a fresh shuffle.
    ///
    /// `previous_code` is deliberately left as-is so the transition display
    /// keeps its last snapshot. Pending timers are invalidated by the
    /// generation bump.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.current_line = 0;
        self.phase = Phase::Playing;
        let first = self.catalog.line(0);
        self.slots = SlotTracker::new(first.blank_count());
        self.bank = WordBank::new_shuffled(&first.words, &mut self.rng);
        self.animation.reset(first.blank_count());
        debug!("drill reset to line 0");
    }

    fn advance_line(&mut self, events: &mut Vec<EngineEvent>) {
        let line = self.catalog.line(self.current_line);
        self.previous_code = solution_code(line);
        self.generation += 1;

        if self.current_line + 1 < self.catalog.len() {
            self.current_line += 1;
            let next = self.catalog.line(self.current_line);
            self.slots = SlotTracker::new(next.blank_count());
            self.bank = WordBank::new_shuffled(&next.words, &mut self.rng);
            self.animation.reset(next.blank_count());
            debug!(line = self.current_line, "advanced to next line");
            events.push(EngineEvent::AdvancedTo { line_index: self.current_line });
        } else {
            self.phase = Phase::Finished;
            debug!("drill finished");
            events.push(EngineEvent::Finished);
        }
    }

    fn schedule(&mut self, delay_ms: u64, action: TimerAction) {
        self.timers.push(Timer {
            due_at: self.now_ms + delay_ms,
            generation: self.generation,
            action,
        });
    }

    // ── read-only projections ───────────────────────────────────────────────

    /// Everything the UI reads for one frame.
    pub fn render_model(&self) -> RenderModel {
        let line = self.catalog.line(self.current_line);
        RenderModel {
            code: code_with_placeholders(line, self.slots.values()),
            previous_code: self.previous_code.clone(),
            hint: line.hint.clone(),
            blanks: blank_views(line, self.slots.values()),
            word_bank: self.bank.words().to_vec(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_line_index(&self) -> usize {
        self.current_line
    }

    pub fn current_line(&self) -> &PuzzleLine {
        self.catalog.line(self.current_line)
    }

    /// Fully rendered code of the most recently completed line; empty at
    /// game start.
    pub fn previous_code(&self) -> &str {
        &self.previous_code
    }

    /// Slot values of the current line, indexed by blank id.
    pub fn slot_values(&self) -> &[String] {
        self.slots.values()
    }

    /// Remaining unplaced words for the current line, in bank order.
    pub fn word_bank(&self) -> &[String] {
        self.bank.words()
    }

    /// Timers scheduled but not yet due.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
