//! Game session state machine.
//!
//! Ties together target selection, scoring, level progression and win/lose
//! detection, and drives the feedback surface. Time is injected: every
//! externally triggered operation takes a `now_ms` value, so a session is
//! fully deterministic given a seed and an input sequence.

use push_pon_types::{
    GamePhase, KeyPos, LedColor, Outcome, CLEARS_PER_LEVEL, KEY_COUNT, MAX_LEVEL,
};

use crate::feedback::FeedbackSurface;
use crate::rng::SimpleRng;
use crate::targets::TargetSet;

/// One player's game, from the starting message to victory or defeat.
#[derive(Debug)]
pub struct GameSession<F: FeedbackSurface> {
    level: u32,
    success_count: u32,
    total_score: u64,
    targets: TargetSet,
    turn_started_at_ms: u64,
    phase: GamePhase,
    rng: SimpleRng,
    feedback: F,
}

impl<F: FeedbackSurface> GameSession<F> {
    /// Create a session with the given RNG seed. The game is idle until
    /// [`start`](Self::start) is called.
    pub fn new(seed: u32, feedback: F) -> Self {
        Self {
            level: 1,
            success_count: 0,
            total_score: 0,
            targets: TargetSet::new(),
            turn_started_at_ms: 0,
            phase: GamePhase::NotStarted,
            rng: SimpleRng::new(seed),
            feedback,
        }
    }

    /// Begin the game. Only valid while idle; a running or finished game
    /// ignores the call.
    pub fn start(&mut self, now_ms: u64) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.feedback.show_text("Starting Game!");
        self.phase = GamePhase::InTurn;
        self.begin_turn(now_ms);
    }

    /// Throw away the current game and begin a fresh one. Valid from any
    /// phase.
    pub fn reset(&mut self, now_ms: u64) {
        self.level = 1;
        self.success_count = 0;
        self.total_score = 0;
        self.phase = GamePhase::InTurn;
        self.begin_turn(now_ms);
    }

    /// Set up the next turn: blank the pad, draw `level` fresh targets,
    /// light them, and start the turn clock.
    fn begin_turn(&mut self, now_ms: u64) {
        self.feedback.disable_all();
        self.targets = TargetSet::draw(&mut self.rng, self.level as usize);
        self.feedback
            .light_keys(&self.targets.lit_keys(), LedColor::Target);
        self.feedback.show_text(&format!("Level {}", self.level));
        self.turn_started_at_ms = now_ms;
    }

    /// Handle one key-press edge. Returns whether the press was consumed.
    ///
    /// Callers deliver one event per physical press-and-release cycle; the
    /// session does not guard against a held key being re-reported.
    pub fn handle_key(&mut self, key: KeyPos, now_ms: u64) -> bool {
        if self.phase != GamePhase::InTurn {
            return false;
        }
        if key >= KEY_COUNT {
            // Scanner glitch, not a player mistake.
            return false;
        }

        if !self.targets.clear(key) {
            self.feedback.light_keys(&[key], LedColor::Wrong);
            self.feedback.show_text("Wrong key! Game Over!");
            self.feedback.show_result(self.total_score, false);
            self.end(Outcome::Defeat);
            return true;
        }

        self.feedback.turn_off_key(key);
        if !self.targets.is_empty() {
            return true;
        }

        // Turn cleared: score the elapsed time.
        let elapsed = now_ms.saturating_sub(self.turn_started_at_ms);
        self.total_score += elapsed;
        self.success_count += 1;

        if self.success_count >= CLEARS_PER_LEVEL && self.level == MAX_LEVEL {
            self.feedback.show_result(self.total_score, true);
            self.end(Outcome::Victory);
            return true;
        }
        if self.success_count >= CLEARS_PER_LEVEL {
            self.level += 1;
            self.success_count = 0;
        }
        self.begin_turn(now_ms);
        true
    }

    fn end(&mut self, outcome: Outcome) {
        self.phase = GamePhase::Ended(outcome);
        self.feedback.disable_all();
    }

    /// True once [`start`](Self::start) has run, including after the game
    /// ended.
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn success_count(&self) -> u32 {
        self.success_count
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }
}
