//! Core game logic - pure, deterministic, and testable.
//!
//! This crate owns the game rules and nothing else. It never touches a pin,
//! an LED strip, or a display: feedback goes through the [`FeedbackSurface`]
//! trait, randomness comes from a seeded generator, and time enters as
//! explicit `now_ms` values. The same seed and the same inputs replay the
//! same game, which the test suites and benches rely on.
//!
//! # Module Structure
//!
//! - [`session`]: the [`GameSession`] state machine (levels, scoring, turn
//!   lifecycle, win/lose detection)
//! - [`targets`]: fixed-capacity set of key positions still to hit
//! - [`rng`]: seeded LCG and rejection-sampled target selection
//! - [`feedback`]: the command surface the session drives
//!
//! # Game Rules
//!
//! - A turn lights `level` random distinct keys; hitting them all clears the
//!   turn and scores the elapsed milliseconds.
//! - Five cleared turns advance the level; every clear redraws a fresh
//!   random set, so a level is five independent turns of the same size.
//! - Clearing the fifth turn at level 10 wins; any wrong key loses.

pub mod feedback;
pub mod rng;
pub mod session;
pub mod targets;

pub use push_pon_types as types;

pub use feedback::FeedbackSurface;
pub use rng::SimpleRng;
pub use session::GameSession;
pub use targets::TargetSet;
