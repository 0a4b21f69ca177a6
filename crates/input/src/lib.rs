//! Input plumbing for the pad.
//!
//! The raw-signal contracts ([`RawButton`], [`MatrixPins`]) mirror what the
//! firmware would read off the GPIO lines. On top of them sit the settle-
//! and-resample button debouncer and the column-major matrix scanner. The
//! [`sim`] module provides the simulated signal sources the terminal
//! frontend latches keystrokes into, and [`map`] translates crossterm key
//! events onto the pad.

pub mod button;
pub mod map;
pub mod matrix;
pub mod sim;

pub use push_pon_types as types;

pub use button::{DebouncedButton, RawButton};
pub use map::{handle_key_event, should_quit, PadEvent};
pub use matrix::{MatrixPins, MatrixScanner};
pub use sim::{SimButton, SimMatrix};
