//! Terminal simulator for the pad hardware.
//!
//! [`KeypadModel`] stands in for the LED strip and the little display
//! behind the core's `FeedbackSurface` contract. [`PadView`] renders that
//! model into a character [`Frame`] (pure, unit-testable), and
//! [`TerminalRenderer`] flushes frames to a real terminal.

pub mod fb;
pub mod keypad;
pub mod renderer;
pub mod view;

pub use push_pon_core as core;
pub use push_pon_types as types;

pub use fb::{Frame, Glyph, Rgb};
pub use keypad::KeypadModel;
pub use renderer::TerminalRenderer;
pub use view::{PadView, Viewport};
