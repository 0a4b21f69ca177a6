//! Simulated raw signals for the terminal frontend.
//!
//! A terminal keystroke has no release event, so a press latches the line
//! for [`SIM_TAP_MS`] of wall-clock time and then reads as released. The
//! tap is shorter than one poll period, which makes a keystroke behave like
//! a short press-and-release cycle consumed by exactly one loop iteration.

use std::time::{Duration, Instant};

use push_pon_types::{key_col, key_row, KeyPos, SIM_TAP_MS};

use crate::button::RawButton;
use crate::matrix::MatrixPins;

fn tap_deadline() -> Instant {
    Instant::now() + Duration::from_millis(SIM_TAP_MS)
}

/// Simulated rotary button line.
#[derive(Debug, Default)]
pub struct SimButton {
    held_until: Option<Instant>,
}

impl SimButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch one tap.
    pub fn press(&mut self) {
        self.held_until = Some(tap_deadline());
    }
}

impl RawButton for SimButton {
    fn is_active(&self) -> bool {
        self.held_until.is_some_and(|until| Instant::now() < until)
    }
}

/// Simulated key matrix honoring the drive/read protocol of the real pad:
/// a row reads active only while its key's column is the driven one.
#[derive(Debug, Default)]
pub struct SimMatrix {
    pressed: Option<(KeyPos, Instant)>,
    driven_col: Option<usize>,
}

impl SimMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch one tap on a key position.
    pub fn press(&mut self, key: KeyPos) {
        self.pressed = Some((key, tap_deadline()));
    }

    fn held_key(&self) -> Option<KeyPos> {
        self.pressed
            .filter(|&(_, until)| Instant::now() < until)
            .map(|(key, _)| key)
    }
}

impl MatrixPins for SimMatrix {
    fn drive_column(&mut self, col: usize, active: bool) {
        self.driven_col = if active { Some(col) } else { None };
    }

    fn read_row(&self, row: usize) -> bool {
        match (self.held_key(), self.driven_col) {
            (Some(key), Some(col)) => key_row(key) == row && key_col(key) == col,
            _ => false,
        }
    }
}
