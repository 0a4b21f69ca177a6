//! Rotary push-button debouncing.

use std::thread;
use std::time::Duration;

use push_pon_types::{DEBOUNCE_SETTLE_MS, RELEASE_POLL_MS};

/// Raw electrical level of the button line.
pub trait RawButton {
    /// True while the line reads active (button held down).
    fn is_active(&self) -> bool;
}

/// Settle-and-resample debouncer over a raw button line.
pub struct DebouncedButton<B: RawButton> {
    raw: B,
}

impl<B: RawButton> DebouncedButton<B> {
    pub fn new(raw: B) -> Self {
        Self { raw }
    }

    /// Debounced press check: sample, wait out the settle interval, sample
    /// again. Only two agreeing active reads count as a press.
    pub fn is_pressed(&self) -> bool {
        if !self.raw.is_active() {
            return false;
        }
        thread::sleep(Duration::from_millis(DEBOUNCE_SETTLE_MS));
        self.raw.is_active()
    }

    /// Block until the line reads inactive, polling at a fixed interval.
    ///
    /// No timeout and no cancellation: a button that never releases stalls
    /// the caller indefinitely.
    pub fn wait_for_release(&self) {
        while self.raw.is_active() {
            thread::sleep(Duration::from_millis(RELEASE_POLL_MS));
        }
    }

    pub fn raw(&self) -> &B {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut B {
        &mut self.raw
    }
}
