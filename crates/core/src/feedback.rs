//! The command surface the game drives.
//!
//! Implementors own the LEDs and the display; they hold no game logic.
//! Every operation is synchronous and assumed to succeed at this layer;
//! hardware faults are not modeled here.

use push_pon_types::{KeyPos, LedColor};

pub trait FeedbackSurface {
    /// Show a short message. The display fits about two lines; extra lines
    /// may be dropped.
    fn show_text(&mut self, text: &str);

    /// Light the given key positions in one color.
    fn light_keys(&mut self, keys: &[KeyPos], color: LedColor);

    /// Extinguish a single key's light.
    fn turn_off_key(&mut self, key: KeyPos);

    /// Extinguish every light.
    fn disable_all(&mut self);

    /// Show the end-of-game summary.
    fn show_result(&mut self, total_score: u64, success: bool);
}
