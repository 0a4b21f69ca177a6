//! Simulated keypad hardware: the LED array and the display buffer.
//!
//! This is the `FeedbackSurface` the session drives in the simulator. It
//! holds observable state only; the view reads it and the game never looks
//! back into it.

use push_pon_core::FeedbackSurface;
use push_pon_types::{KeyPos, LedColor, KEY_COUNT};

/// Display line capacity. The device's little OLED fits two short lines.
pub const DISPLAY_LINES: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct KeypadModel {
    leds: [Option<LedColor>; KEY_COUNT],
    lines: [String; DISPLAY_LINES],
}

impl KeypadModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn led(&self, key: KeyPos) -> Option<LedColor> {
        self.leds.get(key).copied().flatten()
    }

    pub fn lit_count(&self) -> usize {
        self.leds.iter().filter(|led| led.is_some()).count()
    }

    pub fn display_lines(&self) -> &[String] {
        &self.lines
    }

    fn set_text(&mut self, text: &str) {
        let mut lines = text.lines();
        for slot in self.lines.iter_mut() {
            *slot = lines.next().unwrap_or("").to_string();
        }
    }
}

impl FeedbackSurface for KeypadModel {
    fn show_text(&mut self, text: &str) {
        self.set_text(text);
    }

    fn light_keys(&mut self, keys: &[KeyPos], color: LedColor) {
        for &key in keys {
            if key < KEY_COUNT {
                self.leds[key] = Some(color);
            }
        }
    }

    fn turn_off_key(&mut self, key: KeyPos) {
        if key < KEY_COUNT {
            self.leds[key] = None;
        }
    }

    fn disable_all(&mut self) {
        self.leds = [None; KEY_COUNT];
    }

    fn show_result(&mut self, total_score: u64, success: bool) {
        let headline = if success { "Congratulations!" } else { "Game Over" };
        self.set_text(&format!("{headline}\nTotal Score: {total_score}"));
    }
}
