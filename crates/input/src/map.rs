//! Key mapping from terminal events to simulated pad signals.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use push_pon_types::{key_index, KeyPos, ROW_LEGENDS};

/// One simulated hardware event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadEvent {
    /// A tap on one of the matrix keys.
    Key(KeyPos),
    /// A tap on the rotary push-button.
    Rotary,
}

/// Map a terminal key event onto the pad.
///
/// The layout mirrors the physical grid on the left of a qwerty keyboard
/// (`1234` / `qwer` / `asdf`), with Enter or Space as the rotary button.
pub fn handle_key_event(key: KeyEvent) -> Option<PadEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(PadEvent::Rotary),
        KeyCode::Char(ch) => pad_key(ch).map(PadEvent::Key),
        _ => None,
    }
}

fn pad_key(ch: char) -> Option<KeyPos> {
    let ch = ch.to_ascii_lowercase();
    for (row, legend) in ROW_LEGENDS.iter().enumerate() {
        if let Some(col) = legend.find(ch) {
            return Some(key_index(row, col));
        }
    }
    None
}

/// Check if the key should quit the simulator.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
