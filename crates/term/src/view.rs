//! PadView: maps the simulated keypad state into a terminal frame.
//!
//! Pure (no I/O), so layout and coloring are unit-testable.

use push_pon_types::{key_index, LedColor, COL_COUNT, ROW_COUNT, ROW_LEGENDS};

use crate::fb::{Frame, Glyph, Rgb};
use crate::keypad::KeypadModel;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// Key block geometry: 6x3 cells with a one-cell gap.
const KEY_W: u16 = 6;
const KEY_H: u16 = 3;
const KEY_GAP: u16 = 1;

const PAD_W: u16 = COL_COUNT as u16 * (KEY_W + KEY_GAP) - KEY_GAP;
const KEYS_H: u16 = ROW_COUNT as u16 * (KEY_H + KEY_GAP) - KEY_GAP;
// Display border + two text lines + border.
const DISPLAY_H: u16 = 4;
const CONTENT_H: u16 = DISPLAY_H + 1 + KEYS_H + 2;

const TEXT: Rgb = Rgb(220, 220, 220);
const DIM: Rgb = Rgb(110, 110, 122);
const BORDER: Rgb = Rgb(150, 150, 160);
const BG: Rgb = Rgb(0, 0, 0);
const KEY_IDLE_FG: Rgb = Rgb(150, 150, 160);
const KEY_IDLE_BG: Rgb = Rgb(38, 38, 46);
const TARGET_BG: Rgb = Rgb(0, 168, 64);
const WRONG_BG: Rgb = Rgb(204, 36, 36);
const LIT_FG: Rgb = Rgb(10, 10, 10);

fn led_style(led: Option<LedColor>) -> (Rgb, Rgb) {
    match led {
        None => (KEY_IDLE_FG, KEY_IDLE_BG),
        Some(LedColor::Target) => (LIT_FG, TARGET_BG),
        Some(LedColor::Wrong) => (LIT_FG, WRONG_BG),
    }
}

/// Renders the display panel, the 3x4 key grid, and a help footer,
/// centered in the viewport.
#[derive(Debug, Default)]
pub struct PadView;

impl PadView {
    pub fn render(&self, pad: &KeypadModel, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(pad, &mut frame);
        frame
    }

    pub fn render_into(&self, pad: &KeypadModel, frame: &mut Frame) {
        let x0 = frame.width().saturating_sub(PAD_W) / 2;
        let y0 = frame.height().saturating_sub(CONTENT_H) / 2;

        self.draw_display(pad, frame, x0, y0);
        self.draw_keys(pad, frame, x0, y0 + DISPLAY_H + 1);
        frame.print(x0, y0 + CONTENT_H - 1, "Enter: rotary   Esc: quit", DIM, BG);
    }

    fn draw_display(&self, pad: &KeypadModel, frame: &mut Frame, x: u16, y: u16) {
        draw_border(frame, x, y, PAD_W, DISPLAY_H);
        for (i, line) in pad.display_lines().iter().enumerate() {
            frame.print(x + 2, y + 1 + i as u16, line, TEXT, BG);
        }
    }

    fn draw_keys(&self, pad: &KeypadModel, frame: &mut Frame, x0: u16, y0: u16) {
        for row in 0..ROW_COUNT {
            for col in 0..COL_COUNT {
                let key = key_index(row, col);
                let (fg, bg) = led_style(pad.led(key));
                let x = x0 + col as u16 * (KEY_W + KEY_GAP);
                let y = y0 + row as u16 * (KEY_H + KEY_GAP);
                frame.fill(x, y, KEY_W, KEY_H, Glyph::styled(' ', fg, bg));

                let legend = ROW_LEGENDS[row].as_bytes()[col] as char;
                frame.put(
                    x + KEY_W / 2,
                    y + KEY_H / 2,
                    Glyph::styled(legend, fg, bg).bold(),
                );
            }
        }
    }
}

fn draw_border(frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
    let line = |ch| Glyph::styled(ch, BORDER, BG);
    for dx in 1..w.saturating_sub(1) {
        frame.put(x + dx, y, line('─'));
        frame.put(x + dx, y + h - 1, line('─'));
    }
    for dy in 1..h.saturating_sub(1) {
        frame.put(x, y + dy, line('│'));
        frame.put(x + w - 1, y + dy, line('│'));
    }
    frame.put(x, y, line('┌'));
    frame.put(x + w - 1, y, line('┐'));
    frame.put(x, y + h - 1, line('└'));
    frame.put(x + w - 1, y + h - 1, line('┘'));
}
