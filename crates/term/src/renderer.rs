//! TerminalRenderer: flushes frames to a real terminal.
//!
//! The simulator frame is small and redrawn every poll tick, so drawing is
//! a full-frame encode; runs of identically styled cells share one color
//! change.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Frame, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame(frame, &mut self.buf)?;
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw as queued crossterm commands.
fn encode_frame(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<(Rgb, Rgb, bool)> = None;

    for (y, row) in frame.rows().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        for glyph in row {
            let want = (glyph.fg, glyph.bg, glyph.bold);
            if style != Some(want) {
                out.queue(SetAttribute(if glyph.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                }))?;
                out.queue(SetForegroundColor(to_color(glyph.fg)))?;
                out.queue(SetBackgroundColor(to_color(glyph.bg)))?;
                style = Some(want);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}
