//! Keypad game runner (terminal simulator).
//!
//! Runs the fixed-period poll loop against simulated raw signals: terminal
//! keystrokes latch short taps on the button/matrix lines, and the keypad
//! model is drawn back as a colored key grid plus the two-line display.
//! The loop is strictly sequential: button edge first, then one
//! scan-and-handle cycle, then render and sleep out the tick.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use push_pon::core::{FeedbackSurface, GameSession};
use push_pon::input::{
    handle_key_event, should_quit, DebouncedButton, MatrixScanner, PadEvent, SimButton, SimMatrix,
};
use push_pon::term::{KeypadModel, PadView, TerminalRenderer, Viewport};
use push_pon::types::{GamePhase, LOOP_TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(seed(), KeypadModel::new());
    let mut button = DebouncedButton::new(SimButton::new());
    let mut scanner = MatrixScanner::new(SimMatrix::new());
    let view = PadView;

    session
        .feedback_mut()
        .show_text("Welcome to the game!!\nPush rotary!!");

    let clock = Instant::now();
    let tick = Duration::from_millis(LOOP_TICK_MS);

    loop {
        let tick_started = Instant::now();

        // Drain pending terminal events into the sim latches.
        while event::poll(Duration::from_secs(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(PadEvent::Rotary) => button.raw_mut().press(),
                    Some(PadEvent::Key(index)) => scanner.pins_mut().press(index),
                    None => {}
                }
            }
        }

        let now_ms = clock.elapsed().as_millis() as u64;

        // Rotary edge: starts an idle game, resets a running or finished one.
        if button.is_pressed() {
            button.wait_for_release();
            if session.is_started() {
                session.reset(now_ms);
            } else {
                session.start(now_ms);
            }
        }

        // One scan-and-handle cycle per tick.
        if session.phase() == GamePhase::InTurn {
            if let Some(key) = scanner.scan() {
                session.handle_key(key, now_ms);
            }
        }

        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(session.feedback(), Viewport::new(width, height));
        term.draw(&frame)?;

        if let Some(rest) = tick.checked_sub(tick_started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

/// Wall-clock seed so each run draws a different target sequence.
fn seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
