//! Debouncer and scanner contracts over scripted fakes and the sim lines.

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use push_pon::input::{
    DebouncedButton, MatrixPins, MatrixScanner, RawButton, SimButton, SimMatrix,
};
use push_pon::types::{key_index, COL_COUNT, SIM_TAP_MS};

/// Raw line that reads active for the first `active_reads` samples.
struct FadingLine {
    active_reads: Cell<u32>,
}

impl FadingLine {
    fn new(active_reads: u32) -> Self {
        Self {
            active_reads: Cell::new(active_reads),
        }
    }
}

impl RawButton for FadingLine {
    fn is_active(&self) -> bool {
        let left = self.active_reads.get();
        if left == 0 {
            return false;
        }
        self.active_reads.set(left - 1);
        true
    }
}

#[test]
fn a_one_sample_glitch_is_not_a_press() {
    let button = DebouncedButton::new(FadingLine::new(1));
    assert!(!button.is_pressed());
}

#[test]
fn a_held_press_survives_the_settle_interval() {
    let button = DebouncedButton::new(FadingLine::new(2));
    assert!(button.is_pressed());
}

#[test]
fn wait_for_release_outlasts_the_press() {
    let button = DebouncedButton::new(FadingLine::new(5));
    button.wait_for_release();
    assert!(!button.raw().is_active());
}

#[test]
fn sim_button_tap_is_a_full_press_and_release_cycle() {
    let mut button = DebouncedButton::new(SimButton::new());
    assert!(!button.is_pressed());

    button.raw_mut().press();
    assert!(button.is_pressed());
    // Returns once the tap expires; bounded by the tap duration.
    button.wait_for_release();
    assert!(!button.is_pressed());
}

#[test]
fn sim_key_tap_scans_exactly_while_held() {
    let key = key_index(1, 3);
    let mut scanner = MatrixScanner::new(SimMatrix::new());
    assert_eq!(scanner.scan(), None);

    scanner.pins_mut().press(key);
    assert_eq!(scanner.scan(), Some(key));

    thread::sleep(Duration::from_millis(SIM_TAP_MS + 20));
    assert_eq!(scanner.scan(), None);
}

/// Pin fake where several keys can be held at once.
#[derive(Default)]
struct HeldKeys {
    held: Vec<usize>,
    driven: Option<usize>,
}

impl MatrixPins for HeldKeys {
    fn drive_column(&mut self, col: usize, active: bool) {
        self.driven = if active { Some(col) } else { None };
    }

    fn read_row(&self, row: usize) -> bool {
        self.driven
            .is_some_and(|col| self.held.contains(&key_index(row, col)))
    }
}

#[test]
fn scan_reports_the_first_key_in_column_order() {
    let mut scanner = MatrixScanner::new(HeldKeys {
        held: vec![key_index(0, 2), key_index(2, 1)],
        driven: None,
    });
    // Column 1 is swept before column 2.
    assert_eq!(scanner.scan(), Some(key_index(2, 1)));
}

#[test]
fn a_held_key_reports_on_every_scan() {
    let key = key_index(0, 0);
    let mut scanner = MatrixScanner::new(HeldKeys {
        held: vec![key],
        driven: None,
    });
    assert_eq!(scanner.scan(), Some(key));
    assert_eq!(scanner.scan(), Some(key));
}

#[test]
fn scan_leaves_no_column_driven() {
    let mut scanner = MatrixScanner::new(HeldKeys {
        held: vec![key_index(2, COL_COUNT - 1)],
        driven: None,
    });
    scanner.scan();
    assert_eq!(scanner.pins().driven, None);

    let mut idle = MatrixScanner::new(HeldKeys::default());
    idle.scan();
    assert_eq!(idle.pins().driven, None);
}
