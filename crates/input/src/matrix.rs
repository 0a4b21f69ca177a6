//! Matrix keyboard scanning.

use push_pon_types::{KeyPos, COL_COUNT, ROW_COUNT};

/// Electrical access to the key matrix.
pub trait MatrixPins {
    /// Drive one column line active, or restore it to inactive.
    fn drive_column(&mut self, col: usize, active: bool);

    /// Read one row line. True while the row sees the driven column
    /// through a pressed switch.
    fn read_row(&self, row: usize) -> bool;
}

/// Column-major, first-match-wins scanner.
///
/// One call reports at most one key and leaves every column restored.
/// There is no debouncing here: while a key is held, every scan reports
/// the same position again. The layer above owns the one-event-per-press
/// discipline.
pub struct MatrixScanner<M: MatrixPins> {
    pins: M,
}

impl<M: MatrixPins> MatrixScanner<M> {
    pub fn new(pins: M) -> Self {
        Self { pins }
    }

    /// Sweep the matrix once and report the first pressed key, if any.
    pub fn scan(&mut self) -> Option<KeyPos> {
        for col in 0..COL_COUNT {
            self.pins.drive_column(col, true);
            for row in 0..ROW_COUNT {
                if self.pins.read_row(row) {
                    self.pins.drive_column(col, false);
                    return Some(row * COL_COUNT + col);
                }
            }
            self.pins.drive_column(col, false);
        }
        None
    }

    pub fn pins(&self) -> &M {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut M {
        &mut self.pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use push_pon_types::{key_index, KEY_COUNT};

    /// In-memory matrix: keys are pressed by flipping a flag, and row reads
    /// honor the drive/read protocol. Records every drive call.
    #[derive(Default)]
    struct FakePins {
        pressed: [bool; KEY_COUNT],
        driven: Option<usize>,
        drives: Vec<(usize, bool)>,
    }

    impl FakePins {
        fn with_pressed(keys: &[KeyPos]) -> Self {
            let mut pins = Self::default();
            for &key in keys {
                pins.pressed[key] = true;
            }
            pins
        }
    }

    impl MatrixPins for FakePins {
        fn drive_column(&mut self, col: usize, active: bool) {
            self.drives.push((col, active));
            self.driven = if active { Some(col) } else { None };
        }

        fn read_row(&self, row: usize) -> bool {
            match self.driven {
                Some(col) => self.pressed[key_index(row, col)],
                None => false,
            }
        }
    }

    #[test]
    fn idle_matrix_scans_none() {
        let mut scanner = MatrixScanner::new(FakePins::default());
        assert_eq!(scanner.scan(), None);

        // Every column was driven and restored, in order.
        let expected: Vec<(usize, bool)> = (0..COL_COUNT)
            .flat_map(|col| [(col, true), (col, false)])
            .collect();
        assert_eq!(scanner.pins().drives, expected);
    }

    #[test]
    fn a_pressed_key_reports_its_flattened_index() {
        let key = key_index(1, 2);
        let mut scanner = MatrixScanner::new(FakePins::with_pressed(&[key]));
        assert_eq!(scanner.scan(), Some(key));
    }

    #[test]
    fn every_position_is_reachable() {
        for key in 0..KEY_COUNT {
            let mut scanner = MatrixScanner::new(FakePins::with_pressed(&[key]));
            assert_eq!(scanner.scan(), Some(key));
        }
    }

    #[test]
    fn first_match_wins_in_column_major_order() {
        // Column 0 is swept before column 1, so the bottom-left key beats
        // the top key of the next column.
        let early = key_index(2, 0);
        let late = key_index(0, 1);
        let mut scanner = MatrixScanner::new(FakePins::with_pressed(&[early, late]));
        assert_eq!(scanner.scan(), Some(early));
    }

    #[test]
    fn lower_row_wins_within_one_column() {
        let early = key_index(0, 3);
        let late = key_index(2, 3);
        let mut scanner = MatrixScanner::new(FakePins::with_pressed(&[early, late]));
        assert_eq!(scanner.scan(), Some(early));
    }

    #[test]
    fn the_column_is_restored_after_a_hit() {
        let key = key_index(1, 2);
        let mut scanner = MatrixScanner::new(FakePins::with_pressed(&[key]));
        scanner.scan();

        assert_eq!(scanner.pins().driven, None);
        assert_eq!(scanner.pins().drives.last(), Some(&(2, false)));
        // Columns past the hit were never driven.
        assert!(!scanner.pins().drives.iter().any(|&(col, _)| col == 3));
    }
}
