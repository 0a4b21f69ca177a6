//! Target-set bookkeeping for a single turn.

use arrayvec::ArrayVec;

use push_pon_types::{KeyPos, KEY_COUNT};

use crate::rng::SimpleRng;

/// The key positions that still have to be hit this turn.
///
/// Fixed-capacity membership set over the flattened key space plus a
/// remaining counter, so inserts, clears and queries are O(1).
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    lit: [bool; KEY_COUNT],
    remaining: usize,
}

impl TargetSet {
    pub fn new() -> Self {
        Self {
            lit: [false; KEY_COUNT],
            remaining: 0,
        }
    }

    /// Draw `count` distinct positions uniformly at random, redrawing on
    /// collision. The count is clamped to the key space so the sampling
    /// loop always terminates.
    pub fn draw(rng: &mut SimpleRng, count: usize) -> Self {
        let count = count.min(KEY_COUNT);
        let mut set = Self::new();
        while set.remaining < count {
            let mut key = rng.next_below(KEY_COUNT);
            while set.lit[key] {
                key = rng.next_below(KEY_COUNT);
            }
            set.lit[key] = true;
            set.remaining += 1;
        }
        set
    }

    pub fn contains(&self, key: KeyPos) -> bool {
        key < KEY_COUNT && self.lit[key]
    }

    /// Clear a position; returns whether it was lit.
    pub fn clear(&mut self, key: KeyPos) -> bool {
        if !self.contains(key) {
            return false;
        }
        self.lit[key] = false;
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Ascending list of lit positions, ready for an LED command.
    pub fn lit_keys(&self) -> ArrayVec<KeyPos, KEY_COUNT> {
        self.lit
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(key, _)| key)
            .collect()
    }
}
