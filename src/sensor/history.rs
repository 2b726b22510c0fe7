//! Double-length circular history buffer.
//!
//! Every sample is written to two slots, `cursor` and `cursor + N`, so the
//! flat range starting at the current cursor is always a contiguous,
//! chronologically ordered view of the last N samples. The presentation
//! stage never does modulo arithmetic or copies.

use super::Vec3;

/// Fixed-capacity ring of the most recent N samples.
///
/// Backing store holds `2 * N` slots, zeroed at construction, so `window()`
/// is valid before any push. Each push overwrites exactly two slots and
/// advances the cursor mod N.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    slots: Vec<Vec3>,
    cursor: usize,
    len: usize,
}

impl HistoryBuffer {
    /// Create a buffer tracking the last `len` samples. Capacity is fixed;
    /// no reallocation ever happens after construction.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "history length must be non-zero");
        Self {
            slots: vec![Vec3::ZERO; len * 2],
            cursor: 0,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Record one sample. O(1), never fails.
    pub fn push(&mut self, sample: Vec3) {
        self.slots[self.cursor] = sample;
        self.slots[self.cursor + self.len] = sample;
        self.cursor = (self.cursor + 1) % self.len;
    }

    /// The last N samples as one contiguous slice, oldest first, newest at
    /// index `N - 1`. Zero-padded until N pushes have happened.
    pub fn window(&self) -> &[Vec3] {
        &self.slots[self.cursor..self.cursor + self.len]
    }

    /// The most recently pushed sample (zero before the first push).
    pub fn latest(&self) -> Vec3 {
        self.window()[self.len - 1]
    }
}
