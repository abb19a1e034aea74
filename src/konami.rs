//! Hidden key sequence detector (↑↑↓↓←→←→BA).

use std::collections::VecDeque;

/// Key codes of the Konami code, as reported by `KeyboardEvent.keyCode`.
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Rolling window over the most recent key codes.
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    sequence: Vec<u32>,
    window: VecDeque<u32>,
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::new(&KONAMI_SEQUENCE)
    }
}

impl SequenceDetector {
    pub fn new(sequence: &[u32]) -> Self {
        Self {
            sequence: sequence.to_vec(),
            window: VecDeque::with_capacity(sequence.len()),
        }
    }

    /// Feeds one key code. Returns `true` when the last keys match the
    /// sequence; the window is cleared after a match.
    pub fn push(&mut self, key_code: u32) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        self.window.push_back(key_code);
        if self.window.len() > self.sequence.len() {
            self.window.pop_front();
        }
        if self.window.iter().eq(self.sequence.iter()) {
            self.window.clear();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}
