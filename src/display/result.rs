//! Result display formatting

use crate::ciphers::Direction;
use crate::models::{CipherAlphabet, HistoryEntry};

/// Format the outcome of a single encrypt or decrypt call
pub fn format_result(direction: Direction, entry: &HistoryEntry) -> String {
    format!("Your {}ed message is: {}", direction, entry.message)
}

pub fn format_generated_alphabet(alphabet: &CipherAlphabet) -> String {
    format!("Generated cipher alphabet: {}", alphabet)
}
