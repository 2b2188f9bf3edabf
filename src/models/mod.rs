//! Core data models for jciphers
//!
//! This module contains the data structures the cipher engine works on:
//! normalized text, validated cipher parameters, substitution alphabets and
//! the per-session result history.

pub mod alphabet;
pub mod history;
pub mod keys;
pub mod text;

pub use alphabet::{CipherAlphabet, ALPHABET_LEN};
pub use history::{CipherParams, HistoryBuffer, HistoryEntry, HISTORY_CAPACITY};
pub use keys::{RailLevels, ShiftKey, VigenereKey};
pub use text::{normalize, prepare, validate, NormalizedText, TextField};
