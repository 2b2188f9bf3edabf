//! Per-session history of cipher results
//!
//! Holds the most recent results newest first. Nothing here is ever
//! written to disk.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept by a [`HistoryBuffer`]
pub const HISTORY_CAPACITY: usize = 15;

/// The parameters a result was produced with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CipherParams {
    Shift(u8),
    Key(String),
    Alphabet(String),
    Levels(usize),
}

impl fmt::Display for CipherParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherParams::Shift(places) => write!(f, "{}", places),
            CipherParams::Key(key) => write!(f, "{}", key),
            CipherParams::Alphabet(alphabet) => write!(f, "{}", alphabet),
            CipherParams::Levels(levels) => write!(f, "{}", levels),
        }
    }
}

/// One processed message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The encrypted or decrypted output
    pub message: String,
    pub params: CipherParams,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(message: impl Into<String>, params: CipherParams) -> Self {
        Self {
            message: message.into(),
            params,
            recorded_at: Utc::now(),
        }
    }
}

/// Fixed-capacity, newest-first buffer of [`HistoryEntry`]
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Insert at the front, evicting the oldest entry when full
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
