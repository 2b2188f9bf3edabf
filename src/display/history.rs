//! History display formatting
//!
//! Formats a session's recent results as a terminal table.

use chrono::Local;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::ciphers::CipherKind;
use crate::models::HistoryBuffer;

/// Format a session history as a table, newest first
pub fn format_history(kind: CipherKind, history: &HistoryBuffer) -> String {
    if history.is_empty() {
        return "No entries.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["#", "MESSAGE", kind.param_label(), "TIME"]);

    for (index, entry) in history.entries().enumerate() {
        let time = entry
            .recorded_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string();

        builder.push_record([
            (index + 1).to_string(),
            entry.message.clone(),
            entry.params.to_string(),
            time,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CipherParams, HistoryEntry};

    #[test]
    fn test_empty_history() {
        let history = HistoryBuffer::new();
        assert_eq!(format_history(CipherKind::CaesarShift, &history), "No entries.");
    }

    #[test]
    fn test_history_table() {
        let mut history = HistoryBuffer::new();
        history.record(HistoryEntry::new("KHOOR", CipherParams::Shift(3)));
        history.record(HistoryEntry::new("HELLO", CipherParams::Shift(3)));

        let table = format_history(CipherKind::CaesarShift, &history);
        assert!(table.contains("SHIFTS"));
        assert!(table.contains("MESSAGE"));

        let hello = table.find("HELLO").unwrap();
        let khoor = table.find("KHOOR").unwrap();
        assert!(hello < khoor, "newest entry must come first");
    }

    #[test]
    fn test_history_uses_cipher_label() {
        let mut history = HistoryBuffer::new();
        history.record(HistoryEntry::new("WRIO", CipherParams::Levels(3)));

        let table = format_history(CipherKind::RailFence, &history);
        assert!(table.contains("LEVELS"));
        assert!(!table.contains("SHIFTS"));
    }
}
