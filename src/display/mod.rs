//! Display formatting for terminal output
//!
//! Provides utilities for formatting cipher results and session history
//! for terminal display.

pub mod history;
pub mod result;

pub use history::format_history;
pub use result::{format_generated_alphabet, format_result};
