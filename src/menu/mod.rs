//! Interactive terminal menu
//!
//! Lets a user pick a cipher family, then a cipher, then encrypt or decrypt
//! messages while viewing the session's recent results.

pub mod prompt;
pub mod screens;

pub use prompt::Prompter;
pub use screens::{CipherAction, Menu};

use std::io;

use crate::config::Settings;
use crate::error::CipherResult;

/// Run the menu on the process's stdin and stdout
pub fn run_interactive(settings: &Settings) -> CipherResult<()> {
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout(), settings.clear_screen);
    Menu::new(prompter, settings.show_banner).run()
}
