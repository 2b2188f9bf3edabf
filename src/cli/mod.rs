//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod cipher;
pub mod config;

pub use cipher::{handle_cipher_command, CipherCommands};
pub use config::handle_config_command;
