//! jciphers - Interactive terminal playground for classical ciphers
//!
//! This library provides the cipher engine and the terminal front ends for
//! jciphers. It covers the Caesar shift (plain and keyword), Mlecchita
//! Vikaalpa substitution, the Vigenère cipher and the rail fence
//! transposition, all over the 26-letter Latin alphabet.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Normalized text, cipher parameters, alphabets and history
//! - `ciphers`: Pure encode/decode transformations
//! - `services`: Per-cipher sessions tying validation, codecs and history together
//! - `display`: Terminal formatting of results and history
//! - `menu`: The interactive menu
//! - `cli`: One-shot command handlers
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use jciphers::ciphers::{Cipher, CipherKind, Direction};
//! use jciphers::models::ShiftKey;
//! use jciphers::services::CipherSession;
//!
//! let mut session = CipherSession::new(CipherKind::CaesarShift);
//! let cipher = Cipher::Caesar(ShiftKey::new(3).unwrap());
//! let entry = session.process(Direction::Encrypt, "Hello", &cipher).unwrap();
//! assert_eq!(entry.message, "KHOOR");
//! ```

pub mod ciphers;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;
pub mod services;

pub use error::{CipherError, CipherResult};
