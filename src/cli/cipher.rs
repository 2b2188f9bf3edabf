//! Cipher CLI commands
//!
//! One-shot encryption and decryption from the command line.

use clap::Subcommand;
use serde::Serialize;

use crate::ciphers::{Cipher, CipherKind, Direction};
use crate::display::{format_generated_alphabet, format_result};
use crate::error::{CipherError, CipherResult};
use crate::models::{CipherAlphabet, CipherParams, HistoryEntry, RailLevels, ShiftKey};
use crate::services::CipherSession;

/// Cipher subcommands
#[derive(Subcommand)]
pub enum CipherCommands {
    /// Caesar shift by a fixed number of places
    Caesar {
        /// Message text (spaces and punctuation are dropped)
        #[arg(required = true)]
        message: Vec<String>,
        /// Places to shift (1-25)
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,
    },
    /// Caesar shift over a keyword alphabet
    Keyword {
        #[arg(required = true)]
        message: Vec<String>,
        /// Keyword used to build the cipher alphabet
        #[arg(short, long)]
        key: String,
    },
    /// Mlecchita Vikaalpa (Roman) substitution
    Mlecchita {
        #[arg(required = true)]
        message: Vec<String>,
        /// 26-letter cipher alphabet (a random one is generated when encrypting without it)
        #[arg(short, long, conflicts_with = "classic")]
        alphabet: Option<String>,
        /// Use the fixed classic alphabet
        #[arg(long)]
        classic: bool,
    },
    /// Vigenère polyalphabetic substitution
    Vigenere {
        #[arg(required = true)]
        message: Vec<String>,
        /// Repeating cipher key
        #[arg(short, long)]
        key: String,
    },
    /// Rail fence transposition
    #[command(alias = "rail")]
    RailFence {
        #[arg(required = true)]
        message: Vec<String>,
        /// Number of rails (2-99)
        #[arg(short, long, allow_negative_numbers = true)]
        levels: i64,
    },
}

/// Machine-readable result printed with `--json`
#[derive(Debug, Serialize)]
pub struct CipherOutput {
    pub cipher: CipherKind,
    pub direction: Direction,
    pub message: String,
    pub params: CipherParams,
}

/// Handle an encrypt or decrypt command
pub fn handle_cipher_command(
    direction: Direction,
    cmd: CipherCommands,
    json: bool,
) -> CipherResult<()> {
    let (entry, generated, kind) = run_cipher_command(direction, cmd)?;

    if json {
        let output = CipherOutput {
            cipher: kind,
            direction,
            message: entry.message,
            params: entry.params,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(alphabet) = generated {
        println!("{}", format_generated_alphabet(&alphabet));
    }
    println!("{}", format_result(direction, &entry));

    Ok(())
}

/// Run a command, returning the result and any generated alphabet
pub fn run_cipher_command(
    direction: Direction,
    cmd: CipherCommands,
) -> CipherResult<(HistoryEntry, Option<CipherAlphabet>, CipherKind)> {
    let (cipher, message) = match cmd {
        CipherCommands::Caesar { message, shift } => {
            (Cipher::Caesar(ShiftKey::new(shift)?), message)
        }
        CipherCommands::Keyword { message, key } => (Cipher::keyword(&key)?, message),
        CipherCommands::Vigenere { message, key } => (Cipher::vigenere(&key)?, message),
        CipherCommands::RailFence { message, levels } => {
            (Cipher::RailFence(RailLevels::new(levels)?), message)
        }
        CipherCommands::Mlecchita {
            message,
            alphabet,
            classic,
        } => {
            let message = message.join(" ");
            if classic {
                (Cipher::MlecchitaClassic, vec![message])
            } else if let Some(alphabet) = alphabet {
                (Cipher::mlecchita(&alphabet)?, vec![message])
            } else if direction == Direction::Encrypt {
                let mut session = CipherSession::new(CipherKind::MlecchitaVikaalpa);
                let (entry, alphabet) =
                    session.encrypt_random_mlecchita(&message, &mut rand::thread_rng())?;
                return Ok((entry, Some(alphabet), CipherKind::MlecchitaVikaalpa));
            } else {
                return Err(CipherError::invalid_parameter(
                    "Decrypting Mlecchita Vikaalpa needs --alphabet or --classic",
                ));
            }
        }
    };

    let kind = cipher.kind();
    let mut session = CipherSession::new(kind);
    let entry = session.process(direction, &message.join(" "), &cipher)?;
    Ok((entry, None, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_caesar_command() {
        let cmd = CipherCommands::Caesar {
            message: words("hello"),
            shift: 3,
        };
        let (entry, generated, kind) = run_cipher_command(Direction::Encrypt, cmd).unwrap();
        assert_eq!(entry.message, "KHOOR");
        assert!(generated.is_none());
        assert_eq!(kind, CipherKind::CaesarShift);
    }

    #[test]
    fn test_caesar_command_rejects_shift() {
        let cmd = CipherCommands::Caesar {
            message: words("hello"),
            shift: 26,
        };
        let err = run_cipher_command(Direction::Encrypt, cmd).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_multi_word_message() {
        let cmd = CipherCommands::RailFence {
            message: words("we are discovered flee at once"),
            levels: 3,
        };
        let (entry, _, _) = run_cipher_command(Direction::Encrypt, cmd).unwrap();
        assert_eq!(entry.message, "WRIORFEOEEESVELANADCEDETC");
    }

    #[test]
    fn test_vigenere_command() {
        let cmd = CipherCommands::Vigenere {
            message: words("MYGPQWFGSOIS"),
            key: "LEMON".into(),
        };
        let (entry, _, _) = run_cipher_command(Direction::Decrypt, cmd).unwrap();
        assert_eq!(entry.message, "ATTACKATDAWN");
        assert_eq!(entry.params, CipherParams::Key("LEMON".into()));
    }

    #[test]
    fn test_mlecchita_random_returns_alphabet() {
        let cmd = CipherCommands::Mlecchita {
            message: words("hello there"),
            alphabet: None,
            classic: false,
        };
        let (entry, generated, _) = run_cipher_command(Direction::Encrypt, cmd).unwrap();
        let alphabet = generated.unwrap();

        let cmd = CipherCommands::Mlecchita {
            message: vec![entry.message],
            alphabet: Some(alphabet.to_string()),
            classic: false,
        };
        let (decrypted, _, _) = run_cipher_command(Direction::Decrypt, cmd).unwrap();
        assert_eq!(decrypted.message, "HELLOTHERE");
    }

    #[test]
    fn test_mlecchita_decrypt_needs_alphabet() {
        let cmd = CipherCommands::Mlecchita {
            message: words("BURRQ"),
            alphabet: None,
            classic: false,
        };
        let err = run_cipher_command(Direction::Decrypt, cmd).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_message_digits_rejected() {
        let cmd = CipherCommands::Keyword {
            message: words("HELLO123"),
            key: "ZEBRA".into(),
        };
        let err = run_cipher_command(Direction::Encrypt, cmd).unwrap_err();
        assert!(err.is_unsupported_character());
    }
}
