//! Cipher engine
//!
//! Pure encode/decode transformations over [`NormalizedText`]. Each codec
//! family lives in its own module; [`Cipher`] ties a family to parameters
//! that were already checked, so running it cannot fail.

pub mod caesar;
pub mod mlecchita;
pub mod rail_fence;
pub mod substitution;
pub mod vigenere;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CipherResult;
use crate::models::{
    prepare, CipherAlphabet, CipherParams, NormalizedText, RailLevels, ShiftKey, TextField,
    VigenereKey,
};

/// Which way a cipher is run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Top-level grouping shown on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherFamily {
    Transposition,
    Substitution,
}

impl CipherFamily {
    pub const ALL: [CipherFamily; 2] = [CipherFamily::Transposition, CipherFamily::Substitution];

    pub fn name(self) -> &'static str {
        match self {
            CipherFamily::Transposition => "Transposition",
            CipherFamily::Substitution => "Substitution",
        }
    }

    /// Ciphers belonging to this family, in menu order
    pub fn ciphers(self) -> &'static [CipherKind] {
        match self {
            CipherFamily::Transposition => &[CipherKind::RailFence],
            CipherFamily::Substitution => &[
                CipherKind::CaesarShift,
                CipherKind::KeyedCaesar,
                CipherKind::MlecchitaVikaalpa,
                CipherKind::Vigenere,
            ],
        }
    }
}

/// Every cipher the program knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    CaesarShift,
    KeyedCaesar,
    MlecchitaVikaalpa,
    Vigenere,
    RailFence,
}

impl CipherKind {
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::CaesarShift => "Caesar Shift",
            CipherKind::KeyedCaesar => "Caesar Shift (Keyword)",
            CipherKind::MlecchitaVikaalpa => "Mlecchita Vikaalpa (Roman)",
            CipherKind::Vigenere => "Vigenère",
            CipherKind::RailFence => "Rail Fence",
        }
    }

    pub fn family(self) -> CipherFamily {
        match self {
            CipherKind::RailFence => CipherFamily::Transposition,
            CipherKind::CaesarShift
            | CipherKind::KeyedCaesar
            | CipherKind::MlecchitaVikaalpa
            | CipherKind::Vigenere => CipherFamily::Substitution,
        }
    }

    /// Column header for the parameter in the history table
    pub fn param_label(self) -> &'static str {
        match self {
            CipherKind::CaesarShift => "SHIFTS",
            CipherKind::KeyedCaesar | CipherKind::Vigenere => "KEY",
            CipherKind::MlecchitaVikaalpa => "ALPHABET",
            CipherKind::RailFence => "LEVELS",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cipher together with its validated parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Caesar(ShiftKey),
    Keyword {
        key: NormalizedText,
        alphabet: CipherAlphabet,
    },
    MlecchitaClassic,
    Mlecchita(CipherAlphabet),
    Vigenere(VigenereKey),
    RailFence(RailLevels),
}

impl Cipher {
    /// Keyword Caesar from a raw, unvalidated key
    pub fn keyword(raw_key: &str) -> CipherResult<Self> {
        let key = prepare(raw_key, TextField::Key)?;
        let alphabet = CipherAlphabet::from_keyword(&key)?;
        Ok(Self::Keyword { key, alphabet })
    }

    /// Mlecchita Vikaalpa from a raw 26-letter alphabet
    pub fn mlecchita(raw_alphabet: &str) -> CipherResult<Self> {
        Ok(Self::Mlecchita(CipherAlphabet::parse(raw_alphabet)?))
    }

    pub fn vigenere(raw_key: &str) -> CipherResult<Self> {
        Ok(Self::Vigenere(VigenereKey::parse(raw_key)?))
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Caesar(_) => CipherKind::CaesarShift,
            Cipher::Keyword { .. } => CipherKind::KeyedCaesar,
            Cipher::MlecchitaClassic | Cipher::Mlecchita(_) => CipherKind::MlecchitaVikaalpa,
            Cipher::Vigenere(_) => CipherKind::Vigenere,
            Cipher::RailFence(_) => CipherKind::RailFence,
        }
    }

    /// Parameters recorded in the history alongside a result
    pub fn params(&self) -> CipherParams {
        match self {
            Cipher::Caesar(shift) => CipherParams::Shift(shift.get()),
            Cipher::Keyword { key, .. } => CipherParams::Key(key.to_string()),
            Cipher::MlecchitaClassic => {
                CipherParams::Alphabet(CipherAlphabet::mlecchita_classic().to_string())
            }
            Cipher::Mlecchita(alphabet) => CipherParams::Alphabet(alphabet.to_string()),
            Cipher::Vigenere(key) => CipherParams::Key(key.to_string()),
            Cipher::RailFence(levels) => CipherParams::Levels(levels.get()),
        }
    }

    pub fn apply(&self, direction: Direction, text: &NormalizedText) -> NormalizedText {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }

    pub fn encrypt(&self, text: &NormalizedText) -> NormalizedText {
        match self {
            Cipher::Caesar(shift) => caesar::encrypt(text, *shift),
            Cipher::Keyword { alphabet, .. } => substitution::encrypt(text, alphabet),
            Cipher::MlecchitaClassic => mlecchita::encrypt_classic(text),
            Cipher::Mlecchita(alphabet) => substitution::encrypt(text, alphabet),
            Cipher::Vigenere(key) => vigenere::encrypt(text, key),
            Cipher::RailFence(levels) => rail_fence::encrypt(text, *levels),
        }
    }

    pub fn decrypt(&self, text: &NormalizedText) -> NormalizedText {
        match self {
            Cipher::Caesar(shift) => caesar::decrypt(text, *shift),
            Cipher::Keyword { alphabet, .. } => substitution::decrypt(text, alphabet),
            Cipher::MlecchitaClassic => mlecchita::decrypt_classic(text),
            Cipher::Mlecchita(alphabet) => mlecchita::decrypt(text, alphabet),
            Cipher::Vigenere(key) => vigenere::decrypt(text, key),
            Cipher::RailFence(levels) => rail_fence::decrypt(text, *levels),
        }
    }
}
