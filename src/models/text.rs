//! Text validation and normalization
//!
//! Raw user input is validated first, then normalized into a
//! [`NormalizedText`] made only of the letters `A`..=`Z`. Every codec works
//! on normalized text, so alphabet arithmetic never sees anything else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, CipherResult};

/// Which piece of user input is being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Message,
    Key,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextField::Message => write!(f, "message"),
            TextField::Key => write!(f, "key"),
        }
    }
}

/// Uppercase text containing only `A`..=`Z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Build from raw letters without validating first
    ///
    /// Every character that is not an ASCII letter is dropped.
    pub fn new(raw: &str) -> Self {
        normalize(raw)
    }

    /// Build from bytes already known to be `A`..=`Z`
    pub(crate) fn from_upper_bytes(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.iter().all(u8::is_ascii_uppercase));
        Self(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Alphabet positions (A=0 .. Z=25) of every letter
    pub fn positions(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'A')
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Only text that is already normalized is accepted
impl TryFrom<String> for NormalizedText {
    type Error = CipherError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        validate(&raw, TextField::Message)?;
        if let Some(character) = raw.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(CipherError::invalid_parameter(format!(
                "Normalized text holds only A-Z (found {:?})",
                character
            )));
        }
        Ok(Self(raw))
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

/// Check raw input before it is normalized
///
/// Spaces and ASCII punctuation are accepted (they are stripped later), as
/// are Latin letters in either case. The first digit or other character
/// aborts the whole check.
pub fn validate(raw: &str, field: TextField) -> CipherResult<()> {
    for character in raw.chars() {
        if character == ' ' || character.is_ascii_punctuation() {
            continue;
        }
        if character.is_ascii_digit() {
            return Err(CipherError::UnsupportedDigit { field, character });
        }
        if !character.is_ascii_alphabetic() {
            return Err(CipherError::UnsupportedCharacter { field, character });
        }
    }
    Ok(())
}

/// Strip every non-letter and uppercase the rest
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText(
        raw.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect(),
    )
}

/// Validate then normalize in one step
pub fn prepare(raw: &str, field: TextField) -> CipherResult<NormalizedText> {
    validate(raw, field)?;
    Ok(normalize(raw))
}
