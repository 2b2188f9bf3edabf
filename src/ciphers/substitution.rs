//! Monoalphabetic substitution over a [`CipherAlphabet`]
//!
//! Also provides the keyword variant of the Caesar cipher, where the
//! alphabet is derived from a keyword.

use crate::error::CipherResult;
use crate::models::{CipherAlphabet, NormalizedText};

/// Replace each letter at position `P` with `alphabet[P]`
pub fn encrypt(text: &NormalizedText, alphabet: &CipherAlphabet) -> NormalizedText {
    NormalizedText::from_upper_bytes(text.positions().map(|p| alphabet.encode(p)).collect())
}

/// Replace each letter with the standard letter at its index in `alphabet`
pub fn decrypt(text: &NormalizedText, alphabet: &CipherAlphabet) -> NormalizedText {
    NormalizedText::from_upper_bytes(text.positions().map(|p| alphabet.decode(p)).collect())
}

pub fn encrypt_with_keyword(
    text: &NormalizedText,
    key: &NormalizedText,
) -> CipherResult<NormalizedText> {
    Ok(encrypt(text, &CipherAlphabet::from_keyword(key)?))
}

pub fn decrypt_with_keyword(
    text: &NormalizedText,
    key: &NormalizedText,
) -> CipherResult<NormalizedText> {
    Ok(decrypt(text, &CipherAlphabet::from_keyword(key)?))
}
