//! Vigenère polyalphabetic substitution
//!
//! The key repeats over the message. Key letter `A` shifts by 1 and `Z`
//! shifts by 26 (a full turn), one more than the textbook table.

use crate::models::{NormalizedText, VigenereKey, ALPHABET_LEN};

const MODULUS: u8 = ALPHABET_LEN as u8;

pub fn encrypt(text: &NormalizedText, key: &VigenereKey) -> NormalizedText {
    NormalizedText::from_upper_bytes(
        text.positions()
            .enumerate()
            .map(|(i, p)| b'A' + (p + key.offset_at(i)) % MODULUS)
            .collect(),
    )
}

pub fn decrypt(text: &NormalizedText, key: &VigenereKey) -> NormalizedText {
    NormalizedText::from_upper_bytes(
        text.positions()
            .enumerate()
            .map(|(i, p)| b'A' + (p + 2 * MODULUS - key.offset_at(i)) % MODULUS)
            .collect(),
    )
}
