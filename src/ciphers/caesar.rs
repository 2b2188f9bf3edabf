//! Caesar shift
//!
//! Every letter moves a fixed number of places along the alphabet, wrapping
//! from `Z` back to `A`.

use crate::models::{NormalizedText, ShiftKey, ALPHABET_LEN};

const MODULUS: u8 = ALPHABET_LEN as u8;

pub fn encrypt(text: &NormalizedText, shift: ShiftKey) -> NormalizedText {
    NormalizedText::from_upper_bytes(
        text.positions()
            .map(|p| b'A' + (p + shift.get()) % MODULUS)
            .collect(),
    )
}

pub fn decrypt(text: &NormalizedText, shift: ShiftKey) -> NormalizedText {
    NormalizedText::from_upper_bytes(
        text.positions()
            .map(|p| b'A' + (p + MODULUS - shift.get()) % MODULUS)
            .collect(),
    )
}
