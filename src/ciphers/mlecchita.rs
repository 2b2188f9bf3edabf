//! Mlecchita Vikaalpa, the Kama Sutra's Roman substitution
//!
//! The classic mode uses one fixed pairing of letters. The random mode
//! shuffles a fresh alphabet for every message and hands it back so the
//! message can be decrypted later.

use rand::Rng;

use super::substitution;
use crate::models::{CipherAlphabet, NormalizedText};

pub fn encrypt_classic(text: &NormalizedText) -> NormalizedText {
    substitution::encrypt(text, &CipherAlphabet::mlecchita_classic())
}

pub fn decrypt_classic(text: &NormalizedText) -> NormalizedText {
    substitution::decrypt(text, &CipherAlphabet::mlecchita_classic())
}

/// Encrypt under a freshly generated alphabet
pub fn encrypt_random<R: Rng + ?Sized>(
    text: &NormalizedText,
    rng: &mut R,
) -> (NormalizedText, CipherAlphabet) {
    let alphabet = CipherAlphabet::random(rng);
    (substitution::encrypt(text, &alphabet), alphabet)
}

pub fn decrypt(text: &NormalizedText, alphabet: &CipherAlphabet) -> NormalizedText {
    substitution::decrypt(text, alphabet)
}
