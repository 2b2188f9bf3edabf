//! Substitution alphabets
//!
//! A [`CipherAlphabet`] is a permutation of the 26 letters. Position `P` of
//! the permutation holds the ciphertext letter for plaintext letter `P`.
//! The inverse table is built alongside so decryption never searches.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::text::{prepare, NormalizedText, TextField};
use crate::error::{CipherError, CipherResult};

/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: usize = 26;

const STANDARD: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The Roman Mlecchita Vikaalpa pairing
const MLECCHITA_CLASSIC: &[u8; ALPHABET_LEN] = b"VHMXUWIBGKJRCSQYOLNZEAFDPT";

/// A bijection over `A`..=`Z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherAlphabet {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl CipherAlphabet {
    /// Build the keyword alphabet
    ///
    /// Distinct key letters come first in order of first appearance. The
    /// remaining slots are filled from the letter after the last key letter
    /// placed, wrapping past `Z`, skipping letters already used.
    pub fn from_keyword(key: &NormalizedText) -> CipherResult<Self> {
        if key.is_empty() {
            return Err(CipherError::invalid_parameter(
                "A keyword alphabet needs at least one letter",
            ));
        }

        let mut used = [false; ALPHABET_LEN];
        let mut letters = Vec::with_capacity(ALPHABET_LEN);
        let mut last = 0usize;

        for position in key.positions() {
            let position = position as usize;
            if !used[position] {
                used[position] = true;
                letters.push(STANDARD[position]);
                last = position;
            }
        }

        // A key using all 26 letters leaves nothing to fill.
        let mut next = (last + 1) % ALPHABET_LEN;
        while letters.len() < ALPHABET_LEN {
            if !used[next] {
                used[next] = true;
                letters.push(STANDARD[next]);
            }
            next = (next + 1) % ALPHABET_LEN;
        }

        Self::from_permutation(&letters)
    }

    /// Validate and normalize a raw 26-letter alphabet string
    pub fn parse(raw: &str) -> CipherResult<Self> {
        let letters = prepare(raw, TextField::Key)?;
        Self::from_permutation(letters.as_bytes())
    }

    /// A uniformly shuffled alphabet
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = *STANDARD;
        letters.shuffle(rng);
        Self::from_table(letters)
    }

    /// The fixed Roman Mlecchita Vikaalpa alphabet
    pub fn mlecchita_classic() -> Self {
        Self::from_table(*MLECCHITA_CLASSIC)
    }

    fn from_permutation(letters: &[u8]) -> CipherResult<Self> {
        if letters.len() != ALPHABET_LEN {
            return Err(CipherError::invalid_parameter(format!(
                "A cipher alphabet needs exactly 26 letters (got {})",
                letters.len()
            )));
        }

        let mut seen = [false; ALPHABET_LEN];
        let mut table = [0u8; ALPHABET_LEN];
        for (slot, &letter) in table.iter_mut().zip(letters) {
            let position = (letter - b'A') as usize;
            if seen[position] {
                return Err(CipherError::invalid_parameter(format!(
                    "A cipher alphabet cannot repeat letters ('{}' appears twice)",
                    letter as char
                )));
            }
            seen[position] = true;
            *slot = letter;
        }

        Ok(Self::from_table(table))
    }

    fn from_table(forward: [u8; ALPHABET_LEN]) -> Self {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (plain, &cipher) in forward.iter().enumerate() {
            inverse[(cipher - b'A') as usize] = STANDARD[plain];
        }
        Self { forward, inverse }
    }

    /// Ciphertext letter for a plaintext alphabet position
    pub fn encode(&self, position: u8) -> u8 {
        self.forward[position as usize]
    }

    /// Plaintext letter for a ciphertext alphabet position
    pub fn decode(&self, position: u8) -> u8 {
        self.inverse[position as usize]
    }

    pub fn letters(&self) -> &[u8; ALPHABET_LEN] {
        &self.forward
    }

    /// True when encoding twice returns the original letter
    pub fn is_self_inverse(&self) -> bool {
        self.forward == self.inverse
    }
}

impl fmt::Display for CipherAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.forward {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
