//! Cipher parameter types
//!
//! Each parameter checks its range once, at construction, so the codecs
//! can treat it as trusted.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::text::{prepare, NormalizedText, TextField};
use crate::error::{CipherError, CipherResult};

/// Offset for the Caesar shift, 1..=25
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ShiftKey(u8);

impl ShiftKey {
    pub const RANGE: RangeInclusive<i64> = 1..=25;

    /// Create a shift, refusing values outside 1..=25
    pub fn new(places: i64) -> CipherResult<Self> {
        if !Self::RANGE.contains(&places) {
            return Err(CipherError::invalid_parameter(format!(
                "A Caesar shift cipher requires at least 1 place or at most 25 places (got {})",
                places
            )));
        }
        Ok(Self(places as u8))
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ShiftKey {
    type Error = CipherError;

    fn try_from(places: i64) -> Result<Self, Self::Error> {
        Self::new(places)
    }
}

impl From<ShiftKey> for i64 {
    fn from(shift: ShiftKey) -> Self {
        i64::from(shift.0)
    }
}

impl FromStr for ShiftKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_number(s)?)
    }
}

/// Number of rails for the rail fence, 2..=99
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RailLevels(usize);

impl RailLevels {
    pub const RANGE: RangeInclusive<i64> = 2..=99;

    pub fn new(levels: i64) -> CipherResult<Self> {
        if !Self::RANGE.contains(&levels) {
            return Err(CipherError::invalid_parameter(format!(
                "A rail fence cipher requires between 2 and 99 levels (got {})",
                levels
            )));
        }
        Ok(Self(levels as usize))
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RailLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for RailLevels {
    type Error = CipherError;

    fn try_from(levels: i64) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<RailLevels> for i64 {
    fn from(levels: RailLevels) -> Self {
        levels.0 as i64
    }
}

impl FromStr for RailLevels {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_number(s)?)
    }
}

/// Non-empty keyword for the Vigenère cipher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VigenereKey(NormalizedText);

impl VigenereKey {
    /// Validate and normalize a raw key
    pub fn parse(raw: &str) -> CipherResult<Self> {
        Self::new(prepare(raw, TextField::Key)?)
    }

    pub fn new(key: NormalizedText) -> CipherResult<Self> {
        if key.is_empty() {
            return Err(CipherError::invalid_parameter(
                "A Vigenère key needs at least one letter",
            ));
        }
        Ok(Self(key))
    }

    /// Offset applied at message position `index`
    ///
    /// Key letter `A` shifts by 1, not 0.
    pub fn offset_at(&self, index: usize) -> u8 {
        let bytes = self.0.as_bytes();
        bytes[index % bytes.len()] - b'A' + 1
    }
}

impl fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VigenereKey {
    type Error = CipherError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<VigenereKey> for String {
    fn from(key: VigenereKey) -> Self {
        key.0.into_string()
    }
}

fn parse_number(s: &str) -> CipherResult<i64> {
    s.trim()
        .parse()
        .map_err(|_| CipherError::invalid_parameter("Invalid input. Must be a number."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_range() {
        assert_eq!(ShiftKey::new(1).unwrap().get(), 1);
        assert_eq!(ShiftKey::new(25).unwrap().get(), 25);
        assert!(ShiftKey::new(0).unwrap_err().is_invalid_parameter());
        assert!(ShiftKey::new(26).unwrap_err().is_invalid_parameter());
        assert!(ShiftKey::new(-3).is_err());
    }

    #[test]
    fn test_shift_from_str() {
        assert_eq!(" 7 ".parse::<ShiftKey>().unwrap().get(), 7);
        assert!("seven".parse::<ShiftKey>().unwrap_err().is_invalid_parameter());
        assert!("40".parse::<ShiftKey>().is_err());
    }

    #[test]
    fn test_rail_levels_range() {
        assert_eq!(RailLevels::new(2).unwrap().get(), 2);
        assert_eq!(RailLevels::new(99).unwrap().get(), 99);
        assert!(RailLevels::new(1).is_err());
        assert!(RailLevels::new(0).is_err());
        assert!(RailLevels::new(100).is_err());
        assert_eq!("3".parse::<RailLevels>().unwrap().get(), 3);
    }

    #[test]
    fn test_vigenere_key_offsets_are_one_indexed() {
        let key = VigenereKey::parse("ab z").unwrap();
        assert_eq!(key.to_string(), "ABZ");
        assert_eq!(key.offset_at(0), 1);
        assert_eq!(key.offset_at(1), 2);
        assert_eq!(key.offset_at(2), 26);
        assert_eq!(key.offset_at(3), 1);
    }

    #[test]
    fn test_vigenere_key_rejects_empty() {
        assert!(VigenereKey::parse("  ,.").unwrap_err().is_invalid_parameter());
        assert!(VigenereKey::parse("k3y").unwrap_err().is_unsupported_character());
    }

    #[test]
    fn test_deserialize_checks_ranges() {
        assert_eq!(serde_json::from_str::<ShiftKey>("25").unwrap().get(), 25);
        assert!(serde_json::from_str::<ShiftKey>("0").is_err());
        assert!(serde_json::from_str::<ShiftKey>("200").is_err());

        assert_eq!(serde_json::from_str::<RailLevels>("3").unwrap().get(), 3);
        assert!(serde_json::from_str::<RailLevels>("0").is_err());
        assert!(serde_json::from_str::<RailLevels>("200").is_err());
    }

    #[test]
    fn test_deserialize_vigenere_key() {
        let key: VigenereKey = serde_json::from_str("\"lemon\"").unwrap();
        assert_eq!(key.to_string(), "LEMON");
        assert!(serde_json::from_str::<VigenereKey>("\"\"").is_err());
        assert!(serde_json::from_str::<VigenereKey>("\"k3y\"").is_err());
    }

    #[test]
    fn test_serialize_as_plain_values() {
        let shift = ShiftKey::new(3).unwrap();
        assert_eq!(serde_json::to_string(&shift).unwrap(), "3");
        let key = VigenereKey::parse("lemon").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"LEMON\"");
    }
}
