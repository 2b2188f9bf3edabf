//! Rail fence transposition
//!
//! Letters are dealt round-robin onto the rails (0, 1, .., n-1, 0, ..)
//! with no change of direction, then the rails are read off in order.

use crate::models::{NormalizedText, RailLevels};

pub fn encrypt(text: &NormalizedText, levels: RailLevels) -> NormalizedText {
    let levels = levels.get();
    let mut rails: Vec<Vec<u8>> = vec![Vec::new(); levels];

    for (i, &letter) in text.as_bytes().iter().enumerate() {
        rails[i % levels].push(letter);
    }

    NormalizedText::from_upper_bytes(rails.concat())
}

pub fn decrypt(text: &NormalizedText, levels: RailLevels) -> NormalizedText {
    let levels = levels.get();
    let len = text.len();
    let mut placed = vec![0u8; len];
    let mut index = 0;
    let mut offset = 0;

    // Rail `offset` owns positions offset, offset + levels, ...
    for &letter in text.as_bytes() {
        placed[index + offset] = letter;
        index += levels;
        if index + offset >= len {
            index = 0;
            offset += 1;
        }
    }

    NormalizedText::from_upper_bytes(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(n: i64) -> RailLevels {
        RailLevels::new(n).unwrap()
    }

    #[test]
    fn test_round_robin_buckets() {
        let text = NormalizedText::new("WEAREDISCOVEREDFLEEATONCE");
        let encrypted = encrypt(&text, levels(3));
        // rail 0: 0,3,6..  rail 1: 1,4,7..  rail 2: 2,5,8..
        assert_eq!(encrypted.as_str(), "WRIORFEOEEESVELANADCEDETC");
    }

    #[test]
    fn test_decrypt_known_value() {
        let text = NormalizedText::new("WRIORFEOEEESVELANADCEDETC");
        assert_eq!(
            decrypt(&text, levels(3)).as_str(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn test_two_rails() {
        let text = NormalizedText::new("HELLOWORLD");
        assert_eq!(encrypt(&text, levels(2)).as_str(), "HLOOLELWRD");
    }

    #[test]
    fn test_round_trip_all_levels() {
        let text = NormalizedText::new("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG");
        for n in 2..=text.len() as i64 {
            let encrypted = encrypt(&text, levels(n));
            assert_eq!(decrypt(&encrypted, levels(n)), text, "levels = {}", n);
        }
    }

    #[test]
    fn test_more_levels_than_letters() {
        let text = NormalizedText::new("HI");
        let encrypted = encrypt(&text, levels(5));
        assert_eq!(encrypted.as_str(), "HI");
        assert_eq!(decrypt(&encrypted, levels(5)).as_str(), "HI");
    }

    #[test]
    fn test_empty_text() {
        let text = NormalizedText::new("");
        assert!(encrypt(&text, levels(3)).is_empty());
        assert!(decrypt(&text, levels(3)).is_empty());
    }
}
