//! Word validity checking
//!
//! A word is playable when the hand holds enough of each of its letters and the
//! dictionary recognizes it, with every `*` standing in for one shared vowel.

use super::letter::VOWEL_TILES;
use super::{Hand, Letter};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashMap;

/// Check whether `word` can be played from `hand`
///
/// Case-insensitive for ASCII letters and side-effect free. The empty string is
/// never valid, and so is any word with a character that is not a tile.
///
/// # Examples
/// ```
/// use word_game::core::{Hand, is_valid};
/// use word_game::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["cat"]);
/// let hand = Hand::from_letters("c*t");
///
/// assert!(is_valid("c*t", &hand, &dictionary));
/// assert!(!is_valid("cat", &hand, &dictionary)); // no 'a' in hand
/// ```
#[must_use]
pub fn is_valid(word: &str, hand: &Hand, dictionary: &Dictionary) -> bool {
    let word = word.to_ascii_lowercase();
    if word.is_empty() {
        return false;
    }

    has_letters(&word, hand) && in_dictionary(&word, dictionary)
}

/// Every character of `word` is available in `hand` at least as many times as it occurs
fn has_letters(word: &str, hand: &Hand) -> bool {
    let mut needed: FxHashMap<char, u32> = FxHashMap::default();
    for ch in word.chars() {
        *needed.entry(ch).or_insert(0) += 1;
    }

    needed.iter().all(|(&ch, &count)| {
        Letter::from_char(ch).is_some_and(|letter| hand.count(letter) >= count)
    })
}

/// `word` is a dictionary member, directly or with all wildcards set to one vowel
fn in_dictionary(word: &str, dictionary: &Dictionary) -> bool {
    if dictionary.contains(word) {
        return true;
    }

    let wildcard = Letter::WILDCARD.as_char();
    if !word.contains(wildcard) {
        return false;
    }

    VOWEL_TILES.iter().any(|vowel| {
        let candidate = word.replace(wildcard, &vowel.to_string());
        dictionary.contains(&candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "honey", "evil", "rapture", "boot", "bait", "apple"])
    }

    #[test]
    fn empty_word_is_invalid() {
        let dict = dictionary();
        assert!(!is_valid("", &Hand::from_letters("*abc"), &dict));
        assert!(!is_valid("", &Hand::new(), &dict));
    }

    #[test]
    fn wildcard_resolves_to_vowel() {
        let hand = Hand::from_letters("c*t");
        assert!(is_valid("c*t", &hand, &dictionary()));
    }

    #[test]
    fn plain_word_in_hand() {
        let hand = Hand::from_letters("eviln*");
        assert!(is_valid("evil", &hand, &dictionary()));
        assert!(is_valid("EVIL", &hand, &dictionary()));
    }

    #[test]
    fn not_enough_copies() {
        let hand = Hand::from_letters("aple*");
        assert!(!is_valid("apple", &hand, &dictionary()));
    }

    #[test]
    fn letters_present_but_not_a_word() {
        let hand = Hand::from_letters("tac");
        assert!(!is_valid("tac", &hand, &dictionary()));
    }

    #[test]
    fn word_not_in_hand() {
        let hand = Hand::from_letters("honest");
        assert!(!is_valid("honey", &hand, &dictionary()));
    }

    #[test]
    fn wildcard_cannot_be_consonant() {
        let hand = Hand::from_letters("h*ney");
        assert!(is_valid("h*ney", &hand, &dictionary()));
        let hand = Hand::from_letters("*oney");
        assert!(!is_valid("*oney", &hand, &dictionary()));
    }

    #[test]
    fn wildcards_share_one_vowel() {
        let dict = dictionary();
        // "boot" needs both wildcards to be 'o'
        let hand = Hand::from_letters("b**t");
        assert!(is_valid("b**t", &hand, &dict));
        // "bait" would need two different vowels
        assert!(!is_valid("b**t", &hand, &Dictionary::from_words(["bait"])));
    }

    #[test]
    fn wildcard_needs_tile_in_hand() {
        let hand = Hand::from_letters("ct");
        assert!(!is_valid("c*t", &hand, &dictionary()));
    }

    #[test]
    fn malformed_input_is_invalid() {
        let hand = Hand::from_letters("cat*");
        assert!(!is_valid("c4t", &hand, &dictionary()));
        assert!(!is_valid("c t", &hand, &dictionary()));
        assert!(!is_valid("!!", &hand, &dictionary()));
    }

    #[test]
    fn non_ascii_lookalikes_are_not_letters() {
        // U+212A KELVIN SIGN lowercases to 'k' under Unicode rules
        let dict = Dictionary::from_words(["ski"]);
        let hand = Hand::from_letters("ski");
        assert!(is_valid("SKI", &hand, &dict));
        assert!(!is_valid("s\u{212A}i", &hand, &dict));
    }

    #[test]
    fn validation_does_not_touch_hand() {
        let hand = Hand::from_letters("rapture");
        assert!(is_valid("rapture", &hand, &dictionary()));
        assert_eq!(hand, Hand::from_letters("rapture"));
    }
}
