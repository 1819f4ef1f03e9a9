//! Hint command
//!
//! Finds the best word for a set of tiles typed on the command line.

use crate::core::{Hand, Letter};
use crate::solver::{Hint, best_word};
use crate::wordlists::Dictionary;

/// Result of a hint lookup
pub struct HintResult {
    pub hand: Hand,
    pub hint: Option<Hint>,
}

/// Find the best playable word for `letters`
///
/// Spaces are ignored, so both `"c*tae"` and `"c * t a e"` work.
///
/// # Errors
///
/// Returns an error if `letters` has no tiles or contains anything other than
/// letters, `*` and spaces.
pub fn hint_for_letters(letters: &str, dictionary: &Dictionary) -> Result<HintResult, String> {
    if let Some(bad) = letters
        .chars()
        .find(|&c| !c.is_whitespace() && Letter::from_char(c).is_none())
    {
        return Err(format!("Invalid tile '{bad}'"));
    }

    let hand = Hand::from_letters(letters);
    if hand.is_empty() {
        return Err("No tiles given".to_string());
    }

    let hint = best_word(&hand, dictionary);
    Ok(HintResult { hand, hint })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_word_for_letters() {
        let dictionary = Dictionary::from_words(["honey", "hone", "one"]);
        let result = hint_for_letters("H * N E Y", &dictionary).unwrap();

        assert_eq!(result.hand.len(), 5);
        let hint = result.hint.unwrap();
        assert_eq!(hint.word, "h*ney");
        // (4 + 0 + 1 + 1 + 4) * 35
        assert_eq!(hint.score, 350);
    }

    #[test]
    fn no_hint_available() {
        let dictionary = Dictionary::from_words(["honey"]);
        let result = hint_for_letters("xyz", &dictionary).unwrap();
        assert!(result.hint.is_none());
    }

    #[test]
    fn rejects_bad_tiles() {
        let dictionary = Dictionary::from_words(["honey"]);
        assert!(hint_for_letters("ab3", &dictionary).is_err());
        assert!(hint_for_letters("   ", &dictionary).is_err());
    }
}
