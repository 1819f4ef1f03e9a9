//! Best-word search
//!
//! Scans the whole dictionary in parallel for the highest-scoring word that can be
//! played from a hand, including words that need the wildcard.

use crate::core::{Hand, Letter, is_valid, score};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// A playable word and the score it would earn right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// The attempt to type, possibly containing `*`
    pub word: String,
    pub score: u32,
}

/// Find the highest-scoring playable word for `hand`
///
/// Returns `None` if nothing in the dictionary can be played. Ties go to the
/// alphabetically first attempt.
///
/// # Examples
/// ```
/// use word_game::core::Hand;
/// use word_game::solver::best_word;
/// use word_game::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["cat", "act", "tax"]);
/// let hint = best_word(&Hand::from_letters("ct*"), &dictionary).unwrap();
/// assert_eq!(hint.word, "*ct");
/// ```
#[must_use]
pub fn best_word(hand: &Hand, dictionary: &Dictionary) -> Option<Hint> {
    let hand_len = hand.len();
    let has_wildcard = hand.contains(Letter::WILDCARD);

    dictionary
        .words()
        .par_iter()
        .filter(|word| word.len() <= hand_len)
        .flat_map_iter(|word| attempts(word, has_wildcard))
        .filter(|attempt| is_valid(attempt, hand, dictionary))
        .map(|attempt| {
            let score = score(&attempt, hand_len);
            Hint {
                word: attempt,
                score,
            }
        })
        .max_by(|a, b| a.score.cmp(&b.score).then_with(|| b.word.cmp(&a.word)))
}

/// Ways to type `word`: as-is, plus each single vowel swapped for the wildcard
fn attempts(word: &str, has_wildcard: bool) -> Vec<String> {
    let mut attempts = vec![word.to_string()];
    if has_wildcard {
        attempts.extend(
            word.char_indices()
                .filter(|&(_, ch)| Letter::from_char(ch).is_some_and(Letter::is_vowel))
                .map(|(i, _)| format!("{}*{}", &word[..i], &word[i + 1..])),
        );
    }
    attempts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "act", "at", "jazz", "quiz", "rat", "tar", "art"])
    }

    #[test]
    fn picks_highest_score() {
        let hand = Hand::from_letters("quizat*");
        let hint = best_word(&hand, &dictionary()).unwrap();

        // quiz: (10 + 1 + 1 + 10) * (28 - 9) = 418
        assert_eq!(hint.word, "quiz");
        assert_eq!(hint.score, 418);
    }

    #[test]
    fn uses_wildcard_for_missing_vowel() {
        let hand = Hand::from_letters("qz*");
        assert!(best_word(&hand, &dictionary()).is_none());

        let hand = Hand::from_letters("quz*");
        let hint = best_word(&hand, &dictionary()).unwrap();
        assert_eq!(hint.word, "qu*z");
        assert!(is_valid(&hint.word, &hand, &dictionary()));
    }

    #[test]
    fn ties_go_to_alphabetical_first() {
        let hand = Hand::from_letters("rat");
        let hint = best_word(&hand, &dictionary()).unwrap();
        assert_eq!(hint.word, "art");
        assert_eq!(hint.score, 3 * 21);
    }

    #[test]
    fn none_when_nothing_fits() {
        assert!(best_word(&Hand::from_letters("xyz"), &dictionary()).is_none());
        assert!(best_word(&Hand::new(), &dictionary()).is_none());
    }

    #[test]
    fn attempts_without_wildcard() {
        assert_eq!(attempts("cat", false), vec!["cat"]);
    }

    #[test]
    fn attempts_with_wildcard() {
        assert_eq!(attempts("boat", true), vec!["boat", "b*at", "bo*t"]);
        assert_eq!(attempts("gym", true), vec!["gym"]);
    }
}
