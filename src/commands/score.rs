//! Word scoring command
//!
//! Shows how a word's score breaks down for a given hand size.

use crate::core::Letter;
use crate::core::score::{ScoreBreakdown, breakdown};

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub hand_length: usize,
    pub breakdown: ScoreBreakdown,
}

/// Score `word` as if played from a hand of `hand_length` tiles
///
/// `hand_length` defaults to the word's own length (the whole hand played).
///
/// # Errors
///
/// Returns an error if:
/// - The word is empty or contains characters other than letters and `*`
/// - `hand_length` is smaller than the word
pub fn score_word(word: &str, hand_length: Option<usize>) -> Result<ScoreResult, String> {
    let word = word.trim().to_ascii_lowercase();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }
    if let Some(bad) = word.chars().find(|&c| Letter::from_char(c).is_none()) {
        return Err(format!("Word contains invalid character '{bad}'"));
    }

    let word_length = word.chars().count();
    let hand_length = hand_length.unwrap_or(word_length);
    if hand_length < word_length {
        return Err(format!(
            "Hand of {hand_length} tiles cannot hold a {word_length}-letter word"
        ));
    }

    Ok(ScoreResult {
        breakdown: breakdown(&word, hand_length),
        word,
        hand_length,
    })
}
