//! Word scoring
//!
//! A word's score is the product of two components:
//! - the sum of its Scrabble letter values (wildcard = 0)
//! - a length bonus, `max(1, 7*len - 3*(hand_len - len))`
//!
//! where `hand_len` is the hand size at the moment the word is played,
//! before its letters are removed. All arithmetic saturates at `u32::MAX`.

use super::Letter;

/// The two scoring components of a word and their product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub letter_points: u32,
    pub length_bonus: u32,
    pub total: u32,
}

/// Sum of letter values in `word`, case-insensitive
///
/// Characters outside the letter table contribute 0.
#[must_use]
pub fn letter_points(word: &str) -> u32 {
    word.chars()
        .filter_map(Letter::from_char)
        .map(Letter::value)
        .fold(0, u32::saturating_add)
}

/// Length bonus for a word of `word_len` characters played from a hand of `hand_len`
///
/// Never less than 1.
#[must_use]
pub fn length_bonus(word_len: usize, hand_len: usize) -> u32 {
    let word_len = i64::try_from(word_len).unwrap_or(i64::MAX);
    let hand_len = i64::try_from(hand_len).unwrap_or(i64::MAX);
    let bonus = word_len
        .saturating_mul(7)
        .saturating_sub(hand_len.saturating_sub(word_len).saturating_mul(3));
    u32::try_from(bonus.max(1)).unwrap_or(u32::MAX)
}

/// Compute both scoring components for `word`
///
/// # Examples
/// ```
/// use word_game::core::score::breakdown;
///
/// let result = breakdown("zoo", 7);
/// assert_eq!(result.letter_points, 12);
/// assert_eq!(result.length_bonus, 9);
/// assert_eq!(result.total, 108);
/// ```
#[must_use]
pub fn breakdown(word: &str, hand_len: usize) -> ScoreBreakdown {
    let letter_points = letter_points(word);
    let length_bonus = length_bonus(word.chars().count(), hand_len);

    ScoreBreakdown {
        letter_points,
        length_bonus,
        total: letter_points.saturating_mul(length_bonus),
    }
}

/// Score `word` played from a hand holding `hand_len` tiles
///
/// Assumes the word has already been validated against the hand.
#[inline]
#[must_use]
pub fn score(word: &str, hand_len: usize) -> u32 {
    breakdown(word, hand_len).total
}
