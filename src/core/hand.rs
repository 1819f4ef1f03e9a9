//! Hand of letter tiles
//!
//! A `Hand` is a multiset of letters. Every operation that uses up or swaps letters
//! returns a new `Hand` and leaves the receiver untouched.

use super::letter::{CONSONANT_TILES, Letter, VOWEL_TILES};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Number of tiles dealt per hand in a standard game
pub const HAND_SIZE: usize = 7;

/// A multiset of letter tiles
///
/// Invariant: every stored count is strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    counts: FxHashMap<Letter, u32>,
}

impl Hand {
    /// Create an empty hand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from a string of tiles, ignoring non-letter characters
    ///
    /// # Examples
    /// ```
    /// use word_game::core::{Hand, Letter};
    ///
    /// let hand = Hand::from_letters("Hello");
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(hand.count(Letter::from_char('l').unwrap()), 2);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut hand = Self::new();
        for letter in letters.chars().filter_map(Letter::from_char) {
            hand.add(letter, 1);
        }
        hand
    }

    /// Deal a random hand of exactly `size` tiles
    ///
    /// The first tile is always the wildcard. Of the remaining `size - 1` tiles,
    /// `ceil(size / 3) - 1` are vowels and the rest are consonants, each drawn
    /// uniformly and independently. A size of 0 deals an empty hand.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_game::core::{Hand, Letter};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let hand = Hand::deal(7, &mut rng);
    /// assert_eq!(hand.len(), 7);
    /// assert_eq!(hand.count(Letter::WILDCARD), 1);
    /// ```
    pub fn deal<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut hand = Self::new();
        if size == 0 {
            return hand;
        }

        hand.add(Letter::WILDCARD, 1);

        let num_vowels = size.div_ceil(3);
        for _ in 1..num_vowels {
            if let Some(&vowel) = VOWEL_TILES.choose(rng) {
                hand.add(vowel, 1);
            }
        }
        for _ in num_vowels..size {
            if let Some(&consonant) = CONSONANT_TILES.choose(rng) {
                hand.add(consonant, 1);
            }
        }

        debug!("Dealt hand of {size}: {hand}");
        hand
    }

    /// Total number of tiles in the hand
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of copies of `letter` in the hand (0 if absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: Letter) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.counts.contains_key(&letter)
    }

    /// Every tile in the hand, sorted, with repeats expanded
    #[must_use]
    pub fn letters(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self
            .counts
            .iter()
            .flat_map(|(&letter, &count)| std::iter::repeat_n(letter, count as usize))
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Return the hand left after playing `word`
    ///
    /// Removes one tile per character of `word` that is still in the hand.
    /// Characters that are not in the hand, or are not letters at all, are ignored,
    /// so this is safe to call with any input.
    ///
    /// # Examples
    /// ```
    /// use word_game::core::Hand;
    ///
    /// let hand = Hand::from_letters("quail");
    /// let rest = hand.consume("QUIZ!");
    /// assert_eq!(rest, Hand::from_letters("al"));
    /// assert_eq!(hand.len(), 5); // original untouched
    /// ```
    #[must_use]
    pub fn consume(&self, word: &str) -> Self {
        let mut hand = self.clone();
        for letter in word.chars().filter_map(Letter::from_char) {
            hand.remove_one(letter);
        }
        hand
    }

    /// Replace every copy of `letter` with a random letter not already in the hand
    ///
    /// The replacement is drawn uniformly from the alphabet minus every letter the
    /// hand currently holds (including `letter` itself) and keeps the same count.
    /// If `letter` is not in the hand, or no replacement is available, the hand is
    /// returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_game::core::{Hand, Letter};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let hand = Hand::from_letters("hello");
    /// let swapped = hand.substitute(Letter::from_char('l').unwrap(), &mut rng);
    /// assert_eq!(swapped.len(), 5);
    /// assert!(!swapped.contains(Letter::from_char('l').unwrap()));
    /// ```
    pub fn substitute<R: Rng + ?Sized>(&self, letter: Letter, rng: &mut R) -> Self {
        let Some(&count) = self.counts.get(&letter) else {
            debug!("Substitution skipped: '{letter}' not in hand");
            return self.clone();
        };

        let choices: Vec<Letter> = Letter::alphabet().filter(|&l| !self.contains(l)).collect();
        let Some(&replacement) = choices.choose(rng) else {
            debug!("Substitution skipped: no letter left to swap in");
            return self.clone();
        };

        let mut hand = self.clone();
        hand.counts.remove(&letter);
        hand.counts.insert(replacement, count);

        debug!("Substituted {count}x '{letter}' with '{replacement}'");
        hand
    }

    fn add(&mut self, letter: Letter, count: u32) {
        if count > 0 {
            *self.counts.entry(letter).or_insert(0) += count;
        }
    }

    fn remove_one(&mut self, letter: Letter) {
        if let Entry::Occupied(mut entry) = self.counts.entry(letter) {
            if *entry.get() > 1 {
                *entry.get_mut() -= 1;
            } else {
                entry.remove();
            }
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.letters().iter().map(ToString::to_string).collect();
        write!(f, "{}", text.join(" "))
    }
}
