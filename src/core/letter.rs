//! Letter tiles
//!
//! A `Letter` is one lowercase ASCII letter or the wildcard tile `*`.
//! Construction validates the character, so a `Letter` can never hold anything else.

use std::fmt;

/// Vowels, in the order wildcard resolution tries them
pub const VOWELS: &[u8; 5] = b"aeiou";

/// The 21 non-vowel letters
pub const CONSONANTS: &[u8; 21] = b"bcdfghjklmnpqrstvwxyz";

/// Vowel tiles dealt into a hand
pub(crate) const VOWEL_TILES: [Letter; 5] = tiles(VOWELS);

/// Consonant tiles dealt into a hand
pub(crate) const CONSONANT_TILES: [Letter; 21] = tiles(CONSONANTS);

/// Scrabble point values for `a` through `z`
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// A single letter tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// The wildcard tile, worth 0 points
    pub const WILDCARD: Self = Self(b'*');

    /// Create a letter from a character, case-insensitively
    ///
    /// Returns `None` for anything other than `a-z`, `A-Z` or `*`.
    ///
    /// # Examples
    /// ```
    /// use word_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::from_char('*').unwrap().is_wildcard());
    /// assert!(Letter::from_char('3').is_none());
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch == '*' {
            return Some(Self::WILDCARD);
        }
        if ch.is_ascii_alphabetic() {
            return Some(Self(ch.to_ascii_lowercase() as u8));
        }
        None
    }

    /// The letter as a lowercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        self.0 == b'*'
    }

    #[inline]
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, b'a' | b'e' | b'i' | b'o' | b'u')
    }

    /// Point value of the tile
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        if self.is_wildcard() {
            0
        } else {
            LETTER_VALUES[(self.0 - b'a') as usize]
        }
    }

    /// All 26 alphabetic letters (no wildcard)
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }
}

const fn tiles<const N: usize>(bytes: &[u8; N]) -> [Letter; N] {
    let mut tiles = [Letter::WILDCARD; N];
    let mut i = 0;
    while i < N {
        tiles[i] = Letter(bytes[i]);
        i += 1;
    }
    tiles
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
