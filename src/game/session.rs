//! Single-hand play
//!
//! A `HandSession` owns the working hand for one playthrough. Every attempt, valid
//! or not, uses up the matching tiles; the session ends when the hand is empty or
//! the player enters the `!!` sentinel.

use super::console::{Console, Notice, Prompt};
use crate::core::{Hand, is_valid, score};
use crate::wordlists::Dictionary;
use log::debug;
use std::io;

/// Input that ends the hand early
pub const END_HAND: &str = "!!";

/// Lifecycle of a hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Finished,
}

/// Result of submitting one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Scored(u32),
    Invalid,
}

/// One playthrough of a hand
pub struct HandSession<'a> {
    hand: Hand,
    dictionary: &'a Dictionary,
    total: u32,
    ended_early: bool,
}

impl<'a> HandSession<'a> {
    #[must_use]
    pub const fn new(hand: Hand, dictionary: &'a Dictionary) -> Self {
        Self {
            hand,
            dictionary,
            total: 0,
            ended_early: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.ended_early || self.hand.is_empty() {
            SessionState::Finished
        } else {
            SessionState::Playing
        }
    }

    /// Tiles still available
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Score accumulated so far
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Play one word
    ///
    /// A valid word is scored against the hand size before its tiles are removed.
    /// The hand is updated either way.
    pub fn submit(&mut self, word: &str) -> Attempt {
        let word = word.to_ascii_lowercase();
        let attempt = if is_valid(&word, &self.hand, self.dictionary) {
            let points = score(&word, self.hand.len());
            self.total = self.total.saturating_add(points);
            Attempt::Scored(points)
        } else {
            Attempt::Invalid
        };

        debug!("Attempt {word:?} -> {attempt:?}");
        self.hand = self.hand.consume(&word);
        attempt
    }

    /// Stop playing without using any more tiles
    pub const fn finish(&mut self) {
        self.ended_early = true;
    }

    /// Play the hand to completion against `console`
    ///
    /// Returns the hand's total score.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console runs out of input.
    pub fn play<C: Console + ?Sized>(mut self, console: &mut C) -> io::Result<u32> {
        while self.state() == SessionState::Playing {
            console.notify(Notice::Hand(self.hand.clone()));
            let input = console.request(Prompt::Word {
                hand: self.hand.clone(),
            })?;
            let word = input.trim();

            if word == END_HAND {
                self.finish();
                break;
            }

            match self.submit(word) {
                Attempt::Scored(points) => console.notify(Notice::WordScored {
                    word: word.to_string(),
                    score: points,
                    total: self.total,
                }),
                Attempt::Invalid => console.notify(Notice::InvalidWord(word.to_string())),
            }
            console.notify(Notice::Divider);
        }

        if !self.ended_early {
            console.notify(Notice::OutOfLetters);
        }
        console.notify(Notice::HandTotal(self.total));

        Ok(self.total)
    }
}
