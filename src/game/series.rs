//! Multi-hand series
//!
//! Deals successive hands and offers two one-time bonuses per series:
//! - substitution: swap every copy of one letter for a letter not in the hand
//! - replay: play the same hand again and keep the better score
//!
//! A replay does not count as one of the requested hands.

use super::console::{Console, Notice, Prompt, is_yes};
use super::session::HandSession;
use crate::core::{HAND_SIZE, Hand, Letter};
use crate::wordlists::Dictionary;
use log::{debug, info};
use rand::Rng;
use std::io;

/// Bookkeeping for a series in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesState {
    pub hands_remaining: u32,
    /// Dealt hands finished so far (replays excluded)
    pub hands_played: u32,
    pub used_substitution: bool,
    pub used_replay: bool,
    pub total_score: u32,
}

impl SeriesState {
    #[must_use]
    pub fn new(total_hands: u32) -> Self {
        Self {
            hands_remaining: total_hands,
            ..Self::default()
        }
    }
}

/// Orchestrates a series of hands
pub struct GameSeries<'a, R: Rng> {
    dictionary: &'a Dictionary,
    rng: R,
    hand_size: usize,
    state: SeriesState,
}

impl<'a, R: Rng> GameSeries<'a, R> {
    /// Create a series dealing standard 7-tile hands
    pub const fn new(dictionary: &'a Dictionary, rng: R) -> Self {
        Self {
            dictionary,
            rng,
            hand_size: HAND_SIZE,
            state: SeriesState {
                hands_remaining: 0,
                hands_played: 0,
                used_substitution: false,
                used_replay: false,
                total_score: 0,
            },
        }
    }

    /// Change the number of tiles dealt per hand
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// State of the most recent series
    #[must_use]
    pub const fn state(&self) -> &SeriesState {
        &self.state
    }

    /// Play `total_hands` hands and return the series score
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console runs out of input.
    pub fn play<C: Console + ?Sized>(
        &mut self,
        total_hands: u32,
        console: &mut C,
    ) -> io::Result<u32> {
        self.state = SeriesState::new(total_hands);

        while self.state.hands_remaining > 0 {
            let mut hand = Hand::deal(self.hand_size, &mut self.rng);
            console.notify(Notice::Hand(hand.clone()));

            if !self.state.used_substitution
                && is_yes(&console.request(Prompt::OfferSubstitution)?)
            {
                let answer = console.request(Prompt::SubstituteLetter)?;
                if let Some(letter) = single_letter(&answer) {
                    hand = hand.substitute(letter, &mut self.rng);
                }
                self.state.used_substitution = true;
                console.notify(Notice::Hand(hand.clone()));
            }

            let mut hand_score = HandSession::new(hand.clone(), self.dictionary).play(console)?;

            if !self.state.used_replay && is_yes(&console.request(Prompt::OfferReplay)?) {
                self.state.used_replay = true;
                let replay_score = HandSession::new(hand, self.dictionary).play(console)?;
                debug!("Replay scored {replay_score} against {hand_score}");
                hand_score = hand_score.max(replay_score);
            }

            self.state.hands_remaining -= 1;
            self.state.hands_played += 1;
            self.state.total_score = self.state.total_score.saturating_add(hand_score);
        }

        info!(
            "Series of {} hands finished with {} points",
            self.state.hands_played, self.state.total_score
        );
        console.notify(Notice::SeriesTotal(self.state.total_score));
        Ok(self.state.total_score)
    }
}

/// Parse an answer consisting of exactly one letter
fn single_letter(answer: &str) -> Option<Letter> {
    let mut chars = answer.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Letter::from_char(ch),
        _ => None,
    }
}
