//! Interactive play command
//!
//! Runs a full series against a console.

use crate::core::HAND_SIZE;
use crate::game::{Console, GameSeries, Prompt};
use crate::wordlists::Dictionary;
use log::warn;
use rand::Rng;
use std::io;

/// Configuration for a series
pub struct PlayConfig {
    /// Number of hands; asked for interactively when `None`
    pub hands: Option<u32>,
    pub hand_size: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            hands: None,
            hand_size: HAND_SIZE,
        }
    }
}

/// Play a series and return its total score
///
/// # Errors
///
/// Returns an I/O error if the console runs out of input.
pub fn run_play<R: Rng, C: Console + ?Sized>(
    config: &PlayConfig,
    dictionary: &Dictionary,
    rng: R,
    console: &mut C,
) -> io::Result<u32> {
    let hands = match config.hands {
        Some(hands) => hands,
        None => prompt_hand_count(console)?,
    };

    GameSeries::new(dictionary, rng)
        .with_hand_size(config.hand_size)
        .play(hands, console)
}

/// Ask for the number of hands until a non-negative integer is entered
///
/// # Errors
///
/// Returns an I/O error if the console runs out of input.
pub fn prompt_hand_count<C: Console + ?Sized>(console: &mut C) -> io::Result<u32> {
    loop {
        let answer = console.request(Prompt::HandCount)?;
        match answer.trim().parse() {
            Ok(hands) => return Ok(hands),
            Err(_) => warn!("Not a hand count: {answer:?}"),
        }
    }
}
