//! Core domain types for the word game
//!
//! Letters, hands, scoring and word validation. Everything here is pure: randomness
//! is passed in by the caller and no function touches the terminal.

mod hand;
mod letter;
pub mod score;
mod validate;

pub use hand::{HAND_SIZE, Hand};
pub use letter::{CONSONANTS, Letter, VOWELS};
pub use score::{ScoreBreakdown, score};
pub use validate::is_valid;
