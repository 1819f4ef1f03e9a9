//! Automated play
//!
//! Finds the best word for a hand and drives a player that always plays it.

mod best_word;
mod greedy;

pub use best_word::{Hint, best_word};
pub use greedy::GreedyPlayer;
