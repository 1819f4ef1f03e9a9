//! Word lists for the word game
//!
//! The dictionary is loaded once before play and only ever queried for membership.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;

/// Default dictionary file, one word per line
pub const DEFAULT_WORDLIST: &str = "words.txt";
