//! Word Game
//!
//! A letter-tile word game: deal a hand, spell words for Scrabble-style points, and
//! play a series of hands with a one-time letter substitution and a one-time replay.
//!
//! # Quick Start
//!
//! ```rust
//! use word_game::core::{Hand, is_valid, score};
//! use word_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["zoo", "cat"]);
//! let hand = Hand::from_letters("zo*cxtq");
//!
//! // The wildcard stands in for the second 'o'
//! assert!(is_valid("zo*", &hand, &dictionary));
//! assert_eq!(score("zoo", 7), 108);
//! ```

// Core domain types
pub mod core;

// Hand and series state machines
pub mod game;

// Best-word search and automated play
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
