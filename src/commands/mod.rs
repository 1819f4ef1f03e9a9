//! Command implementations

pub mod benchmark;
pub mod hint;
pub mod play;
pub mod score;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use hint::{HintResult, hint_for_letters};
pub use play::{PlayConfig, prompt_hand_count, run_play};
pub use score::{ScoreResult, score_word};
