//! Terminal output formatting
//!
//! Display utilities for game feedback, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_hint_result, print_notice, print_score_result};
