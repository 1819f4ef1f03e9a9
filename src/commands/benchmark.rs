//! Benchmark command
//!
//! Plays many single-hand series with the greedy player and reports the spread
//! of hand scores.

use crate::game::GameSeries;
use crate::solver::GreedyPlayer;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::io;
use std::time::{Duration, Instant};

/// Width of each score bucket in the distribution
pub const BUCKET_WIDTH: u32 = 50;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_hands: usize,
    pub total_score: u64,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    /// Hands per score bucket, keyed by the bucket's lower bound
    pub distribution: BTreeMap<u32, usize>,
    pub duration: Duration,
    pub hands_per_second: f64,
}

/// Play `count` greedy hands of `hand_size` tiles
///
/// The progress bar is only drawn when `show_progress` is set.
///
/// # Errors
///
/// Returns an I/O error if a hand fails to play out.
pub fn run_benchmark<R: Rng>(
    dictionary: &Dictionary,
    count: usize,
    hand_size: usize,
    rng: R,
    show_progress: bool,
) -> io::Result<BenchmarkResult> {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut player = GreedyPlayer::new(dictionary, 1);
    let mut series = GameSeries::new(dictionary, rng).with_hand_size(hand_size);

    let mut total_score: u64 = 0;
    let mut min_score = u32::MAX;
    let mut max_score = 0;
    let mut distribution: BTreeMap<u32, usize> = BTreeMap::new();

    for _ in 0..count {
        let score = series.play(1, &mut player)?;

        total_score += u64::from(score);
        min_score = min_score.min(score);
        max_score = max_score.max(score);
        *distribution
            .entry(score / BUCKET_WIDTH * BUCKET_WIDTH)
            .or_insert(0) += 1;

        pb.set_message(format!("last hand: {score}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_hands: count,
        total_score,
        average_score: if count == 0 {
            0.0
        } else {
            total_score as f64 / count as f64
        },
        min_score: if count == 0 { 0 } else { min_score },
        max_score,
        distribution,
        duration,
        hands_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
