//! Word Game - CLI
//!
//! Play a series of letter-tile hands in the terminal, or score words and look up
//! the best play for a hand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_game::{
    commands::{PlayConfig, hint_for_letters, run_benchmark, run_play, score_word},
    core::HAND_SIZE,
    game::Terminal,
    output::{print_benchmark_result, print_hint_result, print_score_result},
    wordlists::{DEFAULT_WORDLIST, Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_game",
    about = "Letter-tile word game with wildcards, substitutions and replays",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Seed for dealing and substitution (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Tiles dealt per hand
    #[arg(long, global = true, default_value_t = HAND_SIZE)]
    hand_size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of hands (default)
    Play {
        /// Number of hands (asked interactively when omitted)
        #[arg(short = 'n', long)]
        hands: Option<u32>,
    },

    /// Show how a word would score
    Score {
        /// The word to score (may contain '*')
        word: String,

        /// Hand size when the word is played (default: the word's length)
        #[arg(short = 'l', long)]
        hand_length: Option<usize>,
    },

    /// Find the best word for a set of tiles
    Hint {
        /// Tiles in the hand, e.g. "c*taers"
        letters: String,
    },

    /// Play many hands automatically and report score statistics
    Benchmark {
        /// Number of hands to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { hands: None });

    match command {
        Commands::Score { word, hand_length } => {
            let result = score_word(&word, hand_length).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Play { hands } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let config = PlayConfig {
                hands,
                hand_size: cli.hand_size,
            };
            let mut console = Terminal::stdin();
            run_play(&config, &dictionary, make_rng(cli.seed), &mut console)?;
            Ok(())
        }
        Commands::Hint { letters } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let result = hint_for_letters(&letters, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_hint_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            println!("Playing {count} hands of {} tiles...", cli.hand_size);
            let result = run_benchmark(
                &dictionary,
                count,
                cli.hand_size,
                make_rng(cli.seed),
                true,
            )?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn load_dictionary(path: &str) -> Result<Dictionary> {
    println!("Loading word list from {path}...");
    let dictionary =
        load_from_file(path).with_context(|| format!("failed to load word list '{path}'"))?;
    println!("   {} words loaded.", dictionary.len());
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
