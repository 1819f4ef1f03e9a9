//! Player-facing input and output
//!
//! The game engine never touches stdin or stdout directly. It asks a `Console` for
//! input with a `Prompt` and reports what happened with a `Notice`.

use crate::core::Hand;
use crate::output::print_notice;
use std::io::{self, BufRead, Write};

/// A request for one line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// How many hands to play in the series
    HandCount,
    /// A word to play from `hand`, or the end-of-hand sentinel
    Word { hand: Hand },
    /// Whether to use the one-time letter substitution
    OfferSubstitution,
    /// Which letter to substitute
    SubstituteLetter,
    /// Whether to use the one-time hand replay
    OfferReplay,
}

impl Prompt {
    /// Prompt text shown to a human player
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::HandCount => "Enter total number of hands",
            Self::Word { .. } => "Enter word, or \"!!\" to indicate that you are finished",
            Self::OfferSubstitution => "Would you like to substitute a letter? (yes/no)",
            Self::SubstituteLetter => "Which letter would you like to replace",
            Self::OfferReplay => "Would you like to replay the hand? (yes/no)",
        }
    }
}

/// Something the engine reports back to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The current hand
    Hand(Hand),
    InvalidWord(String),
    WordScored { word: String, score: u32, total: u32 },
    OutOfLetters,
    HandTotal(u32),
    SeriesTotal(u32),
    Divider,
}

/// Input/output collaborator driven by the game engine
pub trait Console {
    /// Ask for one line of input
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no more input is available.
    fn request(&mut self, prompt: Prompt) -> io::Result<String>;

    /// Report an event to the player
    fn notify(&mut self, notice: Notice);
}

/// Parse a yes/no answer; anything other than `y`/`yes` is a no
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Interactive console on stdin/stdout
pub struct Terminal<R = io::StdinLock<'static>> {
    input: R,
}

impl Terminal {
    #[must_use]
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Terminal<R> {
    /// Console reading from any buffered source
    pub const fn with_input(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Console for Terminal<R> {
    fn request(&mut self, prompt: Prompt) -> io::Result<String> {
        print!("{}: ", prompt.text());
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn notify(&mut self, notice: Notice) {
        print_notice(&notice);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Console, Notice, Prompt};
    use std::collections::VecDeque;
    use std::io;

    /// Console that replays canned answers and records everything it sees
    #[derive(Debug, Default)]
    pub struct Scripted {
        answers: VecDeque<String>,
        pub prompts: Vec<Prompt>,
        pub notices: Vec<Notice>,
    }

    impl Scripted {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(ToString::to_string).collect(),
                ..Self::default()
            }
        }

        pub fn count_prompts(&self, wanted: &Prompt) -> usize {
            self.prompts
                .iter()
                .filter(|p| std::mem::discriminant(*p) == std::mem::discriminant(wanted))
                .count()
        }

        pub fn count_notices(&self, wanted: &Notice) -> usize {
            self.notices
                .iter()
                .filter(|n| std::mem::discriminant(*n) == std::mem::discriminant(wanted))
                .count()
        }
    }

    impl Console for Scripted {
        fn request(&mut self, prompt: Prompt) -> io::Result<String> {
            self.prompts.push(prompt);
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("yes"));
        assert!(is_yes("Y"));
        assert!(is_yes("  YES \n"));
    }

    #[test]
    fn everything_else_is_no() {
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
        assert!(!is_yes("yeah"));
        assert!(!is_yes("es"));
    }

    #[test]
    fn terminal_reads_lines_without_newline() {
        let mut console = Terminal::with_input(io::Cursor::new("hello\r\n!!\n"));
        assert_eq!(console.request(Prompt::OfferReplay).unwrap(), "hello");
        assert_eq!(console.request(Prompt::OfferReplay).unwrap(), "!!");
    }

    #[test]
    fn terminal_eof_is_error() {
        let mut console = Terminal::with_input(io::Cursor::new(""));
        let err = console.request(Prompt::HandCount).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn word_prompt_mentions_sentinel() {
        let prompt = Prompt::Word { hand: Hand::new() };
        assert!(prompt.text().contains("\"!!\""));
    }
}
