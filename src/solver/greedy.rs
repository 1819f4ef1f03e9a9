//! Automated player that always takes the best word

use super::best_word;
use crate::game::{Console, END_HAND, Notice, Prompt};
use crate::wordlists::Dictionary;
use log::debug;
use std::io;

/// A `Console` that plays every hand greedily
///
/// Plays the best word available until none is left, then ends the hand.
/// Declines both the substitution and the replay.
pub struct GreedyPlayer<'a> {
    dictionary: &'a Dictionary,
    hands: u32,
}

impl<'a> GreedyPlayer<'a> {
    /// Create a player that answers the hand-count prompt with `hands`
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, hands: u32) -> Self {
        Self { dictionary, hands }
    }
}

impl Console for GreedyPlayer<'_> {
    fn request(&mut self, prompt: Prompt) -> io::Result<String> {
        let answer = match prompt {
            Prompt::HandCount => self.hands.to_string(),
            Prompt::Word { hand } => best_word(&hand, self.dictionary)
                .map_or_else(|| END_HAND.to_string(), |hint| hint.word),
            Prompt::OfferSubstitution | Prompt::OfferReplay => "no".to_string(),
            Prompt::SubstituteLetter => String::new(),
        };
        Ok(answer)
    }

    fn notify(&mut self, notice: Notice) {
        if let Notice::WordScored { word, score, .. } = notice {
            debug!("Greedy player scored {score} with {word:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;
    use crate::game::{GameSeries, HandSession};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn plays_best_word_then_stops() {
        let dictionary = Dictionary::from_words(["cat", "tax", "ax"]);
        let mut player = GreedyPlayer::new(&dictionary, 1);

        let session = HandSession::new(Hand::from_letters("catx*"), &dictionary);
        let total = session.play(&mut player).unwrap();

        // tax: 10 * (21 - 6) = 150, leaves "c*" which spells nothing
        assert_eq!(total, 150);
    }

    #[test]
    fn declines_bonuses() {
        let dictionary = Dictionary::from_words(["cat"]);
        let mut player = GreedyPlayer::new(&dictionary, 2);

        assert_eq!(player.request(Prompt::OfferSubstitution).unwrap(), "no");
        assert_eq!(player.request(Prompt::OfferReplay).unwrap(), "no");
        assert_eq!(player.request(Prompt::HandCount).unwrap(), "2");
    }

    #[test]
    fn finishes_a_series() {
        let dictionary = Dictionary::from_words(["a", "i", "o", "e", "u"]);
        let mut player = GreedyPlayer::new(&dictionary, 4);
        let mut series = GameSeries::new(&dictionary, StdRng::seed_from_u64(5));

        let total = series.play(4, &mut player).unwrap();

        assert_eq!(series.state().hands_played, 4);
        assert!(!series.state().used_substitution);
        assert!(!series.state().used_replay);
        // every 7-tile hand holds two vowels, each a one-letter word
        assert!(total >= 8);
    }
}
