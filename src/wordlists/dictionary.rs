//! Immutable set of playable words

use rustc_hash::FxHashSet;

/// Set of valid lowercase words
///
/// Built once and then shared read-only by validation and the hint finder.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed and lowercased. Empty entries and entries with characters
    /// outside `a-z` are skipped, so the wildcard can never be a dictionary letter.
    ///
    /// # Examples
    /// ```
    /// use word_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Apple", " pear ", "", "c*t"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("apple"));
    /// assert!(!dictionary.contains("c*t"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();
        Self { words }
    }

    /// Check membership of an already-lowercased word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_ascii_lowercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        None
    } else {
        Some(word)
    }
}
