//! Dictionary loading utilities
//!
//! Reads a plain text word list, one word per line.

use super::Dictionary;
use log::info;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Could not read word list: {err}"),
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load a dictionary from a file
///
/// Blank lines and lines that are not plain `a-z` words are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use word_game::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = Dictionary::from_words(content.lines());

    if dictionary.is_empty() {
        return Err(DictionaryError::Empty);
    }

    info!("Loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_wordlist(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_game_{name}_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_one_word_per_line() {
        let path = temp_wordlist("basic", "Apple\nbanana\r\n\n  cherry  \n");
        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("banana"));
        assert!(dictionary.contains("cherry"));
    }

    #[test]
    fn empty_file_is_an_error() {
        let path = temp_wordlist("empty", "\n\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/real/words.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }
}
