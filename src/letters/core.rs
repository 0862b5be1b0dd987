use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::letters::errors::LettersError;
use crate::utils::{Multiset, validate_max_results};

/// A word that can be spelt from the letters, scored by its length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub score: usize,
    pub word: String,
}

impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.score, self.word)
    }
}

/// Trim surrounding whitespace and upper-case
pub fn normalise_letters(letters: &str) -> String {
    letters.trim().to_uppercase()
}

/// Whether `word` uses no letter more often than `letters` provides
pub fn is_valid(word: &str, letters: &str) -> bool {
    let available: Multiset<char> = letters.chars().collect();
    available.contains(&word.chars().collect())
}

/// Read a word list, one word per line, skipping blank lines
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, LettersError> {
    let contents = fs::read_to_string(path).map_err(|source| LettersError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(normalise_letters)
        .filter(|word| !word.is_empty())
        .collect();

    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Keep the words that can be spelt from `letters`, longest first.
///
/// Words of equal length keep their word-list order.
///
/// # Errors
///
/// Returns an error if `letters` is blank or `max_results` is zero.
pub fn find_words<S: AsRef<str>>(
    words: &[S],
    letters: &str,
    max_results: usize,
) -> Result<Vec<WordMatch>, LettersError> {
    let letters = normalise_letters(letters);
    if letters.is_empty() {
        warn!("Letters are empty");
        return Err(LettersError::EmptyLetters);
    }
    validate_max_results(max_results)?;

    info!(
        "Searching {} words for those spelt from '{}'",
        words.len(),
        letters
    );

    let available: Multiset<char> = letters.chars().collect();
    let mut matches: Vec<WordMatch> = words
        .iter()
        .map(|word| normalise_letters(word.as_ref()))
        .filter(|word| !word.is_empty() && available.contains(&word.chars().collect()))
        .map(|word| WordMatch {
            score: word.chars().count(),
            word,
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(max_results);

    match matches.first() {
        Some(best) => info!("Longest word: {} ({} letters)", best.word, best.score),
        None => warn!("No words found"),
    }

    Ok(matches)
}
