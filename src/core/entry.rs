//! Practice word representation
//!
//! A `WordEntry` pairs a word with the hint shown to the player, validated
//! and normalized at construction so the rest of the crate can assume
//! lowercase alphabetic text.

use std::fmt;

/// A practice word together with its hint
///
/// The word is stored lowercase and is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
}

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyWord,
    NonAscii,
    InvalidCharacters,
    EmptyHint,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains non-alphabetic characters"),
            Self::EmptyHint => write!(f, "Hint must not be empty"),
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create a new entry from a word and its hint
    ///
    /// The word is folded to lowercase; surrounding whitespace is trimmed
    /// from both fields.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The word is empty after trimming
    /// - The word contains non-ASCII or non-alphabetic characters
    /// - The hint is empty after trimming
    ///
    /// # Examples
    /// ```
    /// use spellsprout::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Drum", "A musical instrument you hit").unwrap();
    /// assert_eq!(entry.word(), "drum");
    ///
    /// assert!(WordEntry::new("dr um", "two words").is_err());
    /// assert!(WordEntry::new("", "no word").is_err());
    /// ```
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Result<Self, EntryError> {
        let word: String = word.into().trim().to_lowercase();
        let hint: String = hint.into().trim().to_string();

        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        if !word.is_ascii() {
            return Err(EntryError::NonAscii);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(EntryError::InvalidCharacters);
        }

        if hint.is_empty() {
            return Err(EntryError::EmptyHint);
        }

        Ok(Self { word, hint })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the hint shown to the player
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Whether the word is empty (never true for a constructed entry)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("clock", "Tells you the time on the wall").unwrap();
        assert_eq!(entry.word(), "clock");
        assert_eq!(entry.hint(), "Tells you the time on the wall");
        assert_eq!(entry.len(), 5);
        assert!(!entry.is_empty());
    }

    #[test]
    fn entry_creation_uppercase_normalized() {
        let entry = WordEntry::new("CLOCK", "hint").unwrap();
        assert_eq!(entry.word(), "clock");

        let entry2 = WordEntry::new("ClOcK", "hint").unwrap();
        assert_eq!(entry2.word(), "clock");
    }

    #[test]
    fn entry_creation_trims_whitespace() {
        let entry = WordEntry::new("  drum  ", "  A musical instrument  ").unwrap();
        assert_eq!(entry.word(), "drum");
        assert_eq!(entry.hint(), "A musical instrument");
    }

    #[test]
    fn entry_creation_empty_word() {
        assert!(matches!(WordEntry::new("", "hint"), Err(EntryError::EmptyWord)));
        assert!(matches!(WordEntry::new("   ", "hint"), Err(EntryError::EmptyWord)));
    }

    #[test]
    fn entry_creation_invalid_characters() {
        assert!(WordEntry::new("dru3", "hint").is_err()); // Number
        assert!(WordEntry::new("dr um", "hint").is_err()); // Inner space
        assert!(WordEntry::new("drum!", "hint").is_err()); // Punctuation
    }

    #[test]
    fn entry_creation_empty_hint() {
        assert!(matches!(WordEntry::new("drum", ""), Err(EntryError::EmptyHint)));
        assert!(matches!(WordEntry::new("drum", "  "), Err(EntryError::EmptyHint)));
    }

    #[test]
    fn entry_short_words_allowed() {
        // Single-letter and very short words are valid entries
        assert!(WordEntry::new("a", "the first letter").is_ok());
        assert!(WordEntry::new("why", "ask for a reason").is_ok());
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("flex", "To bend or stretch your muscles").unwrap();
        assert_eq!(format!("{entry}"), "flex");
    }

    #[test]
    fn entry_equality() {
        let a = WordEntry::new("twin", "one of two").unwrap();
        let b = WordEntry::new("TWIN", "one of two").unwrap();
        let c = WordEntry::new("twin", "a different hint").unwrap();

        assert_eq!(a, b); // Case insensitive word
        assert_ne!(a, c); // Hint participates in equality
    }
}
