//! Fixed-length words over the uppercase ASCII alphabet.

use crate::error::{Error, Result};
use crate::letters::LetterMultiset;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word handled by this build.
pub const WORD_SIZE: usize = 5;

/// Number of distinct letters (`A` through `Z`).
pub const ALPHABET_SIZE: usize = 26;

/// A `WORD_SIZE`-letter word, stored as uppercase ASCII bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_SIZE]);

impl Word {
    /// Parse a word, normalizing it to uppercase.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidWord {
            word: text.to_string(),
            expected: WORD_SIZE,
        };
        let bytes: [u8; WORD_SIZE] = text.as_bytes().try_into().map_err(|_| invalid())?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(invalid());
        }
        Ok(Self(bytes.map(|b| b.to_ascii_uppercase())))
    }

    pub fn letters(&self) -> &[u8; WORD_SIZE] {
        &self.0
    }

    pub fn letter(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn letter_counts(&self) -> LetterMultiset {
        self.0.iter().copied().collect()
    }

    pub fn count_of(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }
}

/// Position of an uppercase letter in the alphabet.
pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}

/// Parse a list of words, failing on the first invalid one.
pub fn parse_words<I, S>(words: I) -> Result<Vec<Word>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| Word::parse(w.as_ref())).collect()
}
