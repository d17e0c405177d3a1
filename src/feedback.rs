//! Feedback marks and the feedback a guess receives against a secret.

use crate::error::{Error, Result};
use crate::letters::LetterMultiset;
use crate::word::{WORD_SIZE, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not present among the secret's unmatched letters (`-`)
    Absent,
    /// Letter present elsewhere in the secret (`+`)
    Present,
    /// Letter at this exact position (`*`)
    Exact,
}

impl Mark {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Mark::Absent),
            '+' => Some(Mark::Present),
            '*' => Some(Mark::Exact),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Absent => '-',
            Mark::Present => '+',
            Mark::Exact => '*',
        }
    }
}

/// The marks for a whole guess, one per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_SIZE]);

impl Feedback {
    /// Parse a feedback string such as `-+*--`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidFeedback {
            feedback: text.to_string(),
            expected: WORD_SIZE,
        };
        let marks: Vec<Mark> = text
            .chars()
            .map(Mark::from_char)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        let marks: [Mark; WORD_SIZE] = marks.try_into().map_err(|_| invalid())?;
        Ok(Self(marks))
    }

    pub fn marks(&self) -> &[Mark; WORD_SIZE] {
        &self.0
    }

    /// Letters of `guess` that received a non-`Absent` mark.
    pub fn letter_pool(&self, guess: &Word) -> LetterMultiset {
        guess
            .letters()
            .iter()
            .zip(self.0.iter())
            .filter(|&(_, &mark)| mark != Mark::Absent)
            .map(|(&letter, _)| letter)
            .collect()
    }
}

impl FromStr for Feedback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Feedback that `guess` receives when the hidden word is `secret`.
///
/// Exact matches are marked first and consume the letter's shared budget, the
/// min-count intersection of the two words. Remaining budget is handed out as
/// `Present` marks left to right, so a letter never collects more
/// `Exact` + `Present` marks than `min(count in secret, count in guess)`.
pub fn compute_feedback(secret: &Word, guess: &Word) -> Feedback {
    let exact: [bool; WORD_SIZE] = std::array::from_fn(|i| secret.letter(i) == guess.letter(i));
    let matched: LetterMultiset = guess
        .letters()
        .iter()
        .zip(exact)
        .filter(|&(_, is_exact)| is_exact)
        .map(|(&letter, _)| letter)
        .collect();
    let mut budget = (secret.letter_counts() & guess.letter_counts()) - matched;

    let mut marks = [Mark::Absent; WORD_SIZE];
    for (i, &letter) in guess.letters().iter().enumerate() {
        if exact[i] {
            marks[i] = Mark::Exact;
        } else if budget.contains(letter) {
            marks[i] = Mark::Present;
            budget = budget.without_one(letter);
        }
    }
    Feedback(marks)
}
