//! Letter multisets, the "letter pool" arithmetic behind feedback and filtering.

use crate::word::{ALPHABET_SIZE, letter_index};
use std::ops::{BitAnd, Sub};

/// Slot for an uppercase ASCII letter, `None` for any other byte.
fn slot(letter: u8) -> Option<usize> {
    letter.is_ascii_uppercase().then(|| letter_index(letter))
}

/// Occurrence count per letter. A plain value: every operation returns a new multiset.
///
/// Only `A` through `Z` are counted; other bytes read as zero and are ignored
/// when added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterMultiset([u8; ALPHABET_SIZE]);

impl LetterMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: u8) -> usize {
        slot(letter).map_or(0, |i| self.0[i] as usize)
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.get(letter) > 0
    }

    /// A copy with one more `letter`.
    pub fn with(mut self, letter: u8) -> Self {
        if let Some(i) = slot(letter) {
            self.0[i] = self.0[i].saturating_add(1);
        }
        self
    }

    /// A copy with one fewer `letter`, saturating at zero.
    pub fn without_one(mut self, letter: u8) -> Self {
        if let Some(i) = slot(letter) {
            self.0[i] = self.0[i].saturating_sub(1);
        }
        self
    }

    /// True if every letter occurs at least as often here as in `other`.
    pub fn dominates(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    /// Letters with a non-zero count, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, &n)| (b'A' + i as u8, n as usize))
    }
}

impl FromIterator<u8> for LetterMultiset {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

/// Min-count intersection.
impl BitAnd for LetterMultiset {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].min(rhs.0[i])))
    }
}

/// Saturating difference.
impl Sub for LetterMultiset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].saturating_sub(rhs.0[i])))
    }
}
