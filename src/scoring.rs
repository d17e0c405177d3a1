//! Guess scorers. Every scorer assumes the secret is uniformly distributed over the
//! candidate set.
//!
//! `expected_remaining` is exact but quadratic in the number of candidates. The two
//! entropy scorers are cheap proxies for information gain, not the Shannon entropy
//! of the feedback distribution; they only need the per-set tallies in
//! [`CandidateStats`], so a whole dictionary can be scored against one set.

use crate::feedback::{Feedback, compute_feedback};
use crate::solver::Constraints;
use crate::word::{ALPHABET_SIZE, WORD_SIZE, Word, letter_index};
use rayon::prelude::*;
use std::collections::HashMap;

/// `x * ln(x)`, taken as 0 at 0.
pub fn xlnx(x: f64) -> f64 {
    if x > 0. { x * x.ln() } else { 0. }
}

/// Mean size of the candidate set after guessing `guess`, averaged over every
/// candidate as the hypothetical secret. Lower is better.
pub fn expected_remaining(candidates: &[Word], guess: &Word) -> f64 {
    if candidates.is_empty() {
        return 0.;
    }
    // Secrets that produce the same feedback leave the same survivors.
    let mut groups: HashMap<Feedback, usize> = HashMap::new();
    for secret in candidates {
        *groups.entry(compute_feedback(secret, guess)).or_insert(0) += 1;
    }
    let groups: Vec<(Feedback, usize)> = groups.into_iter().collect();
    let total: usize = groups
        .par_iter()
        .map(|(feedback, secrets)| {
            secrets * Constraints::new(guess, feedback).count_admitted(candidates)
        })
        .sum();
    total as f64 / candidates.len() as f64
}

/// Binary entropy of "the candidate matches the guess at this position", summed
/// over positions.
pub fn position_entropy(candidates: &[Word], guess: &Word) -> f64 {
    CandidateStats::new(candidates).position_entropy(guess)
}

/// Entropy of each guess letter's occurrence-count distribution, truncated at the
/// count the guess can resolve.
pub fn distribution_entropy(candidates: &[Word], guess: &Word) -> f64 {
    CandidateStats::new(candidates).distribution_entropy(guess)
}

/// `position_entropy + distribution_entropy`. Higher is better.
pub fn combined_entropy(candidates: &[Word], guess: &Word) -> f64 {
    CandidateStats::new(candidates).combined_entropy(guess)
}

/// Letter tallies for a candidate set.
#[derive(Debug, Clone)]
pub struct CandidateStats {
    size: usize,
    // position_tallies[i][l]: candidates with letter l at position i
    position_tallies: [[u32; ALPHABET_SIZE]; WORD_SIZE],
    // count_histograms[l][k]: candidates containing letter l exactly k times
    count_histograms: [[u32; WORD_SIZE + 1]; ALPHABET_SIZE],
}

impl CandidateStats {
    pub fn new(candidates: &[Word]) -> Self {
        let mut position_tallies = [[0; ALPHABET_SIZE]; WORD_SIZE];
        let mut count_histograms = [[0; WORD_SIZE + 1]; ALPHABET_SIZE];
        for word in candidates {
            for (tally, &letter) in position_tallies.iter_mut().zip(word.letters()) {
                tally[letter_index(letter)] += 1;
            }
            let counts = word.letter_counts();
            for (i, histogram) in count_histograms.iter_mut().enumerate() {
                histogram[counts.get(b'A' + i as u8)] += 1;
            }
        }
        Self {
            size: candidates.len(),
            position_tallies,
            count_histograms,
        }
    }

    pub fn position_entropy(&self, guess: &Word) -> f64 {
        if self.size == 0 {
            return 0.;
        }
        let n = self.size as f64;
        -guess
            .letters()
            .iter()
            .zip(self.position_tallies.iter())
            .map(|(&letter, tally)| {
                let p = tally[letter_index(letter)] as f64 / n;
                xlnx(p) + xlnx(1. - p)
            })
            .sum::<f64>()
    }

    pub fn distribution_entropy(&self, guess: &Word) -> f64 {
        if self.size == 0 {
            return 0.;
        }
        let n = self.size as f64;
        // A guess holding c copies of a letter tells apart secrets with 0..c copies;
        // everything at or above c lands in one residual bucket.
        -guess
            .letter_counts()
            .iter()
            .map(|(letter, in_guess)| {
                let resolved = &self.count_histograms[letter_index(letter)][..in_guess];
                let residual = self.size as u32 - resolved.iter().sum::<u32>();
                resolved
                    .iter()
                    .chain(std::iter::once(&residual))
                    .map(|&count| xlnx(count as f64 / n))
                    .sum::<f64>()
            })
            .sum::<f64>()
    }

    pub fn combined_entropy(&self, guess: &Word) -> f64 {
        self.position_entropy(guess) + self.distribution_entropy(guess)
    }
}
