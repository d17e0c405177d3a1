use crate::debug_log;
use crate::feedback::{Feedback, Mark};
use crate::letters::LetterMultiset;
use crate::scoring::{CandidateStats, expected_remaining};
use crate::word::Word;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Candidate sets at or below this size are scored exactly.
pub const DEFAULT_EXACT_THRESHOLD: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest candidate set scored with the exact expected-remaining policy
    pub exact_threshold: usize,
    /// When set, score exactly a shortlist of this many top-entropy guesses from
    /// both the guess pool and the candidates, whatever the set size
    pub shortlist: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            shortlist: None,
        }
    }
}

/// What a guess/feedback pair says about the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    exact: Vec<(usize, u8)>,
    misplaced: Vec<(usize, u8)>,
    /// Minimum count of each letter known to be in the secret
    pool: LetterMultiset,
    /// Letters known not to be in the secret at all
    excluded: Vec<u8>,
    /// Exact counts for letters that were both matched and marked absent
    limits: Vec<(u8, usize)>,
}

impl Constraints {
    pub fn new(guess: &Word, feedback: &Feedback) -> Self {
        let pool = feedback.letter_pool(guess);
        let mut exact = Vec::new();
        let mut misplaced = Vec::new();
        let mut absent: Vec<u8> = Vec::new();
        for (i, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Exact => exact.push((i, letter)),
                Mark::Present => misplaced.push((i, letter)),
                Mark::Absent => {
                    if !absent.contains(&letter) {
                        absent.push(letter);
                    }
                }
            }
        }
        // An absent mark on a letter matched elsewhere caps its count instead of
        // ruling it out.
        let (limited, excluded): (Vec<u8>, Vec<u8>) =
            absent.into_iter().partition(|&letter| pool.contains(letter));
        let limits = limited
            .into_iter()
            .map(|letter| (letter, pool.get(letter)))
            .collect();
        Self {
            exact,
            misplaced,
            pool,
            excluded,
            limits,
        }
    }

    /// True if `word` could still be the secret.
    pub fn admits(&self, word: &Word) -> bool {
        if !self.exact.iter().all(|&(i, letter)| word.letter(i) == letter) {
            return false;
        }
        let counts = word.letter_counts();
        !self.excluded.iter().any(|&letter| counts.contains(letter))
            && counts.dominates(&self.pool)
            && !self.misplaced.iter().any(|&(i, letter)| word.letter(i) == letter)
            && self
                .limits
                .iter()
                .all(|&(letter, limit)| counts.get(letter) <= limit)
    }

    pub fn count_admitted(&self, candidates: &[Word]) -> usize {
        candidates.iter().filter(|word| self.admits(word)).count()
    }
}

/// The candidates still consistent with `guess` having received `feedback`, in
/// their original order.
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let constraints = Constraints::new(guess, feedback);
    let filtered: Vec<Word> = candidates
        .iter()
        .filter(|word| constraints.admits(word))
        .copied()
        .collect();
    debug_log!(
        "{guess} {feedback}: {} -> {} candidates",
        candidates.len(),
        filtered.len()
    );
    filtered
}

/// How a recommendation was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Mean remaining candidates, exact; lower is better
    ExpectedRemaining,
    /// Position plus letter-count entropy proxy; higher is better
    Entropy,
}

impl Policy {
    /// Orders scores best first.
    fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Policy::ExpectedRemaining => a.total_cmp(&b),
            Policy::Entropy => b.total_cmp(&a),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub guess: Word,
    pub score: f64,
    pub policy: Policy,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.policy {
            Policy::ExpectedRemaining => {
                write!(f, "{} ({:.2} expected remaining)", self.guess, self.score)
            }
            Policy::Entropy => write!(f, "{} ({:.2} approx. entropy)", self.guess, self.score),
        }
    }
}

/// The `n` words of `words` with the highest combined entropy, best first.
fn top_by_entropy(stats: &CandidateStats, words: &[Word], n: usize) -> Vec<Word> {
    let mut scored: Vec<(Word, f64)> = words
        .par_iter()
        .map(|word| (*word, stats.combined_entropy(word)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(n);
    scored.into_iter().map(|(word, _)| word).collect()
}

/// Guesses worth scoring exactly: the `n` best of the guess pool by combined
/// entropy, then the `n` best of the candidates, without repeats.
///
/// Candidates are ranked on their own so a likely solution is not crowded out by
/// a much larger dictionary.
pub fn shortlist_guesses(candidates: &[Word], guess_pool: &[Word], n: usize) -> Vec<Word> {
    let stats = CandidateStats::new(candidates);
    let mut seen = HashSet::new();
    top_by_entropy(&stats, guess_pool, n)
        .into_iter()
        .chain(top_by_entropy(&stats, candidates, n))
        .filter(|word| seen.insert(*word))
        .collect()
}

fn score_exactly(candidates: &[Word], guesses: &[Word]) -> Vec<Recommendation> {
    guesses
        .par_iter()
        .map(|guess| Recommendation {
            guess: *guess,
            score: expected_remaining(candidates, guess),
            policy: Policy::ExpectedRemaining,
        })
        .collect()
}

/// Scores every eligible guess in its original order.
///
/// With a shortlist configured, the shortlist is scored exactly. Otherwise small
/// candidate sets are scored exactly against themselves and large ones with the
/// entropy proxy against the whole guess pool.
fn score_guesses(
    candidates: &[Word],
    guess_pool: &[Word],
    config: &SolverConfig,
) -> Vec<Recommendation> {
    match config.shortlist {
        Some(n) if !candidates.is_empty() => {
            let shortlist = shortlist_guesses(candidates, guess_pool, n);
            debug_log!("shortlisted {} guesses", shortlist.len());
            score_exactly(candidates, &shortlist)
        }
        _ if candidates.len() <= config.exact_threshold => score_exactly(candidates, candidates),
        _ => {
            let stats = CandidateStats::new(candidates);
            guess_pool
                .par_iter()
                .map(|guess| Recommendation {
                    guess: *guess,
                    score: stats.combined_entropy(guess),
                    policy: Policy::Entropy,
                })
                .collect()
        }
    }
}

/// The best next guess, or `None` if there is nothing to choose from.
///
/// Ties go to the guess seen first.
pub fn select_guess(
    candidates: &[Word],
    guess_pool: &[Word],
    config: &SolverConfig,
) -> Option<Recommendation> {
    let scored = score_guesses(candidates, guess_pool, config);
    debug_log!(
        "scored {} guesses against {} candidates",
        scored.len(),
        candidates.len()
    );
    scored.into_iter().reduce(|best, next| {
        if best.policy.compare(next.score, best.score) == Ordering::Less {
            next
        } else {
            best
        }
    })
}

/// The `n` best guesses, best first, under the same policy as [`select_guess`].
pub fn rank_guesses(
    candidates: &[Word],
    guess_pool: &[Word],
    config: &SolverConfig,
    n: usize,
) -> Vec<Recommendation> {
    let mut scored = score_guesses(candidates, guess_pool, config);
    // Stable, so ties keep pool order.
    scored.sort_by(|a, b| a.policy.compare(a.score, b.score));
    scored.truncate(n);
    scored
}
