//! The `test` subcommand: a fixed walk through feedback, filtering and scoring
//! against the loaded solution list.

use crate::error::Result;
use crate::feedback::compute_feedback;
use crate::scoring::{CandidateStats, expected_remaining};
use crate::solver::{SolverConfig, filter_candidates, rank_guesses};
use crate::word::Word;
use std::io::Write;

pub const DEMO_SECRET: &str = "OCEAN";
pub const DEMO_GUESS: &str = "KAZOO";

/// Opening guesses compared in the diagnostics table.
pub const SAMPLE_GUESSES: [&str; 13] = [
    "RAISE", "RILES", "SLATE", "IRATE", "ROAST", "NOTES", "RESIN", "TARES", "SENOR", "SAINT",
    "WHINY", "MAMMA", "TATTY",
];

const SHOWN_SURVIVORS: usize = 24;
const LEADERBOARD_SIZE: usize = 5;

pub fn run_demo<W: Write>(solutions: &[Word], config: &SolverConfig, out: &mut W) -> Result<()> {
    let secret = Word::parse(DEMO_SECRET)?;
    let guess = Word::parse(DEMO_GUESS)?;
    let feedback = compute_feedback(&secret, &guess);
    writeln!(out, "{secret}")?;
    writeln!(out, "{guess}")?;
    writeln!(out, "{feedback}")?;

    if solutions.is_empty() {
        writeln!(out, "No solutions loaded")?;
        return Ok(());
    }
    let n_solutions = solutions.len();
    let initial_entropy = (n_solutions as f64).ln();
    writeln!(out, "{n_solutions}")?;
    writeln!(out, "{initial_entropy:.4}")?;

    let reduced = filter_candidates(solutions, &guess, &feedback);
    writeln!(out, "{}", reduced.len())?;
    let shown: Vec<String> = reduced
        .iter()
        .take(SHOWN_SURVIVORS)
        .map(Word::to_string)
        .collect();
    writeln!(out, "{shown:?}")?;

    let stats = CandidateStats::new(solutions);
    // First-seen maximizer, same tie rule as the selector.
    let mut best: Option<(Word, f64)> = None;
    for word in solutions {
        let score = stats.combined_entropy(word);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((*word, score));
        }
    }
    if let Some((word, score)) = best {
        writeln!(out, "Max entropy: {word} ({score:.2})")?;
    }

    writeln!(out, "Top guesses:")?;
    for recommendation in rank_guesses(solutions, solutions, config, LEADERBOARD_SIZE) {
        writeln!(out, "  {recommendation}")?;
    }

    writeln!(out, "guess\texpect\tinfo\tcombined\tposition\tdistribution")?;
    for sample in SAMPLE_GUESSES {
        let guess = Word::parse(sample)?;
        let avg_left = expected_remaining(solutions, &guess);
        let exact_info = initial_entropy - avg_left.ln();
        let position = stats.position_entropy(&guess);
        let distribution = stats.distribution_entropy(&guess);
        writeln!(
            out,
            "{guess}:\t{avg_left:.2}\t{exact_info:.2}\t{:.2}\t{position:.2}\t{distribution:.2}",
            position + distribution
        )?;
    }
    Ok(())
}
