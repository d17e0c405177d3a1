//! Next-guess recommendations for five-letter word games: feedback, candidate
//! filtering, guess scoring and the console session built on them.

pub mod cli;
pub mod demo;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod letters;
pub mod logging;
pub mod scoring;
pub mod solver;
pub mod word;
pub mod wordbank;

pub use error::{Error, Result};
pub use feedback::{Feedback, Mark, compute_feedback};
pub use game_state::{GameHistory, GameInterface, GameOutcome, game_loop};
pub use letters::LetterMultiset;
pub use scoring::{
    CandidateStats, combined_entropy, distribution_entropy, expected_remaining, position_entropy,
};
pub use solver::{
    Constraints, Policy, Recommendation, SolverConfig, filter_candidates, rank_guesses,
    select_guess, shortlist_guesses,
};
pub use word::{WORD_SIZE, Word, parse_words};
pub use wordbank::{WordLists, load_wordbank_from_file, load_wordbank_from_str};
