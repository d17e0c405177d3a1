use crate::error::Result;
use crate::feedback::Feedback;
use crate::solver::{Recommendation, SolverConfig, filter_candidates, select_guess};
use crate::word::Word;
use crate::wordbank::WordLists;
use crate::{debug_log, info_log};

/// How the front end talks to the player. `read_*` return `None` once input is
/// exhausted.
pub trait GameInterface {
    fn display_recommendation(&mut self, recommendation: &Recommendation) -> Result<()>;
    /// Raw guess text; blank accepts the recommendation.
    fn read_guess(&mut self) -> Result<Option<String>>;
    /// Raw feedback text for `guess`.
    fn read_feedback(&mut self, guess: &Word) -> Result<Option<String>>;
    fn display_remaining(&mut self, candidates: &[Word]) -> Result<()>;
    /// `extended` holds dictionary words that still fit every turn played.
    fn display_no_solutions(&mut self, extended: &[Word]) -> Result<()>;
    fn display_solution(&mut self, solution: &Word) -> Result<()>;
}

/// Guesses played so far and the feedback each received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    turns: Vec<(Word, Feedback)>,
}

impl GameHistory {
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.turns.push((guess, feedback));
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The words consistent with every recorded turn.
    pub fn replay(&self, words: &[Word]) -> Vec<Word> {
        self.turns
            .iter()
            .fold(words.to_vec(), |remaining, (guess, feedback)| {
                filter_candidates(&remaining, guess, feedback)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Solved(Word),
    /// The feedback contradicts every solution
    NoSolutions { extended: Vec<Word> },
    /// Input ended before the game did
    Abandoned,
}

/// Play one game: recommend, read a guess and its feedback, narrow the solutions,
/// and repeat until one or none remain.
///
/// `first_guess` skips the opening recommendation and asks straight for that
/// word's feedback.
pub fn game_loop<I: GameInterface>(
    lists: &WordLists,
    config: &SolverConfig,
    first_guess: Option<Word>,
    interface: &mut I,
) -> Result<GameOutcome> {
    let mut candidates = lists.solutions.clone();
    let mut history = GameHistory::default();
    let mut pending = first_guess;

    loop {
        if let Some(outcome) = check_game_state(&candidates, lists, &history, interface)? {
            info_log!("game over after {} guesses: {outcome:?}", history.len());
            return Ok(outcome);
        }

        let guess = match pending.take() {
            Some(guess) => guess,
            None => {
                let recommendation = select_guess(&candidates, &lists.guess_pool, config);
                if let Some(recommendation) = &recommendation {
                    interface.display_recommendation(recommendation)?;
                }
                let Some(input) = interface.read_guess()? else {
                    return Ok(GameOutcome::Abandoned);
                };
                match (input.trim(), recommendation) {
                    ("", Some(recommendation)) => recommendation.guess,
                    (text, _) => Word::parse(text)?,
                }
            }
        };

        let Some(input) = interface.read_feedback(&guess)? else {
            return Ok(GameOutcome::Abandoned);
        };
        let feedback = Feedback::parse(input.trim())?;
        debug_log!("turn {}: {guess} {feedback}", history.len() + 1);

        candidates = filter_candidates(&candidates, &guess, &feedback);
        history.record(guess, feedback);
        if candidates.len() > 1 {
            interface.display_remaining(&candidates)?;
        }
    }
}

fn check_game_state<I: GameInterface>(
    candidates: &[Word],
    lists: &WordLists,
    history: &GameHistory,
    interface: &mut I,
) -> Result<Option<GameOutcome>> {
    match candidates {
        [] => {
            let extended = history.replay(&lists.guess_pool);
            interface.display_no_solutions(&extended)?;
            Ok(Some(GameOutcome::NoSolutions { extended }))
        }
        [solution] => {
            interface.display_solution(solution)?;
            Ok(Some(GameOutcome::Solved(*solution)))
        }
        _ => Ok(None),
    }
}
