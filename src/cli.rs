use crate::error::{Error, Result};
use crate::game_state::GameInterface;
use crate::solver::{DEFAULT_EXACT_THRESHOLD, Recommendation, SolverConfig};
use crate::word::{WORD_SIZE, Word};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Word-guessing game solver: recommends the guess that reveals the most
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Letters per word; must match the compiled-in size
    #[arg(long = "word-size", default_value_t = WORD_SIZE, global = true)]
    pub word_size: usize,

    /// Path to the newline-delimited list of possible solutions
    #[arg(short = 's', long = "solutions", global = true)]
    pub solutions_path: Option<PathBuf>,

    /// Path to the newline-delimited list of all allowed guesses
    #[arg(short = 'd', long = "dictionary", global = true)]
    pub dictionary_path: Option<PathBuf>,

    /// Candidate sets up to this size are scored exactly
    #[arg(long, default_value_t = DEFAULT_EXACT_THRESHOLD, global = true)]
    pub exact_threshold: usize,

    /// Score exactly the top N guesses by entropy from the dictionary and from the
    /// remaining solutions, instead of switching policy on set size
    #[arg(long, value_name = "N", global = true)]
    pub shortlist: Option<usize>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the scripted demonstration and print scoring diagnostics
    Test,
    /// Play interactively, entering each guess and its feedback
    Live {
        /// Opening guess; skips the first recommendation
        #[arg(long)]
        first_guess: Option<String>,
    },
}

impl Cli {
    pub fn check_word_size(&self) -> Result<()> {
        if self.word_size == WORD_SIZE {
            Ok(())
        } else {
            Err(Error::UnsupportedWordSize {
                requested: self.word_size,
                supported: WORD_SIZE,
            })
        }
    }

    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            exact_threshold: self.exact_threshold,
            shortlist: self.shortlist,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Remaining solutions are listed in full below this count.
const LIST_REMAINING_BELOW: usize = 8;

/// Console implementation of the GameInterface trait
/// This struct wraps a BufRead reader and a writer for prompts and results
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

fn join_words(words: &[Word], separator: &str) -> String {
    words
        .iter()
        .map(Word::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_recommendation(&mut self, recommendation: &Recommendation) -> Result<()> {
        writeln!(self.writer, "Recommended guess: {recommendation}")?;
        Ok(())
    }

    fn read_guess(&mut self) -> Result<Option<String>> {
        self.prompt("Enter guess (blank for recommended): ")
    }

    fn read_feedback(&mut self, guess: &Word) -> Result<Option<String>> {
        self.prompt(&format!(
            "Enter feedback for {guess} (- absent, + present, * exact): "
        ))
    }

    fn display_remaining(&mut self, candidates: &[Word]) -> Result<()> {
        writeln!(self.writer, "{} possible solutions remain", candidates.len())?;
        if candidates.len() < LIST_REMAINING_BELOW {
            writeln!(self.writer, "{}", join_words(candidates, "\t"))?;
        }
        Ok(())
    }

    fn display_no_solutions(&mut self, extended: &[Word]) -> Result<()> {
        writeln!(self.writer, "No valid solutions")?;
        if !extended.is_empty() {
            writeln!(self.writer, "Possible extended options:")?;
            writeln!(self.writer, "{}", join_words(extended, " "))?;
        }
        Ok(())
    }

    fn display_solution(&mut self, solution: &Word) -> Result<()> {
        writeln!(self.writer, "Solution: {solution}")?;
        Ok(())
    }
}
