use crate::error::{Error, Result};
use crate::info_log;
use crate::word::Word;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const SOLUTIONS_FILE: &str = "wordle_solutions.txt";
pub const DICTIONARY_FILE: &str = "wordle_complete_dictionary.txt";

/// Directory searched relative to the working directory.
const LOCAL_DICT_DIR: &str = "dict";
/// Directory under the user's data dir, e.g. `~/.local/share/wordle-entropy`.
const DATA_DIR_NAME: &str = "wordle-entropy";

/// Parse one word per line. Blank lines are skipped and repeats dropped.
pub fn load_wordbank_from_str(data: &str) -> Result<Vec<Word>> {
    let lines = data.lines().map(|line| Ok(line.to_string()));
    collect_words(lines, None)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let words = collect_words(reader.lines(), Some(path))?;
    info_log!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn collect_words<I>(lines: I, path: Option<&Path>) -> Result<Vec<Word>>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::parse(trimmed).map_err(|e| Error::WordList {
            path: path.map_or_else(|| PathBuf::from("<input>"), Path::to_path_buf),
            line: i + 1,
            source: Box::new(e),
        })?;
        if seen.insert(word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Where a word list is looked for, in order: `explicit`, `./dict/<name>`, then
/// `<data dir>/wordle-entropy/<name>`.
pub fn word_list_locations(explicit: Option<&Path>, name: &str) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    let mut locations = vec![Path::new(LOCAL_DICT_DIR).join(name)];
    if let Some(data_dir) = dirs::data_dir() {
        locations.push(data_dir.join(DATA_DIR_NAME).join(name));
    }
    locations
}

/// First existing location for a word list.
pub fn resolve_word_list(explicit: Option<&Path>, name: &str) -> Result<PathBuf> {
    word_list_locations(explicit, name)
        .into_iter()
        .find(|path| path.is_file())
        .ok_or_else(|| Error::WordListNotFound {
            name: explicit
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| name.to_string()),
        })
}

/// The two lists a session works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    /// Possible secrets
    pub solutions: Vec<Word>,
    /// Allowed guesses: the solutions followed by the remaining dictionary words
    pub guess_pool: Vec<Word>,
}

impl WordLists {
    pub fn new(solutions: Vec<Word>, dictionary: &[Word]) -> Self {
        let known: HashSet<Word> = solutions.iter().copied().collect();
        let guess_pool = solutions
            .iter()
            .chain(dictionary.iter().filter(|w| !known.contains(*w)))
            .copied()
            .collect();
        Self {
            solutions,
            guess_pool,
        }
    }

    /// Load the solution list (required) and the full dictionary (optional; the
    /// guess pool falls back to the solutions without it).
    pub fn load(solutions_path: Option<&Path>, dictionary_path: Option<&Path>) -> Result<Self> {
        let solutions = load_wordbank_from_file(resolve_word_list(solutions_path, SOLUTIONS_FILE)?)?;
        let dictionary = match resolve_word_list(dictionary_path, DICTIONARY_FILE) {
            Ok(path) => load_wordbank_from_file(path)?,
            Err(Error::WordListNotFound { name }) if dictionary_path.is_none() => {
                log::warn!("{name} not found, guessing from the solution list only");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self::new(solutions, &dictionary))
    }
}
