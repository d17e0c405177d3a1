use anyhow::Context;
use std::io;
use wordle_entropy::cli::{CliInterface, Command, parse_cli};
use wordle_entropy::demo::run_demo;
use wordle_entropy::logging::init_logging;
use wordle_entropy::{GameOutcome, Word, WordLists, game_loop};

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);
    cli.check_word_size()?;

    let lists = WordLists::load(cli.solutions_path.as_deref(), cli.dictionary_path.as_deref())
        .context("failed to load word lists")?;
    log::info!(
        "{} solutions, {} allowed guesses",
        lists.solutions.len(),
        lists.guess_pool.len()
    );
    let config = cli.solver_config();

    match &cli.command {
        Command::Test => {
            let mut stdout = io::stdout().lock();
            run_demo(&lists.solutions, &config, &mut stdout)?;
        }
        Command::Live { first_guess } => {
            let first_guess = first_guess
                .as_deref()
                .map(Word::parse)
                .transpose()
                .context("invalid --first-guess")?;
            let mut interface = CliInterface::new(io::stdin().lock(), io::stdout());
            match game_loop(&lists, &config, first_guess, &mut interface)? {
                GameOutcome::Abandoned => log::info!("input closed before the game finished"),
                outcome => log::debug!("{outcome:?}"),
            }
        }
    }
    Ok(())
}
