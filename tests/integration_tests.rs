// Whole sessions: word lists in, console transcript and game outcome out

use std::io::Cursor;
use wordle_entropy::cli::CliInterface;
use wordle_entropy::*;

fn words(list: &[&str]) -> Vec<Word> {
    parse_words(list).unwrap()
}

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

/// Guess with the recommendation each round until solved, judging against `secret`.
fn play_to_solution(lists: &WordLists, config: &SolverConfig, secret: &str) -> Vec<Word> {
    let secret = w(secret);
    let mut candidates = lists.solutions.clone();
    let mut guesses = Vec::new();
    while candidates.len() > 1 {
        let recommendation = select_guess(&candidates, &lists.guess_pool, config).unwrap();
        let feedback = compute_feedback(&secret, &recommendation.guess);
        let next = filter_candidates(&candidates, &recommendation.guess, &feedback);
        assert!(next.contains(&secret), "secret dropped by {recommendation}");
        assert!(next.len() <= candidates.len());
        guesses.push(recommendation.guess);
        candidates = next;
        assert!(guesses.len() <= 10, "{secret} not found after 10 guesses");
    }
    assert_eq!(candidates, vec![secret]);
    guesses
}

fn sample_solutions() -> Vec<Word> {
    words(&[
        "ABOUT", "ABOVE", "ABUSE", "ACTOR", "ACUTE", "ADMIT", "ADOPT", "ADULT", "AFTER", "AGAIN",
        "AGENT", "AGREE", "AHEAD", "ALARM", "ALBUM", "ALLOY", "BRAIN", "BRAKE", "CHAIN", "CRANE",
        "CREEP", "DRAIN", "FLAME", "FRAME", "GRACE", "GRAIN", "LOLLY", "MAMMA", "OCEAN", "PLACE",
        "PLAIN", "SLATE", "SLEEP", "SPEED", "STAIN", "STEEP", "SWEEP", "TATTY", "TRACE", "TRAIN",
    ])
}

#[test]
fn test_end_to_end_cli_session() {
    // Secret is SLATE. CRANE rules out every other word.
    let lists = WordLists::new(words(&["CRANE", "SLATE", "TRACE", "PLACE", "GRACE"]), &[]);
    let input = "CRANE\n--*-*\n";
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let outcome = game_loop(&lists, &SolverConfig::default(), None, &mut interface).unwrap();
    assert_eq!(outcome, GameOutcome::Solved(w("SLATE")));
    let text = String::from_utf8(interface.into_writer()).unwrap();
    assert!(text.contains("Recommended guess: "));
    assert!(text.ends_with("Solution: SLATE\n"));
}

#[test]
fn test_ocean_kazoo_scenario() {
    let feedback = compute_feedback(&w("OCEAN"), &w("KAZOO"));
    assert_eq!(
        feedback.marks(),
        &[Mark::Absent, Mark::Present, Mark::Absent, Mark::Present, Mark::Absent]
    );
    let remaining = filter_candidates(&sample_solutions(), &w("KAZOO"), &feedback);
    assert!(remaining.contains(&w("OCEAN")));
    assert!(remaining.iter().all(|word| word.count_of(b'O') == 1));
    assert!(remaining.len() < sample_solutions().len());
}

#[test]
fn test_filter_soundness_over_sample() {
    let candidates = sample_solutions();
    for secret in &candidates {
        for guess in words(&["KAZOO", "LOLLY", "EERIE", "MAMMA", "SLATE", "ADOPT"]) {
            let feedback = compute_feedback(secret, &guess);
            let once = filter_candidates(&candidates, &guess, &feedback);
            assert!(once.contains(secret), "{secret} dropped by {guess} {feedback}");
            assert_eq!(filter_candidates(&once, &guess, &feedback), once);
        }
    }
}

#[test]
fn test_every_sample_secret_is_solved_exactly() {
    let lists = WordLists::new(sample_solutions(), &[]);
    let config = SolverConfig::default();
    for secret in &lists.solutions {
        let guesses = play_to_solution(&lists, &config, &secret.to_string());
        assert!(guesses.len() <= 6, "{secret} took {} guesses", guesses.len());
    }
}

#[test]
fn test_entropy_policy_drives_large_sets() {
    // A zero threshold forces the entropy proxy for every multi-word set.
    let lists = WordLists::new(sample_solutions(), &words(&["KAZOO", "EERIE", "QUEUE"]));
    let config = SolverConfig {
        exact_threshold: 0,
        ..Default::default()
    };
    let recommendation = select_guess(&lists.solutions, &lists.guess_pool, &config).unwrap();
    assert_eq!(recommendation.policy, Policy::Entropy);
    assert!(recommendation.score > 0.);
    let feedback = compute_feedback(&w("BRAIN"), &recommendation.guess);
    let remaining = filter_candidates(&lists.solutions, &recommendation.guess, &feedback);
    assert!(remaining.contains(&w("BRAIN")));
    assert!(remaining.len() < lists.solutions.len());
}

#[test]
fn test_expected_remaining_prefers_better_splits() {
    let candidates = sample_solutions();
    // A guess with common letters splits better than one with rare repeats.
    assert!(
        expected_remaining(&candidates, &w("TRAIN")) < expected_remaining(&candidates, &w("MAMMA"))
    );
    let ranked = rank_guesses(&candidates, &candidates, &SolverConfig::default(), 3);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|pair| pair[0].score <= pair[1].score));
    let best = select_guess(&candidates, &candidates, &SolverConfig::default()).unwrap();
    assert_eq!(best, ranked[0]);
}

#[test]
fn test_custom_wordbank_files_to_game() {
    // Integration test: load word lists from files -> play a game
    let dir = std::env::temp_dir();
    let solutions_path = dir.join("wordle_entropy_it_solutions.txt");
    let dictionary_path = dir.join("wordle_entropy_it_dictionary.txt");
    std::fs::write(&solutions_path, "apple\ngrape\nlemon\nmelon\npeach\n").unwrap();
    std::fs::write(&dictionary_path, "apple\nbuilt\n").unwrap();

    let lists =
        WordLists::load(Some(solutions_path.as_path()), Some(dictionary_path.as_path())).unwrap();
    assert_eq!(lists.solutions.len(), 5);
    assert_eq!(lists.guess_pool.len(), 6);

    let input = "LEMON\n*****\n";
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let outcome = game_loop(&lists, &SolverConfig::default(), None, &mut interface).unwrap();
    assert_eq!(outcome, GameOutcome::Solved(w("LEMON")));

    std::fs::remove_file(&solutions_path).unwrap();
    std::fs::remove_file(&dictionary_path).unwrap();
}

#[test]
fn test_contradictory_feedback_ends_session() {
    let lists = WordLists::new(words(&["CRANE", "SLATE"]), &words(&["BUMPY"]));
    let input = "SLATE\n-----\n";
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let outcome = game_loop(&lists, &SolverConfig::default(), None, &mut interface).unwrap();
    assert_eq!(
        outcome,
        GameOutcome::NoSolutions {
            extended: words(&["BUMPY"])
        }
    );
    let text = String::from_utf8(interface.into_writer()).unwrap();
    assert!(text.contains("No valid solutions\nPossible extended options:\nBUMPY\n"));
}

#[test]
fn test_wordbank_loading_variations() {
    let first = load_wordbank_from_str("crane\nslate\nraise").unwrap();
    let second = load_wordbank_from_str("CRANE\nSLATE\nRAISE").unwrap();
    let third = load_wordbank_from_str("  crane  \n  slate  \n  raise  \n\n").unwrap();
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first.len(), 3);
    assert!(load_wordbank_from_str("crane\ncranes").is_err());
}

#[test]
fn test_uninformative_guess_keeps_candidates() {
    let candidates = words(&["CRANE", "SLATE", "TRACE"]);
    let feedback = Feedback::parse("-----").unwrap();
    assert_eq!(filter_candidates(&candidates, &w("FUZZY"), &feedback), candidates);
}

#[test]
fn test_shortlist_session_guesses_outside_solutions() {
    let lists = WordLists::new(
        words(&["BAKES", "CAKES", "MAKES", "RAKES"]),
        &words(&["CRUMB", "FUZZY"]),
    );
    let config = SolverConfig {
        shortlist: Some(2),
        ..Default::default()
    };
    // Secret is RAKES: the blank line accepts CRUMB, whose R lands out of place.
    let input = "\n-+---\n";
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let outcome = game_loop(&lists, &config, None, &mut interface).unwrap();
    assert_eq!(outcome, GameOutcome::Solved(w("RAKES")));
    let text = String::from_utf8(interface.into_writer()).unwrap();
    assert!(text.contains("Recommended guess: CRUMB (1.00 expected remaining)"));
    assert!(text.contains("Enter feedback for CRUMB"));
}
