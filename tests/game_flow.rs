//! End-to-end game flows through a real state file, plus property tests for
//! the evaluator and the action layer.

use chrono::NaiveDate;
use proptest::prelude::*;
use wordle_daily::core::{Mark, Verdict, Word};
use wordle_daily::game::{Game, MAX_GUESSES, Status, SubmitOutcome};
use wordle_daily::store::{JsonFileStore, MemoryStore, StateStore};
use wordle_daily::wordlists::loader::words_from_slice;
use wordle_daily::wordlists::{WordBank, WordSource};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn enter<S: StateStore, W: WordSource>(game: &mut Game<S, W>, word: &str) -> SubmitOutcome {
    for letter in word.chars() {
        game.append_letter(letter).unwrap();
    }
    game.submit_guess().unwrap()
}

#[test]
fn game_survives_restart_of_the_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save").join("state.json");

    let mut game = Game::load_on(JsonFileStore::new(&path), WordBank::embedded(), day());
    let secret = game.state().secret().clone();
    assert!(enter(&mut game, "crane").accepted());
    game.append_letter('s').unwrap();
    game.append_letter('l').unwrap();
    drop(game);

    let game = Game::load_on(JsonFileStore::new(&path), WordBank::embedded(), day());
    assert_eq!(game.state().secret(), &secret);
    assert_eq!(game.state().guesses()[0].text(), "crane");
    assert_eq!(game.draft(), "sl");

    let text = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["guesses"][0], "crane");
    assert_eq!(json["draft"], "sl");
}

#[test]
fn corrupt_file_starts_fresh_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();

    let game = Game::load_on(JsonFileStore::new(&path), WordBank::embedded(), day());
    assert_eq!(game.status(), Status::InProgress);
    assert!(game.state().guesses().is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn full_loss_then_restart() {
    let words = WordBank::new(words_from_slice(&["hello", "llama"])).unwrap();
    let mut game = Game::load_on(MemoryStore::new(), words, day());
    let secret = game.state().secret().text().to_string();
    let miss = if secret == "hello" { "brand" } else { "speed" };

    for n in 1..=MAX_GUESSES {
        assert!(enter(&mut game, miss).accepted());
        assert_eq!(game.state().guesses().len(), n);
    }
    assert_eq!(game.status(), Status::Lost);
    assert_eq!(game.revealed_answer().unwrap().text(), secret);
    assert_eq!(enter(&mut game, &secret), SubmitOutcome::GameOver);

    game.restart().unwrap();
    assert_eq!(game.status(), Status::InProgress);
    assert_ne!(game.state().secret().text(), secret);
    assert!(game.revealed_answer().is_none());
}

#[test]
fn keyboard_hints_follow_guesses() {
    let words = WordBank::new(words_from_slice(&["speed"])).unwrap();
    let mut game = Game::load_on(MemoryStore::new(), words, day());
    enter(&mut game, "erase");
    enter(&mut game, "steep");

    let hints = game.keyboard_hints();
    assert_eq!(hints[&b's'], Mark::Exact);
    assert_eq!(hints[&b'e'], Mark::Exact);
    // STEEP's p sits where SPEED has d
    assert_eq!(hints[&b'p'], Mark::Close);
    assert_eq!(hints[&b'r'], Mark::Missing);
    assert_eq!(hints[&b't'], Mark::Missing);
    assert!(!hints.contains_key(&b'z'));
}

#[test]
fn keyboard_hint_promoted_from_close_to_exact() {
    let words = WordBank::new(words_from_slice(&["speed"])).unwrap();
    let mut game = Game::load_on(MemoryStore::new(), words, day());

    enter(&mut game, "erase");
    assert_eq!(game.keyboard_hints()[&b'e'], Mark::Close);
    assert_eq!(game.keyboard_hints()[&b's'], Mark::Close);

    enter(&mut game, "speed");
    let hints = game.keyboard_hints();
    assert_eq!(hints[&b'e'], Mark::Exact);
    assert_eq!(hints[&b's'], Mark::Exact);
    assert_eq!(hints[&b'a'], Mark::Missing);
}

fn small_word() -> impl Strategy<Value = String> {
    "[a-e]{5}"
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Letter(char),
    Backspace,
    Submit,
    Restart,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        10 => prop::char::range('a', 'e').prop_map(Action::Letter),
        2 => Just(Action::Backspace),
        3 => Just(Action::Submit),
        1 => Just(Action::Restart),
    ]
}

proptest! {
    /// A letter is never credited more often than the secret contains it.
    #[test]
    fn prop_verdict_never_over_credits(secret in small_word(), guess in small_word()) {
        let secret_word = Word::new(secret.as_str()).unwrap();
        let verdict = Verdict::evaluate(&secret_word, &guess).unwrap();

        for letter in b'a'..=b'e' {
            let in_secret = secret.bytes().filter(|&b| b == letter).count();
            let in_guess = guess.bytes().filter(|&b| b == letter).count();
            let credited = guess
                .bytes()
                .zip(verdict.marks())
                .filter(|(b, m)| *b == letter && **m != Mark::Missing)
                .count();
            prop_assert_eq!(credited, in_secret.min(in_guess));
        }

        for (i, mark) in verdict.marks().iter().enumerate() {
            let exact = secret.as_bytes()[i] == guess.as_bytes()[i];
            prop_assert_eq!(*mark == Mark::Exact, exact);
        }
    }

    /// Any sequence of actions keeps the game within its invariants, and the
    /// store always holds what is on screen.
    #[test]
    fn prop_actions_keep_invariants(actions in prop::collection::vec(action_strategy(), 0..80)) {
        let words = WordBank::new(words_from_slice(&["ebbed", "decad", "abcde"])).unwrap();
        let mut game = Game::load_on(MemoryStore::new(), words.clone(), day());

        for action in actions {
            let was_terminal = game.state().is_terminal();
            let before = game.state().clone();

            match action {
                Action::Letter(c) => { game.append_letter(c).unwrap(); }
                Action::Backspace => { game.backspace().unwrap(); }
                Action::Submit => { game.submit_guess().unwrap(); }
                Action::Restart => { game.restart().unwrap(); }
            }

            let state = game.state();
            prop_assert!(state.guesses().len() <= MAX_GUESSES);
            prop_assert_eq!(state.guesses().len(), state.verdicts().len());
            prop_assert!(game.draft().len() <= 5);
            if was_terminal && !matches!(action, Action::Restart) {
                prop_assert_eq!(state, &before);
            }

            let reloaded = Game::load_on(game.store().clone(), words.clone(), day());
            prop_assert_eq!(reloaded.state(), game.state());
            prop_assert_eq!(reloaded.draft(), game.draft());
        }
    }
}
