#[macro_use]
extern crate assert_matches;

use rs_mastermind_solver::*;

use std::result::Result;

#[test]
fn play_game_with_adaptive_guesser_succeeds() -> Result<(), MastermindError> {
    let rules = GameRules::default();
    let secret = Code::from([2, 4, 1, 4]);

    let result = play_game_with_guesser(
        &secret,
        rules.adaptive_guess_bound(),
        AdaptiveGuesser::seeded(rules, 17),
    )?;

    assert_matches!(result, GameResult::Success(_));
    assert_eq!(result.guesses().last(), Some(&secret));
    Ok(())
}

#[test]
fn play_game_with_too_few_guesses_fails() -> Result<(), MastermindError> {
    let rules = GameRules::default();

    let result = play_game_with_guesser(
        &Code::from([5, 4, 3, 2]),
        3,
        AdaptiveGuesser::seeded(rules, 0),
    )?;

    assert_eq!(
        result,
        GameResult::Failure(vec![
            Code::from([0, 0, 0, 0]),
            Code::from([1, 1, 1, 1]),
            Code::from([2, 2, 2, 2]),
        ])
    );
    Ok(())
}

#[test]
fn play_game_with_random_guesser_succeeds_eventually() -> Result<(), MastermindError> {
    let rules = GameRules::new(2, 3)?;

    let result = play_game_with_guesser(&Code::from([2, 0]), 9, RandomGuesser::seeded(rules, 1))?;

    assert_matches!(result, GameResult::Success(_));
    Ok(())
}

#[test]
fn play_all_codes_solves_every_code() -> Result<(), MastermindError> {
    let rules = GameRules::default();

    let num_guesses = play_all_codes(&rules, rules.adaptive_guess_bound(), |index| {
        AdaptiveGuesser::seeded(rules, index as u64)
    })?;

    assert_eq!(num_guesses.len(), 6usize.pow(4));
    assert!(num_guesses
        .iter()
        .all(|guesses| matches!(guesses, Some(n) if *n <= rules.adaptive_guess_bound())));
    Ok(())
}

#[test]
fn play_all_codes_reports_failures() -> Result<(), MastermindError> {
    let rules = GameRules::new(2, 2)?;

    let num_guesses = play_all_codes(&rules, 1, |index| {
        RandomGuesser::seeded(rules, index as u64)
    })?;

    assert_eq!(num_guesses.len(), 4);
    assert!(num_guesses
        .iter()
        .all(|guesses| guesses.is_none() || *guesses == Some(1)));
    Ok(())
}
