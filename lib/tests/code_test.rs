#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_mastermind_solver::*;

use std::result::Result;

#[test]
fn game_rules_default() {
    let rules = GameRules::default();

    assert_eq!(rules.code_length(), 4);
    assert_eq!(rules.palette_size(), 6);
    assert_eq!(rules.colors().collect::<Vec<Color>>(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(rules.adaptive_guess_bound(), 30);
}

#[test]
fn game_rules_rejects_out_of_range_values() {
    assert_matches!(GameRules::new(0, 6), Err(MastermindError::InvalidRules));
    assert_matches!(GameRules::new(4, 0), Err(MastermindError::InvalidRules));
    assert_matches!(
        GameRules::new(MAX_CODE_LENGTH + 1, 6),
        Err(MastermindError::InvalidRules)
    );
    assert_matches!(
        GameRules::new(4, MAX_PALETTE_SIZE + 1),
        Err(MastermindError::InvalidRules)
    );
    assert_matches!(GameRules::new(4, 7), Ok(_));
}

#[test]
fn parse_code_succeeds() -> Result<(), MastermindError> {
    let rules = GameRules::new(4, 7)?;

    assert_eq!(rules.parse_code("6012")?, Code::from([6, 0, 1, 2]));
    assert_eq!(rules.parse_code("  0000\n")?, Code::monochrome(0, 4));
    Ok(())
}

#[test]
fn parse_code_rejects_malformed_input() {
    let rules = GameRules::default();

    assert_matches!(rules.parse_code("01234"), Err(MastermindError::CodeLength(4)));
    assert_matches!(rules.parse_code(""), Err(MastermindError::CodeLength(4)));
    assert_matches!(rules.parse_code("01a3"), Err(MastermindError::InvalidColor('a')));
    assert_matches!(rules.parse_code("0 13"), Err(MastermindError::InvalidColor(' ')));
    assert_matches!(rules.parse_code("0173"), Err(MastermindError::InvalidColor('7')));
}

#[test]
fn random_code_uses_palette() {
    let rules = GameRules::new(6, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let code = rules.random_code(&mut rng);
        assert_eq!(rules.validate(&code), Ok(()));
    }
}

#[test]
fn random_code_is_reproducible() {
    let rules = GameRules::default();

    let first = rules.random_code(&mut StdRng::seed_from_u64(12));
    let second = rules.random_code(&mut StdRng::seed_from_u64(12));

    assert_eq!(first, second);
}

#[test]
fn mastermind_error_messages() {
    assert_eq!(
        MastermindError::CodeLength(4).to_string(),
        "Codes must have exactly 4 colors."
    );
    assert_eq!(
        MastermindError::InvalidColor('9').to_string(),
        "'9' is not a color in the palette."
    );
}
