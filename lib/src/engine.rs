use crate::code::{Code, GameRules};
use crate::results::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashSet;
use std::result::Result;

/// Guesses codes until it finds the secret.
pub trait Guesser {
    /// Selects the next code to try.
    ///
    /// `history` holds the feedback for every guess this guesser has made so far, most recent
    /// last. Returns `None` if the guesser gives up.
    fn next_guess(&mut self, history: &[Feedback]) -> Option<Code>;
}

/// Holds the secret for one round, and scores guesses against it.
pub struct CodeMaker {
    secret: Code,
    all_feedback: Vec<Feedback>,
}

impl CodeMaker {
    pub fn new(secret: Code) -> CodeMaker {
        CodeMaker {
            secret,
            all_feedback: Vec::new(),
        }
    }

    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// The feedback given so far this round, in the order the guesses were made.
    pub fn all_feedback(&self) -> &[Feedback] {
        &self.all_feedback
    }

    /// Scores the guess against the secret and records the feedback.
    ///
    /// Returns [`MastermindError::CodeLength`] if the guess is not the same length as the secret.
    pub fn verify(&mut self, guess: &Code) -> Result<Feedback, MastermindError> {
        let feedback = get_feedback_for_guess(&self.secret, guess)?;
        self.all_feedback.push(feedback);
        Ok(feedback)
    }

    /// Whether the latest guess was the secret.
    pub fn is_solved(&self) -> bool {
        self.all_feedback
            .last()
            .map_or(false, |feedback| feedback.is_solved(self.secret.len()))
    }
}

/// Attempts to guess the given secret within the maximum number of guesses, using the given
/// guesser.
///
/// Returns an error if the guesser produces a code of the wrong length.
///
/// ```
/// use rs_mastermind_solver::{
///     play_game_with_guesser, AdaptiveGuesser, Code, GameResult, GameRules,
/// };
///
/// let rules = GameRules::default();
/// let result = play_game_with_guesser(&Code::from([5, 5, 5, 5]), 12, AdaptiveGuesser::new(rules));
///
/// assert_eq!(result.unwrap().guesses().len(), 6);
/// ```
pub fn play_game_with_guesser<G: Guesser>(
    secret: &Code,
    max_num_guesses: u32,
    mut guesser: G,
) -> Result<GameResult, MastermindError> {
    let mut code_maker = CodeMaker::new(secret.clone());
    let mut guesses: Vec<Code> = Vec::new();
    for attempts_left in (1..=max_num_guesses).rev() {
        info!("{} attempts left.", attempts_left);
        let Some(guess) = guesser.next_guess(code_maker.all_feedback()) else {
            info!("The guesser gave up.");
            return Ok(GameResult::Abandoned(guesses));
        };
        info!("Guessed {}", guess);
        let feedback = code_maker.verify(&guess)?;
        guesses.push(guess);
        if code_maker.is_solved() {
            info!("Success! The code was {}. It took {} guesses.", secret, guesses.len());
            return Ok(GameResult::Success(guesses));
        }
        debug!("Feedback: {}", feedback);
    }
    info!("Failure! The code was {}.", secret);
    Ok(GameResult::Failure(guesses))
}

/// Plays one game for every possible secret under the given rules, in parallel.
///
/// `make_guesser` is called once per game with the index of the secret in
/// [`GameRules::all_codes`], so that seeded guessers stay reproducible. Returns one entry per
/// secret: the number of guesses needed, or `None` if the guesser didn't find the secret.
pub fn play_all_codes<G, F>(
    rules: &GameRules,
    max_num_guesses: u32,
    make_guesser: F,
) -> Result<Vec<Option<u32>>, MastermindError>
where
    G: Guesser,
    F: Fn(usize) -> G + Sync,
{
    rules
        .all_codes()
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let result = play_game_with_guesser(secret, max_num_guesses, make_guesser(index))?;
            Ok(match result {
                GameResult::Success(guesses) => Some(guesses.len() as u32),
                GameResult::Failure(_) | GameResult::Abandoned(_) => None,
            })
        })
        .collect()
}

/// Guesses codes uniformly at random, without repeating a guess.
pub struct RandomGuesser<R = StdRng> {
    rules: GameRules,
    guessed: HashSet<Code>,
    rng: R,
}

impl RandomGuesser<StdRng> {
    pub fn new(rules: GameRules) -> RandomGuesser<StdRng> {
        RandomGuesser::with_rng(rules, StdRng::from_entropy())
    }

    pub fn seeded(rules: GameRules, seed: u64) -> RandomGuesser<StdRng> {
        RandomGuesser::with_rng(rules, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGuesser<R> {
    pub fn with_rng(rules: GameRules, rng: R) -> RandomGuesser<R> {
        RandomGuesser {
            rules,
            guessed: HashSet::new(),
            rng,
        }
    }

    fn num_codes(&self) -> u64 {
        (self.rules.palette_size() as u64).saturating_pow(self.rules.code_length() as u32)
    }
}

impl<R: Rng> Guesser for RandomGuesser<R> {
    fn next_guess(&mut self, _history: &[Feedback]) -> Option<Code> {
        if self.guessed.len() as u64 >= self.num_codes() {
            return None;
        }
        loop {
            let guess = self.rules.random_code(&mut self.rng);
            if self.guessed.insert(guess.clone()) {
                return Some(guess);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct ScriptedGuesser {
        guesses: Vec<Code>,
    }

    impl Guesser for ScriptedGuesser {
        fn next_guess(&mut self, history: &[Feedback]) -> Option<Code> {
            self.guesses.get(history.len()).cloned()
        }
    }

    #[test]
    fn code_maker_records_feedback() -> Result<(), MastermindError> {
        let mut code_maker = CodeMaker::new(Code::from([0, 1, 2, 3]));

        code_maker.verify(&Code::from([3, 2, 1, 0]))?;
        assert!(!code_maker.is_solved());
        code_maker.verify(&Code::from([0, 1, 2, 3]))?;

        assert!(code_maker.is_solved());
        assert_eq!(
            code_maker.all_feedback(),
            &[Feedback::new(0, 4), Feedback::new(4, 0)]
        );
        Ok(())
    }

    #[test]
    fn play_game_stops_when_guesser_gives_up() -> Result<(), MastermindError> {
        let guesser = ScriptedGuesser {
            guesses: vec![Code::from([1, 1])],
        };

        let result = play_game_with_guesser(&Code::from([0, 0]), 5, guesser)?;

        assert_eq!(result, GameResult::Abandoned(vec![Code::from([1, 1])]));
        Ok(())
    }

    #[test]
    fn play_game_reports_wrong_length_guess() {
        let guesser = ScriptedGuesser {
            guesses: vec![Code::from([1, 1, 1])],
        };

        assert_eq!(
            play_game_with_guesser(&Code::from([0, 0]), 5, guesser),
            Err(MastermindError::CodeLength(2))
        );
    }

    #[test]
    fn random_guesser_gives_up_after_every_code() {
        let rules = GameRules::new(2, 2).unwrap();
        let mut guesser = RandomGuesser::seeded(rules, 9);

        let guesses: HashSet<Code> = (0..4)
            .map(|_| guesser.next_guess(&[]).unwrap())
            .collect();

        assert_eq!(guesses.len(), 4);
        assert_eq!(guesser.next_guess(&[]), None);
    }
}
