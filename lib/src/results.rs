use crate::code::{Code, Color};
use std::error::Error;
use std::fmt;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The score given to a single guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feedback {
    /// The number of positions where the guess holds the same color as the secret.
    pub exact: usize,
    /// The number of guessed colors that are in the secret, but not at that position.
    ///
    /// Each color is counted at most as many times as it remains unmatched in both the secret and
    /// the guess.
    pub color_only: usize,
}

impl Feedback {
    pub fn new(exact: usize, color_only: usize) -> Feedback {
        Feedback { exact, color_only }
    }

    /// The total number of guessed colors that appear in the secret, wherever they are.
    pub fn total(&self) -> usize {
        self.exact + self.color_only
    }

    /// Whether this feedback means the guess was the secret, for codes of the given length.
    pub fn is_solved(&self, code_length: usize) -> bool {
        self.exact == code_length
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} color only", self.exact, self.color_only)
    }
}

/// Indicates that an error occurred while playing or scoring a game.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MastermindError {
    /// Indicates that a code did not have the expected length. Provides the expected length.
    CodeLength(usize),
    /// Indicates that a color is not in the palette, or that a character is not a color at all.
    InvalidColor(char),
    /// Indicates that the code length or palette size is zero or too large.
    InvalidRules,
}

impl fmt::Display for MastermindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MastermindError::CodeLength(length) => {
                write!(f, "Codes must have exactly {} colors.", length)
            }
            MastermindError::InvalidColor(color) => {
                write!(f, "'{}' is not a color in the palette.", color)
            }
            MastermindError::InvalidRules => write!(
                f,
                "Code length and palette size must be non-zero and within the supported limits."
            ),
        }
    }
}

impl Error for MastermindError {}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser found the secret, and provides the guesses that were given.
    Success(Vec<Code>),
    /// Indicates that the guesser ran out of attempts, and provides the guesses that were given.
    Failure(Vec<Code>),
    /// Indicates that the guesser stopped before finding the secret or running out of attempts.
    Abandoned(Vec<Code>),
}

impl GameResult {
    /// The guesses made during the game, in order.
    pub fn guesses(&self) -> &[Code] {
        match self {
            GameResult::Success(guesses)
            | GameResult::Failure(guesses)
            | GameResult::Abandoned(guesses) => guesses,
        }
    }
}

/// Scores the given `guess` against the `secret`.
///
/// Returns [`MastermindError::CodeLength`] if the codes differ in length.
///
/// ```
/// use rs_mastermind_solver::{get_feedback_for_guess, Code, Feedback};
///
/// let feedback = get_feedback_for_guess(&Code::from([0, 0, 1, 2]), &Code::from([1, 0, 0, 3]));
/// assert_eq!(feedback, Ok(Feedback::new(1, 2)));
/// ```
pub fn get_feedback_for_guess(secret: &Code, guess: &Code) -> Result<Feedback, MastermindError> {
    if secret.len() != guess.len() {
        return Err(MastermindError::CodeLength(secret.len()));
    }
    let mut exact = 0;
    let mut secret_tally = [0usize; Color::MAX as usize + 1];
    let mut guess_tally = [0usize; Color::MAX as usize + 1];
    for (secret_color, guess_color) in secret.colors().iter().zip(guess.colors()) {
        if secret_color == guess_color {
            exact += 1;
            continue;
        }
        secret_tally[*secret_color as usize] += 1;
        guess_tally[*guess_color as usize] += 1;
    }
    let color_only = secret_tally
        .iter()
        .zip(guess_tally.iter())
        .map(|(in_secret, in_guess)| *in_secret.min(in_guess))
        .sum();
    Ok(Feedback { exact, color_only })
}
