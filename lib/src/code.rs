use crate::results::MastermindError;
use rand::Rng;
use std::fmt;
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single color, represented by its index in the palette.
pub type Color = u8;

/// The largest supported palette. Colors are typed as single digits, so this is capped at 10.
pub const MAX_PALETTE_SIZE: u8 = 10;

/// The longest supported code.
pub const MAX_CODE_LENGTH: usize = 16;

/// An ordered sequence of colors, used both for the secret and for guesses.
///
/// Codes may contain the same color more than once.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Code(Vec<Color>);

impl Code {
    /// Constructs a code from the given colors.
    pub fn new(colors: Vec<Color>) -> Code {
        Code(colors)
    }

    /// Constructs a code of the given length where every position holds `color`.
    pub fn monochrome(color: Color, length: usize) -> Code {
        Code(vec![color; length])
    }

    /// The number of positions in this code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The colors in this code, in positional order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub(crate) fn set(&mut self, index: usize, color: Color) {
        self.0[index] = color;
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Code {
        Code(colors)
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(colors: [Color; N]) -> Code {
        Code(colors.to_vec())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// The shape of a game: how long codes are, and how many colors may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameRules {
    code_length: usize,
    palette_size: u8,
}

impl Default for GameRules {
    /// Four positions, six colors.
    fn default() -> Self {
        GameRules {
            code_length: 4,
            palette_size: 6,
        }
    }
}

impl GameRules {
    /// Constructs a new set of rules.
    ///
    /// Returns [`MastermindError::InvalidRules`] if either value is zero, or if they exceed
    /// [`MAX_CODE_LENGTH`] or [`MAX_PALETTE_SIZE`] respectively.
    ///
    /// ```
    /// use rs_mastermind_solver::GameRules;
    ///
    /// let rules = GameRules::new(5, 7).unwrap();
    /// assert_eq!(rules.code_length(), 5);
    /// assert!(GameRules::new(0, 6).is_err());
    /// ```
    pub fn new(code_length: usize, palette_size: u8) -> Result<GameRules, MastermindError> {
        if code_length == 0
            || code_length > MAX_CODE_LENGTH
            || palette_size == 0
            || palette_size > MAX_PALETTE_SIZE
        {
            return Err(MastermindError::InvalidRules);
        }
        Ok(GameRules {
            code_length,
            palette_size,
        })
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Iterates over every color in the palette, in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> {
        0..self.palette_size
    }

    /// The largest number of guesses the [`AdaptiveGuesser`](crate::AdaptiveGuesser) may need
    /// for these rules.
    pub fn adaptive_guess_bound(&self) -> u32 {
        let palette_size = self.palette_size as u32;
        palette_size + self.code_length as u32 * palette_size
    }

    /// Generates a code with each position chosen uniformly at random from the palette.
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        Code(
            (0..self.code_length)
                .map(|_| rng.gen_range(0..self.palette_size))
                .collect(),
        )
    }

    /// Checks that the code has the right length and only uses colors from the palette.
    pub fn validate(&self, code: &Code) -> Result<(), MastermindError> {
        if code.len() != self.code_length {
            return Err(MastermindError::CodeLength(self.code_length));
        }
        if let Some(color) = code.colors().iter().find(|color| **color >= self.palette_size) {
            return Err(MastermindError::InvalidColor(char::from(b'0' + *color % 10)));
        }
        Ok(())
    }

    /// Parses a code typed as a string of digits, e.g. `"0123"`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// ```
    /// use rs_mastermind_solver::{Code, GameRules, MastermindError};
    ///
    /// let rules = GameRules::default();
    /// assert_eq!(rules.parse_code(" 0512 "), Ok(Code::from([0, 5, 1, 2])));
    /// assert_eq!(rules.parse_code("0612"), Err(MastermindError::InvalidColor('6')));
    /// assert_eq!(rules.parse_code("012"), Err(MastermindError::CodeLength(4)));
    /// ```
    pub fn parse_code(&self, input: &str) -> Result<Code, MastermindError> {
        let input = input.trim();
        let colors = input
            .chars()
            .map(|digit| match digit.to_digit(10) {
                Some(value) if value < self.palette_size as u32 => Ok(value as Color),
                _ => Err(MastermindError::InvalidColor(digit)),
            })
            .collect::<Result<Vec<Color>, MastermindError>>()?;
        if colors.len() != self.code_length {
            return Err(MastermindError::CodeLength(self.code_length));
        }
        Ok(Code(colors))
    }

    /// Returns every possible code for these rules, in lexicographic order.
    pub fn all_codes(&self) -> Vec<Code> {
        let mut codes = vec![Code(Vec::with_capacity(self.code_length))];
        for _ in 0..self.code_length {
            codes = codes
                .iter()
                .flat_map(|prefix| {
                    self.colors().map(move |color| {
                        let mut colors = prefix.0.clone();
                        colors.push(color);
                        Code(colors)
                    })
                })
                .collect();
        }
        codes
    }
}
