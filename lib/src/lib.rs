#![cfg_attr(feature = "unstable", feature(test))]

//! Plays and solves Mastermind-style code-guessing games.
//!
//! A secret [`Code`] is a sequence of colors drawn from a palette, as described by
//! [`GameRules`]. Each guess is scored with [`get_feedback_for_guess`], which counts exact
//! matches and color-only matches. The [`AdaptiveGuesser`] finds any secret within
//! `P + L × P` guesses, for palette size `P` and code length `L`.
//!
//! ```
//! use rs_mastermind_solver::*;
//!
//! let rules = GameRules::default();
//! let secret = Code::from([3, 1, 3, 4]);
//!
//! let guesser = AdaptiveGuesser::seeded(rules, 0);
//! let result = play_game_with_guesser(&secret, rules.adaptive_guess_bound(), guesser).unwrap();
//!
//! assert_eq!(result.guesses().last(), Some(&secret));
//! ```

mod code;
mod engine;
mod players;
mod results;
mod solver;

pub use code::*;
pub use engine::*;
pub use players::*;
pub use results::*;
pub use solver::*;
