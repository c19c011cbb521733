use crate::code::{Code, Color, GameRules};
use crate::engine::Guesser;
use crate::results::Feedback;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The stage of the [`AdaptiveGuesser`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Guessing one monochrome code per color to learn which colors the secret holds.
    Discovering,
    /// Finding the position of each discovered color, one position at a time.
    Locking,
    /// The secret has been found. The last guess is repeated.
    Solved,
    /// The feedback could not be reconciled with the secret. Random codes are guessed.
    FallbackRandom,
}

/// Everything the [`AdaptiveGuesser`] knows about the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverState {
    phase: Phase,
    /// The colors known to be in the secret and not yet locked, one entry per occurrence. Once
    /// locking starts this is shuffled, and its order is the order candidates are tried in.
    discovered: Vec<Color>,
    /// The color of the latest monochrome guess.
    trial_color: Option<Color>,
    /// Pads every position that isn't locked or being tested.
    filler: Option<Color>,
    /// Every position before this one holds the secret's color.
    lock_index: usize,
    /// Index into `discovered` of the candidate being tried at `lock_index`.
    confidence_index: usize,
    /// Colors already ruled out at `lock_index`.
    rejected: Vec<Color>,
    /// The code being assembled while locking.
    working: Code,
    guesses: Vec<Code>,
}

impl SolverState {
    fn new() -> SolverState {
        SolverState {
            phase: Phase::Discovering,
            discovered: Vec::new(),
            trial_color: None,
            filler: None,
            lock_index: 0,
            confidence_index: 0,
            rejected: Vec::new(),
            working: Code::new(Vec::new()),
            guesses: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The discovered colors that have not been locked into a position yet.
    pub fn discovered(&self) -> &[Color] {
        &self.discovered
    }

    pub fn filler(&self) -> Option<Color> {
        self.filler
    }

    pub fn lock_index(&self) -> usize {
        self.lock_index
    }

    pub fn confidence_index(&self) -> usize {
        self.confidence_index
    }

    /// Every code guessed so far, in order.
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    fn count_discovered(&self, color: Color) -> usize {
        self.discovered.iter().filter(|c| **c == color).count()
    }

    /// Whether this state could have been reached by a guesser playing under `rules`.
    fn fits(&self, rules: &GameRules) -> bool {
        let code_length = rules.code_length();
        let in_palette = |color: &Color| *color < rules.palette_size();
        self.guesses.iter().all(|guess| guess.len() == code_length)
            && (self.working.is_empty() || self.working.len() == code_length)
            && self.discovered.len() + self.lock_index <= code_length
            && self.discovered.iter().all(in_palette)
            && self.trial_color.iter().all(in_palette)
            && self.filler.iter().all(in_palette)
    }
}

/// Finds the secret without searching the space of codes.
///
/// The guesser first sends one monochrome code per palette color. The total feedback for each one
/// is the number of times that color occurs in the secret. Once every color of the secret is
/// known, it picks a filler color that isn't in the secret and determines the secret one position
/// at a time: each guess keeps the positions already found, tries one candidate color at the next
/// position, and pads the rest with the filler. An exact match count above the number of locked
/// positions confirms the candidate.
///
/// For rules with palette size `P` and code length `L`, this needs at most `P + L × P` guesses.
///
/// ```
/// use rs_mastermind_solver::{
///     play_game_with_guesser, AdaptiveGuesser, Code, GameResult, GameRules,
/// };
///
/// let rules = GameRules::default();
/// let guesser = AdaptiveGuesser::seeded(rules, 7);
///
/// let result = play_game_with_guesser(&Code::from([0, 0, 1, 2]), 30, guesser).unwrap();
///
/// assert!(matches!(result, GameResult::Success(_)));
/// assert_eq!(result.guesses().last(), Some(&Code::from([0, 0, 1, 2])));
/// ```
pub struct AdaptiveGuesser<R = StdRng> {
    rules: GameRules,
    state: SolverState,
    rng: R,
}

impl AdaptiveGuesser<StdRng> {
    /// Constructs a guesser for a new round, seeded from the operating system.
    pub fn new(rules: GameRules) -> AdaptiveGuesser<StdRng> {
        AdaptiveGuesser::with_rng(rules, StdRng::from_entropy())
    }

    /// Constructs a guesser that makes the same guesses every time for the same secret.
    pub fn seeded(rules: GameRules, seed: u64) -> AdaptiveGuesser<StdRng> {
        AdaptiveGuesser::with_rng(rules, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AdaptiveGuesser<R> {
    /// Constructs a guesser for a new round that draws randomness from `rng`.
    pub fn with_rng(rules: GameRules, rng: R) -> AdaptiveGuesser<R> {
        AdaptiveGuesser::from_state(rules, SolverState::new(), rng)
    }

    /// Resumes a round from a previously captured state.
    ///
    /// The state must come from a guesser playing under the same `rules`. If it doesn't fit them,
    /// the guesser logs a warning and falls back to random guesses.
    pub fn from_state(rules: GameRules, state: SolverState, rng: R) -> AdaptiveGuesser<R> {
        let fits_rules = state.phase == Phase::FallbackRandom || state.fits(&rules);
        let mut guesser = AdaptiveGuesser { rules, state, rng };
        if !fits_rules {
            guesser.fall_back("the state was captured under different rules");
        }
        guesser
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    fn select_guess(&mut self, history: &[Feedback]) -> Code {
        if matches!(self.state.phase, Phase::Discovering | Phase::Locking)
            && !self.state.guesses.is_empty()
        {
            match history.last() {
                Some(feedback) if history.len() == self.state.guesses.len() => {
                    debug!("Feedback: {}", feedback);
                    if feedback.is_solved(self.rules.code_length()) {
                        self.state.phase = Phase::Solved;
                    } else {
                        self.absorb_feedback(feedback);
                    }
                }
                _ => self.fall_back(&format!(
                    "expected {} feedback entries, got {}",
                    self.state.guesses.len(),
                    history.len()
                )),
            }
        }
        match self.state.phase {
            Phase::Discovering => self.next_discovery_guess(),
            Phase::Locking => self.next_locking_guess(),
            Phase::Solved => self
                .state
                .guesses
                .last()
                .cloned()
                .unwrap_or_else(|| self.rules.random_code(&mut self.rng)),
            Phase::FallbackRandom => self.rules.random_code(&mut self.rng),
        }
    }

    fn absorb_feedback(&mut self, feedback: &Feedback) {
        match self.state.phase {
            Phase::Discovering => self.absorb_discovery_feedback(feedback),
            Phase::Locking => self.absorb_locking_feedback(feedback),
            Phase::Solved | Phase::FallbackRandom => {}
        }
    }

    fn absorb_discovery_feedback(&mut self, feedback: &Feedback) {
        let Some(trial_color) = self.state.trial_color else {
            return;
        };
        let code_length = self.rules.code_length();
        self.state
            .discovered
            .extend(std::iter::repeat(trial_color).take(feedback.total()));
        debug!("Possible values: {:?}", self.state.discovered);
        if self.state.discovered.len() > code_length {
            self.fall_back("discovered more colors than the code holds");
        } else if self.state.discovered.len() == code_length {
            self.start_locking();
        }
    }

    fn next_discovery_guess(&mut self) -> Code {
        let next_color = self.state.trial_color.map_or(0, |color| color + 1);
        if next_color >= self.rules.palette_size() {
            self.fall_back("palette exhausted before every color was found");
            return self.rules.random_code(&mut self.rng);
        }
        self.state.trial_color = Some(next_color);
        Code::monochrome(next_color, self.rules.code_length())
    }

    fn start_locking(&mut self) {
        let discovered = &self.state.discovered;
        // When every palette color is in the secret, pad with the most common one and account
        // for its remaining occurrences when reading the feedback.
        let filler = match self.rules.colors().find(|color| !discovered.contains(color)) {
            Some(absent) => absent,
            None => self
                .rules
                .colors()
                .max_by_key(|color| self.state.count_discovered(*color))
                .unwrap_or(0),
        };
        self.state.discovered.shuffle(&mut self.rng);
        self.state.filler = Some(filler);
        self.state.lock_index = 0;
        self.state.confidence_index = 0;
        self.state.rejected.clear();
        self.state.working = Code::monochrome(filler, self.rules.code_length());
        self.state.phase = Phase::Locking;
        debug!(
            "Locking with filler {} and trial order {:?}",
            filler, self.state.discovered
        );
    }

    fn absorb_locking_feedback(&mut self, feedback: &Feedback) {
        let Some(filler) = self.state.filler else {
            return;
        };
        let lock_index = self.state.lock_index;
        if lock_index >= self.rules.code_length() {
            self.fall_back("every position is locked but the code was wrong");
            return;
        }
        let candidate = self.state.working.colors()[lock_index];
        // Unlocked positions past `lock_index` hold the filler, so they contribute exactly the
        // filler's remaining count, less one if the filler belongs at `lock_index`.
        let delta = feedback.exact as isize
            - lock_index as isize
            - self.state.count_discovered(filler) as isize;
        match delta {
            1 => self.lock(candidate),
            -1 => {
                self.state.working.set(lock_index, filler);
                self.lock(filler);
            }
            0 => {
                self.state.rejected.push(candidate);
                self.state.confidence_index += 1;
            }
            _ => self.fall_back("feedback does not match any candidate"),
        }
    }

    fn lock(&mut self, color: Color) {
        match self.state.discovered.iter().position(|c| *c == color) {
            Some(index) => {
                self.state.discovered.remove(index);
                self.state.lock_index += 1;
                self.state.confidence_index = 0;
                self.state.rejected.clear();
                debug!(
                    "Locked {} at position {}. Possible values: {:?}",
                    color,
                    self.state.lock_index - 1,
                    self.state.discovered
                );
            }
            None => self.fall_back("locked a color that was not discovered"),
        }
    }

    fn next_locking_guess(&mut self) -> Code {
        let code_length = self.rules.code_length();
        let Some(filler) = self.state.filler else {
            self.fall_back("locking started without a filler");
            return self.rules.random_code(&mut self.rng);
        };
        while self.state.phase == Phase::Locking {
            debug!(
                "confidence_index {}, lock_index {}",
                self.state.confidence_index, self.state.lock_index
            );
            if self.state.lock_index == code_length {
                return self.state.working.clone();
            }
            let state = &mut self.state;
            while state.confidence_index < state.discovered.len() {
                let candidate = state.discovered[state.confidence_index];
                if candidate != filler && !state.rejected.contains(&candidate) {
                    break;
                }
                state.confidence_index += 1;
            }
            if state.confidence_index < state.discovered.len() {
                let candidate = state.discovered[state.confidence_index];
                state.working.set(state.lock_index, candidate);
                return state.working.clone();
            }
            if state.discovered.contains(&filler) {
                // Only the filler is left for this position.
                state.working.set(state.lock_index, filler);
                self.lock(filler);
            } else {
                self.fall_back("ran out of candidates for a position");
            }
        }
        self.rules.random_code(&mut self.rng)
    }

    fn fall_back(&mut self, reason: &str) {
        warn!("Falling back to random guesses: {}.", reason);
        self.state.phase = Phase::FallbackRandom;
    }
}

impl<R: Rng> Guesser for AdaptiveGuesser<R> {
    fn next_guess(&mut self, history: &[Feedback]) -> Option<Code> {
        let guess = self.select_guess(history);
        self.state.guesses.push(guess.clone());
        Some(guess)
    }
}
