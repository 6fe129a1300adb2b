//! Game-state engines.
//!
//! [`GameEngine`] is the classic single-puzzle game: spin the wheel, guess a
//! letter for the landed value, repeat until the phrase is solved or the
//! player runs out of lives. [`quiz::QuizEngine`] is the timed question-pool
//! variant.
//!
//! Every action is a no-op when it isn't legal in the current state. Actions
//! return `None` in that case and leave the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::{
    errors::Error,
    puzzle::{Letter, LetterSet, Puzzle, PuzzleCatalog},
    random::{RandomSource, ThreadRandom},
    wheel::{SpinResult, Wedge, Wheel},
};

pub mod quiz;
pub mod timer;

pub use quiz::QuizEngine;
pub use timer::{Countdown, Tick};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub max_wrong_guesses: u32,
    pub max_clues: u32,
    /// Points charged per clue. A clue is refused if the score can't cover it.
    pub clue_cost: u32,
    /// When set, every guess has to be paid for with a spin.
    pub wheel_gated: bool,
    /// Flat value of each letter when the wheel doesn't gate guesses.
    pub letter_value: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_wrong_guesses: 6,
            max_clues: 3,
            clue_cost: 0,
            wheel_gated: true,
            letter_value: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpinStatus {
    Idle,
    Spinning,
    /// A spin has landed on this value and is waiting for a guess.
    Ready(u32),
}

/// What a settled spin did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinOutcome {
    Ready(u32),
    Bankrupt,
}

/// Result of an accepted guess, for the host's sound and animation cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit {
        letter: Letter,
        occurrences: usize,
        points: i64,
    },
    Miss {
        letter: Letter,
        wrong_guesses: u32,
    },
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub status: Status,
    pub category: &'a str,
    /// The phrase with hidden letters masked.
    pub board: String,
    /// The full phrase, once the game is over.
    pub answer: Option<&'a str>,
    pub revealed: LetterSet,
    pub used: LetterSet,
    pub score: i64,
    pub wrong_guesses: u32,
    pub max_wrong_guesses: u32,
    pub lives_left: u32,
    pub clues_remaining: u32,
    pub clue_letters: &'a [Letter],
    pub spin: SpinStatus,
}

/// The classic wheel-gated game.
#[derive(Debug)]
pub struct GameEngine<R = ThreadRandom> {
    rules: Rules,
    catalog: PuzzleCatalog,
    wheel: Wheel<Wedge>,
    rng: R,

    puzzle: usize,
    revealed: LetterSet,
    used: LetterSet,
    clue_letters: Vec<Letter>,
    score: i64,
    wrong_guesses: u32,
    clues_remaining: u32,
    status: Status,
    pending: Option<u32>,
}

impl<R: RandomSource> GameEngine<R> {
    /// Builds an engine and starts the first game.
    pub fn new(
        rules: Rules,
        catalog: PuzzleCatalog,
        wheel: Wheel<Wedge>,
        rng: R,
    ) -> Result<Self, Error> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut engine = Self {
            clues_remaining: rules.max_clues,
            rules,
            catalog,
            wheel,
            rng,
            puzzle: 0,
            revealed: LetterSet::new(),
            used: LetterSet::new(),
            clue_letters: Vec::new(),
            score: 0,
            wrong_guesses: 0,
            status: Status::Playing,
            pending: None,
        };

        engine.start_new_game();
        Ok(engine)
    }

    /// Picks a fresh puzzle and clears all round state. Always legal.
    pub fn start_new_game(&mut self) {
        if let Some(index) = self.catalog.pick_random(&mut self.rng) {
            self.puzzle = index;
        }

        self.revealed.clear();
        self.used.clear();
        self.clue_letters.clear();
        self.score = 0;
        self.wrong_guesses = 0;
        self.clues_remaining = self.rules.max_clues;
        self.status = Status::Playing;
        self.pending = None;
        self.wheel.cancel();

        info!(category = self.puzzle().category(), "new game");
    }

    fn can_spin(&self) -> bool {
        self.status == Status::Playing
            && self.rules.wheel_gated
            && self.pending.is_none()
            && !self.wheel.is_busy()
    }

    /// Starts a spin. The host delivers the result to
    /// [`settle_spin`](Self::settle_spin) after the wheel's settle delay.
    pub fn spin(&mut self) -> Option<SpinResult> {
        if !self.can_spin() {
            trace!("spin rejected");
            return None;
        }

        self.wheel.spin(&mut self.rng)
    }

    /// Ends the settle window and applies the landed wedge.
    ///
    /// Results from a spin started before [`start_new_game`] are ignored.
    ///
    /// [`start_new_game`]: Self::start_new_game
    pub fn settle_spin(&mut self, result: &SpinResult) -> Option<SpinOutcome> {
        let wedge = self.wheel.settle(result)?.id;
        self.spin_complete(wedge)
    }

    /// Records a spin outcome. Bankrupt zeroes the score and leaves nothing
    /// to guess with.
    pub fn spin_complete(&mut self, wedge: Wedge) -> Option<SpinOutcome> {
        if !self.can_spin() {
            trace!(%wedge, "spin outcome rejected");
            return None;
        }

        let outcome = match wedge {
            Wedge::Bankrupt => {
                self.score = 0;
                SpinOutcome::Bankrupt
            }
            Wedge::Points(value) => {
                self.pending = Some(value);
                SpinOutcome::Ready(value)
            }
        };

        debug!(?outcome, score = self.score, "spin complete");
        Some(outcome)
    }

    pub fn guess_letter(&mut self, ch: char) -> Option<Guess> {
        let Some(letter) = Letter::new(ch) else {
            trace!(?ch, "not a letter");
            return None;
        };

        if self.status != Status::Playing || self.used.contains(letter) || self.wheel.is_busy() {
            trace!(%letter, "guess rejected");
            return None;
        }

        let value = if self.rules.wheel_gated {
            let Some(value) = self.pending.take() else {
                trace!(%letter, "guess rejected, spin first");
                return None;
            };
            value
        } else {
            self.rules.letter_value
        };

        self.used.insert(letter);

        let puzzle = &self.catalog[self.puzzle];
        let occurrences = puzzle.occurrences(letter);

        let guess = if occurrences > 0 {
            self.revealed.insert(letter);

            let points = i64::from(value) * occurrences as i64;
            self.score += points;

            if puzzle.is_solved_by(&self.revealed) {
                self.status = Status::Won;
                info!(score = self.score, "puzzle solved");
            }

            Guess::Hit {
                letter,
                occurrences,
                points,
            }
        } else {
            self.wrong_guesses += 1;

            if self.wrong_guesses >= self.rules.max_wrong_guesses {
                self.status = Status::Lost;
                info!(answer = puzzle.phrase(), "out of lives");
            }

            Guess::Miss {
                letter,
                wrong_guesses: self.wrong_guesses,
            }
        };

        debug!(?guess, score = self.score, "guessed");
        Some(guess)
    }

    /// Reveals a random unrevealed letter, paid for from the clue budget
    /// and the configured clue cost.
    pub fn use_clue(&mut self) -> Option<Letter> {
        let cost = i64::from(self.rules.clue_cost);

        if self.status != Status::Playing || self.clues_remaining == 0 || self.score < cost {
            trace!(
                clues = self.clues_remaining,
                score = self.score,
                "clue rejected"
            );
            return None;
        }

        let puzzle = &self.catalog[self.puzzle];
        let unrevealed = puzzle.unrevealed(&self.revealed);
        let letter = *self.rng.pick(&unrevealed)?;

        self.revealed.insert(letter);
        self.used.insert(letter);
        self.clue_letters.push(letter);
        self.clues_remaining -= 1;
        self.score -= cost;

        if puzzle.is_solved_by(&self.revealed) {
            self.status = Status::Won;
            info!(score = self.score, "puzzle solved by clue");
        }

        debug!(%letter, clues = self.clues_remaining, "clue used");
        Some(letter)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let puzzle = self.puzzle();

        Snapshot {
            status: self.status,
            category: puzzle.category(),
            board: puzzle.masked(&self.revealed),
            answer: self.status.is_over().then(|| puzzle.phrase()),
            revealed: self.revealed,
            used: self.used,
            score: self.score,
            wrong_guesses: self.wrong_guesses,
            max_wrong_guesses: self.rules.max_wrong_guesses,
            lives_left: self.lives_left(),
            clues_remaining: self.clues_remaining,
            clue_letters: &self.clue_letters,
            spin: self.spin_status(),
        }
    }
}

impl<R> GameEngine<R> {
    pub fn puzzle(&self) -> &Puzzle {
        &self.catalog[self.puzzle]
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    pub const fn wheel(&self) -> &Wheel<Wedge> {
        &self.wheel
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn score(&self) -> i64 {
        self.score
    }

    pub const fn revealed(&self) -> &LetterSet {
        &self.revealed
    }

    pub const fn used(&self) -> &LetterSet {
        &self.used
    }

    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    pub fn lives_left(&self) -> u32 {
        self.rules.max_wrong_guesses.saturating_sub(self.wrong_guesses)
    }

    pub const fn clues_remaining(&self) -> u32 {
        self.clues_remaining
    }

    pub fn clue_letters(&self) -> &[Letter] {
        &self.clue_letters
    }

    pub const fn pending_value(&self) -> Option<u32> {
        self.pending
    }

    pub fn spin_status(&self) -> SpinStatus {
        match (self.wheel.is_busy(), self.pending) {
            (true, _) => SpinStatus::Spinning,
            (false, Some(value)) => SpinStatus::Ready(value),
            (false, None) => SpinStatus::Idle,
        }
    }
}
