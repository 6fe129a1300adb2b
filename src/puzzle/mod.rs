use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod letters;
pub use letters::{Letter, LetterSet, ParseLetterSetError};

pub mod catalog;
pub use catalog::PuzzleCatalog;

pub mod source;
pub use source::PuzzleSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(pub u32);

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hidden phrase and the category shown alongside it.
///
/// The phrase is stored uppercased. Only its ASCII letters are guessable;
/// spaces and punctuation are always shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    id: PuzzleId,
    phrase: String,
    category: String,
    points: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParsePuzzleError {
    #[error("phrase is empty")]
    Empty,

    #[error("phrase `{0}` has no letters to guess")]
    NoLetters(String),
}

impl Puzzle {
    pub fn new(
        id: PuzzleId,
        phrase: &str,
        category: impl Into<String>,
        points: u32,
    ) -> Result<Self, ParsePuzzleError> {
        let phrase = phrase.trim();

        if phrase.is_empty() {
            return Err(ParsePuzzleError::Empty);
        }

        if !phrase.chars().any(|ch| Letter::new(ch).is_some()) {
            return Err(ParsePuzzleError::NoLetters(phrase.to_owned()));
        }

        Ok(Self {
            id,
            phrase: phrase.to_uppercase(),
            category: category.into(),
            points,
        })
    }

    pub const fn id(&self) -> PuzzleId {
        self.id
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub const fn points(&self) -> u32 {
        self.points
    }

    fn guessable(&self) -> impl Iterator<Item = Letter> + '_ {
        self.phrase.chars().filter_map(Letter::new)
    }

    /// Distinct letters of the phrase.
    pub fn letters(&self) -> LetterSet {
        self.guessable().collect()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.letters().contains(letter)
    }

    /// Number of times the letter appears, repeats included.
    pub fn occurrences(&self, letter: Letter) -> usize {
        self.guessable().filter(|l| *l == letter).count()
    }

    pub fn is_solved_by(&self, revealed: &LetterSet) -> bool {
        self.letters().is_subset(revealed)
    }

    /// Distinct letters not yet revealed, in order of first appearance.
    pub fn unrevealed(&self, revealed: &LetterSet) -> Vec<Letter> {
        let mut seen = *revealed;

        self.guessable()
            .filter(|letter| seen.insert(*letter))
            .collect()
    }

    /// The phrase with unrevealed letters replaced by `_`.
    pub fn masked(&self, revealed: &LetterSet) -> String {
        self.phrase
            .chars()
            .map(|ch| match Letter::new(ch) {
                Some(letter) if !revealed.contains(letter) => '_',
                _ => ch,
            })
            .collect()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.phrase, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::{Letter, LetterSet, ParsePuzzleError, Puzzle, PuzzleId};
    use pretty_assertions::assert_eq;

    fn puzzle(phrase: &str) -> Puzzle {
        Puzzle::new(PuzzleId(0), phrase, "Phrase", 0).expect("hard-coded puzzle")
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).expect("hard-coded letter")
    }

    #[test]
    fn uppercases_phrase() {
        assert_eq!(puzzle("break a leg").phrase(), "BREAK A LEG");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Puzzle::new(PuzzleId(0), "   ", "Phrase", 0),
            Err(ParsePuzzleError::Empty)
        );
        assert_eq!(
            Puzzle::new(PuzzleId(0), "1, 2!", "Phrase", 0),
            Err(ParsePuzzleError::NoLetters("1, 2!".to_owned()))
        );
    }

    #[test]
    fn counts_repeats() {
        let better = puzzle("BETTER");

        assert_eq!(better.occurrences(letter('t')), 2);
        assert_eq!(better.occurrences(letter('E')), 2);
        assert_eq!(better.occurrences(letter('z')), 0);
    }

    #[test]
    fn letters_skip_punctuation() {
        let puzzle = puzzle("ROCK 'N' ROLL!");
        assert_eq!(puzzle.letters().to_string(), "CKLNOR");
    }

    #[test]
    fn unrevealed_in_phrase_order() {
        let puzzle = puzzle("NEW YORK CITY");
        let revealed: LetterSet = "YE".parse().expect("hard-coded");

        let unrevealed: String = puzzle
            .unrevealed(&revealed)
            .into_iter()
            .map(char::from)
            .collect();

        assert_eq!(unrevealed, "NWORKCIT");
    }

    #[test]
    fn masks_hidden_letters() {
        let puzzle = puzzle("ONCE UPON A TIME");
        let revealed: LetterSet = "ON".parse().expect("hard-coded");

        assert_eq!(puzzle.masked(&revealed), "ON__ __ON _ ____");
    }

    #[test]
    fn solved_when_all_revealed() {
        let puzzle = puzzle("CAT");

        assert!(!puzzle.is_solved_by(&"CA".parse().expect("hard-coded")));
        assert!(puzzle.is_solved_by(&"TACQ".parse().expect("hard-coded")));
    }
}
