use std::ops::Index;

use tracing::{debug, trace};

use super::{Puzzle, PuzzleId};
use crate::random::RandomSource;

const BUILTIN: &[(&str, &str)] = &[
    ("WHEEL OF FORTUNE", "Game Show"),
    ("BRIGHT LIGHTS BIG CITY", "Song Title"),
    ("PRACTICE MAKES PERFECT", "Phrase"),
    ("THE EARLY BIRD CATCHES THE WORM", "Phrase"),
    ("AROUND THE WORLD IN EIGHTY DAYS", "Book Title"),
    ("BREAK A LEG", "Show Biz"),
    ("NEW YORK CITY", "Place"),
    ("ONCE UPON A TIME", "Phrase"),
    ("ACTIONS SPEAK LOUDER THAN WORDS", "Phrase"),
    ("CALIFORNIA DREAMING", "Song Title"),
];

/// The pool of playable puzzles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
}

impl PuzzleCatalog {
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    /// The stock phrases used when no external source is configured.
    pub fn builtin() -> Self {
        let puzzles = BUILTIN
            .iter()
            .zip(1..)
            .filter_map(|((phrase, category), id)| {
                Puzzle::new(PuzzleId(id), phrase, *category, 0).ok()
            })
            .collect();

        Self::new(puzzles)
    }

    pub fn list(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    /// Alias of [`get`](Self::get), for wheel-driven selection.
    pub fn select(&self, index: usize) -> Option<&Puzzle> {
        self.get(index)
    }

    pub fn position(&self, id: PuzzleId) -> Option<usize> {
        self.puzzles.iter().position(|puzzle| puzzle.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.puzzles.iter().map(Puzzle::id)
    }

    /// Index of a uniformly chosen puzzle, `None` when the catalog is empty.
    pub fn pick_random(&self, rng: &mut impl RandomSource) -> Option<usize> {
        if self.is_empty() {
            trace!("cannot pick from an empty catalog");
            return None;
        }

        let index = rng.uniform_int(self.len());
        debug!(index, id = %self.puzzles[index].id(), "picked puzzle");

        Some(index)
    }

    /// Removes a consumed entry. Indices held elsewhere must be passed
    /// through [`reindex`](Self::reindex) afterwards.
    pub fn remove(&mut self, index: usize) -> Option<Puzzle> {
        (index < self.len()).then(|| {
            let removed = self.puzzles.remove(index);
            debug!(index, id = %removed.id(), remaining = self.len(), "removed puzzle");
            removed
        })
    }

    /// Where an index held before `remove(removed)` points afterwards.
    pub const fn reindex(held: usize, removed: usize) -> Option<usize> {
        if held < removed {
            Some(held)
        } else if held == removed {
            None
        } else {
            Some(held - 1)
        }
    }
}

impl Index<usize> for PuzzleCatalog {
    type Output = Puzzle;

    fn index(&self, index: usize) -> &Self::Output {
        self.puzzles.index(index)
    }
}

impl From<Vec<Puzzle>> for PuzzleCatalog {
    fn from(value: Vec<Puzzle>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Puzzle> for PuzzleCatalog {
    fn from_iter<T: IntoIterator<Item = Puzzle>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
