use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An uppercase ASCII letter, `A` through `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Normalises lowercase input; anything that isn't an ASCII letter is `None`.
    pub fn new(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self(ch.to_ascii_uppercase() as u8))
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }

    const fn bit(self) -> u32 {
        1 << (self.0 - b'A') as u32
    }

    fn from_index(index: u32) -> Self {
        Self(b'A' + index as u8)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.as_char()
    }
}

/// Set of letters stored as a 26-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Returns `true` if the letter wasn't already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let fresh = !self.contains(letter);
        self.bits |= letter.bit();
        fresh
    }

    pub const fn contains(&self, letter: Letter) -> bool {
        self.bits & letter.bit() != 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn is_subset(&self, other: &Self) -> bool {
        self.bits & !other.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        (0..26)
            .filter(|index| self.bits & (1 << index) != 0)
            .map(Letter::from_index)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a letter")]
pub struct ParseLetterSetError(char);

impl FromStr for LetterSet {
    type Err = ParseLetterSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| Letter::new(ch).ok_or(ParseLetterSetError(ch)))
            .collect()
    }
}

impl TryFrom<String> for LetterSet {
    type Error = ParseLetterSetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<LetterSet> for String {
    fn from(value: LetterSet) -> Self {
        value.to_string()
    }
}
