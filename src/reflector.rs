use crate::error::{EnigmaError, Result};
use crate::permutation::{index_letter, letter_index, Permutation, ALPHABET_SIZE};

/// An involutive permutation with no fixed points: thirteen disjoint 2-cycles.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
}

impl Reflector {
    /// Build a reflector from 26 raw target letters
    pub fn build(raw: &[u8]) -> Result<Self> {
        Self::from_permutation(Permutation::build(raw)?)
    }

    pub fn from_permutation(wiring: Permutation) -> Result<Self> {
        for i in 0..ALPHABET_SIZE {
            let j = wiring.forward(i);
            if j == i {
                return Err(EnigmaError::InvalidReflector(format!(
                    "'{}' maps to itself",
                    index_letter(i) as char
                )));
            }
            let back = wiring.forward(j);
            if back != i {
                return Err(EnigmaError::InvalidReflector(format!(
                    "'{}' maps to '{}' but '{}' maps to '{}'",
                    index_letter(i) as char,
                    index_letter(j) as char,
                    index_letter(j) as char,
                    index_letter(back) as char
                )));
            }
        }
        Ok(Self { wiring })
    }

    /// Reflect a letter. Forward and backward are the same lookup.
    pub fn apply(&self, letter: u8) -> u8 {
        match letter_index(letter) {
            Some(index) => index_letter(self.wiring.forward(index)),
            None => letter,
        }
    }

    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}
