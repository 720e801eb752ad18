use crate::error::{EnigmaError, Result};
use crate::permutation::{index_letter, letter_index, Permutation, ALPHABET_SIZE};

/// A steppable permutation layer.
///
/// The inverse table is rebuilt whenever the wiring steps, so backward
/// lookups always reflect the current wiring rather than the initial one.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Permutation,
    inverse: [u8; ALPHABET_SIZE],
    steps: u64,
}

impl Rotor {
    /// Build a rotor from 26 raw target letters
    pub fn build(raw: &[u8]) -> Result<Self> {
        Self::from_permutation(Permutation::build(raw)?)
    }

    pub fn from_permutation(wiring: Permutation) -> Result<Self> {
        check_coverage(&wiring)?;
        let inverse = wiring.inverse_table();
        Ok(Self {
            wiring,
            inverse,
            steps: 0,
        })
    }

    /// Forward translation of a letter through the current wiring.
    /// Symbols outside `a..=z` are returned unchanged.
    pub fn lookup_forward(&self, letter: u8) -> u8 {
        match letter_index(letter) {
            Some(index) => index_letter(self.wiring.forward(index)),
            None => letter,
        }
    }

    /// The unique letter `s` with `lookup_forward(s) == letter`
    pub fn lookup_backward(&self, letter: u8) -> u8 {
        match letter_index(letter) {
            Some(index) => index_letter(self.inverse[index] as usize),
            None => letter,
        }
    }

    /// Advance the rotor by one position
    pub fn step(&mut self) {
        self.wiring.rotate_left();
        self.inverse = self.wiring.inverse_table();
        self.steps += 1;
    }

    /// Number of times this rotor has stepped since construction
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current wiring
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}

// Every position must be hit by some source position. Redundant for a
// validated bijection; kept as an independent self-check on the wiring.
fn check_coverage(wiring: &Permutation) -> Result<()> {
    let mut reached = [false; ALPHABET_SIZE];
    for i in 0..ALPHABET_SIZE {
        reached[wiring.forward(i)] = true;
    }

    match reached.iter().position(|&hit| !hit) {
        Some(missing) => Err(EnigmaError::InvalidPermutation(
            index_letter(missing) as char,
        )),
        None => Ok(()),
    }
}
