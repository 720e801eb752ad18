use crate::error::{EnigmaError, Result};

/// Number of symbols in the machine alphabet (a..z)
pub const ALPHABET_SIZE: usize = 26;

/// First letter of the alphabet; position 0
pub const FIRST_LETTER: u8 = b'a';

/// Position of a lowercase ASCII letter, or `None` for anything else
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - FIRST_LETTER) as usize)
    } else {
        None
    }
}

/// Letter at an alphabet position. Positions wrap modulo 26.
pub fn index_letter(index: usize) -> u8 {
    FIRST_LETTER + (index % ALPHABET_SIZE) as u8
}

/// A bijective mapping over the 26-letter alphabet.
///
/// Stored as signed offsets: position `i` maps to `(i + offset[i]) mod 26`.
/// Every offset is normalised so that `i + offset[i]` already lies in
/// `0..26`, which keeps each offset within `-25..=25` and lets translation
/// be plain `letter + offset` arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    offsets: [i8; ALPHABET_SIZE],
}

impl Permutation {
    /// Build from the raw target letters: entry `i` is the letter that the
    /// `i`-th letter of the alphabet translates to.
    ///
    /// Fails with `MalformedSource` unless there are exactly 26 entries, all in
    /// `a..=z`, and with `InvalidPermutation` if two positions share a target.
    pub fn build(raw: &[u8]) -> Result<Self> {
        if raw.len() != ALPHABET_SIZE {
            return Err(EnigmaError::MalformedSource(format!(
                "expected {} letters, found {}",
                ALPHABET_SIZE,
                raw.len()
            )));
        }

        let mut targets = [0u8; ALPHABET_SIZE];
        for (i, &letter) in raw.iter().enumerate() {
            targets[i] = letter_index(letter).ok_or_else(|| {
                EnigmaError::MalformedSource(format!(
                    "{:?} at position {} is not a lowercase letter",
                    letter as char, i
                ))
            })? as u8;
        }

        Self::from_targets(targets)
    }

    /// Build from absolute target positions (each in `0..26`)
    pub fn from_targets(targets: [u8; ALPHABET_SIZE]) -> Result<Self> {
        let mut seen = [false; ALPHABET_SIZE];
        let mut offsets = [0i8; ALPHABET_SIZE];

        for (i, &target) in targets.iter().enumerate() {
            let target = target as usize;
            if target >= ALPHABET_SIZE {
                return Err(EnigmaError::MalformedSource(format!(
                    "target position {} out of range at position {}",
                    target, i
                )));
            }
            if seen[target] {
                return Err(EnigmaError::InvalidPermutation(index_letter(target) as char));
            }
            seen[target] = true;
            offsets[i] = target as i8 - i as i8;
        }

        Ok(Self { offsets })
    }

    /// The identity mapping (every offset zero)
    pub fn identity() -> Self {
        Self {
            offsets: [0; ALPHABET_SIZE],
        }
    }

    /// Target position of `index`
    pub fn forward(&self, index: usize) -> usize {
        let index = index % ALPHABET_SIZE;
        (index as i32 + self.offsets[index] as i32).rem_euclid(ALPHABET_SIZE as i32) as usize
    }

    pub fn offsets(&self) -> &[i8; ALPHABET_SIZE] {
        &self.offsets
    }

    /// Absolute target position for every source position
    pub fn targets(&self) -> [u8; ALPHABET_SIZE] {
        let mut targets = [0u8; ALPHABET_SIZE];
        for (i, target) in targets.iter_mut().enumerate() {
            *target = self.forward(i) as u8;
        }
        targets
    }

    /// Table mapping each target position back to its source position
    pub fn inverse_table(&self) -> [u8; ALPHABET_SIZE] {
        let mut inverse = [0u8; ALPHABET_SIZE];
        for i in 0..ALPHABET_SIZE {
            inverse[self.forward(i)] = i as u8;
        }
        inverse
    }

    /// The mapping written as 26 target letters, the same form `build` accepts
    pub fn to_letters(&self) -> String {
        (0..ALPHABET_SIZE)
            .map(|i| index_letter(self.forward(i)) as char)
            .collect()
    }

    /// Rotate the offsets left by one (position 0 moves to position 25) and
    /// renormalise each offset so its target stays inside the alphabet.
    ///
    /// The resulting mapping is `t'(k) = t(k + 1) - 1 (mod 26)`, a conjugate of
    /// the original by a one-letter shift, so bijectivity is preserved.
    pub(crate) fn rotate_left(&mut self) {
        self.offsets.rotate_left(1);

        let size = ALPHABET_SIZE as i8;
        for (k, offset) in self.offsets.iter_mut().enumerate() {
            let target = k as i8 + *offset;
            if target < 0 {
                *offset += size;
            } else if target >= size {
                *offset -= size;
            }
        }
    }

    /// Three-row rendering: the alphabet, a row of bars, and the translations
    ///
    /// ```text
    /// a b c ...
    /// | | | ...
    /// x y z ...
    /// ```
    pub fn translation_table(&self) -> String {
        let mut output = String::new();

        for i in 0..ALPHABET_SIZE {
            output.push(index_letter(i) as char);
            output.push(' ');
        }
        output.push('\n');

        for _ in 0..ALPHABET_SIZE {
            output.push_str("| ");
        }
        output.push('\n');

        for i in 0..ALPHABET_SIZE {
            output.push(index_letter(self.forward(i)) as char);
            output.push(' ');
        }
        output.push('\n');

        output
    }
}
