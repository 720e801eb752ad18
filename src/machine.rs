//! The cipher machine: two rotors and a reflector wired into a single
//! signal path.
//!
//! A letter travels forward through rotor one and rotor two, is folded back by
//! the reflector, and returns backward through rotor two and rotor one. The
//! path is symmetric around an involution, so for a given machine state the
//! whole translation is an involution too: encrypting and decrypting are the
//! same operation when both sides start from identical settings.
//!
//! After every translated letter rotor one steps; rotor two steps once per
//! full revolution of rotor one (odometer cadence). Symbols outside `a..=z`
//! are returned as-is and leave the rotor state untouched.

use crate::error::Result;
use crate::permutation::ALPHABET_SIZE;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use tracing::debug;

/// A fully wired cipher machine. Owns all of its components; a machine is
/// never shared between streams because its state advances with every letter.
#[derive(Debug, Clone)]
pub struct Machine {
    rotor_one: Rotor,
    rotor_two: Rotor,
    reflector: Reflector,
    /// Steps of rotor one since rotor two last stepped
    rotation: usize,
    translated: u64,
}

impl Machine {
    /// Wire a machine from already validated components
    pub fn new(rotor_one: Rotor, rotor_two: Rotor, reflector: Reflector) -> Self {
        Self {
            rotor_one,
            rotor_two,
            reflector,
            rotation: 0,
            translated: 0,
        }
    }

    /// Build a machine from raw wiring letters. Either all three components
    /// validate or no machine is produced.
    pub fn build(rotor_one: &[u8], rotor_two: &[u8], reflector: &[u8]) -> Result<Self> {
        let rotor_one = Rotor::build(rotor_one).map_err(|e| e.in_component("rotor one"))?;
        let rotor_two = Rotor::build(rotor_two).map_err(|e| e.in_component("rotor two"))?;
        let reflector = Reflector::build(reflector).map_err(|e| e.in_component("reflector"))?;
        debug!("machine wired");
        Ok(Self::new(rotor_one, rotor_two, reflector))
    }

    /// Translate one symbol and advance the rotors if it was a letter
    pub fn translate(&mut self, symbol: u8) -> u8 {
        if !symbol.is_ascii_lowercase() {
            return symbol;
        }

        let mut c = self.rotor_one.lookup_forward(symbol);
        c = self.rotor_two.lookup_forward(c);
        c = self.reflector.apply(c);
        c = self.rotor_two.lookup_backward(c);
        c = self.rotor_one.lookup_backward(c);

        self.advance();
        c
    }

    /// `translate` for `char`; anything outside ASCII is passed through
    pub fn translate_char(&mut self, symbol: char) -> char {
        if symbol.is_ascii() {
            self.translate(symbol as u8) as char
        } else {
            symbol
        }
    }

    fn advance(&mut self) {
        self.rotor_one.step();
        self.rotation += 1;
        if self.rotation == ALPHABET_SIZE {
            self.rotor_two.step();
            self.rotation = 0;
        }
        self.translated += 1;
    }

    pub fn rotor_one(&self) -> &Rotor {
        &self.rotor_one
    }

    pub fn rotor_two(&self) -> &Rotor {
        &self.rotor_two
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Letters translated since construction
    pub fn translated(&self) -> u64 {
        self.translated
    }
}
