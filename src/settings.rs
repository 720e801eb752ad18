use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::permutation::{Permutation, ALPHABET_SIZE};
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::source::load_source;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::path::Path;
use tracing::debug;

/// Initial machine state: the wiring of each component as 26 target letters.
///
/// Both ends of a conversation must start from identical settings, so these
/// are what gets shared, stored and fingerprinted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    pub rotor_one: String,
    pub rotor_two: String,
    pub reflector: String,
}

impl MachineSettings {
    /// Assemble settings from three permutation source files
    pub fn from_files(rotor_one: &Path, rotor_two: &Path, reflector: &Path) -> Result<Self> {
        let settings = Self {
            rotor_one: wiring_string(&load_source(rotor_one)?),
            rotor_two: wiring_string(&load_source(rotor_two)?),
            reflector: wiring_string(&load_source(reflector)?),
        };

        // Validate now so the failing file is named in the error
        Rotor::build(settings.rotor_one.as_bytes())
            .map_err(|e| e.in_component(rotor_one.display().to_string()))?;
        Rotor::build(settings.rotor_two.as_bytes())
            .map_err(|e| e.in_component(rotor_two.display().to_string()))?;
        Reflector::build(settings.reflector.as_bytes())
            .map_err(|e| e.in_component(reflector.display().to_string()))?;

        Ok(settings)
    }

    /// Load settings from a JSON settings file
    pub fn load(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let text =
            std::fs::read_to_string(path).map_err(|e| EnigmaError::from(e).in_component(&name))?;
        let settings: Self =
            serde_json::from_str(&text).map_err(|e| EnigmaError::from(e).in_component(&name))?;
        debug!(file = %name, "loaded machine settings");
        Ok(settings)
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Build a machine in its initial state
    pub fn build(&self) -> Result<Machine> {
        Machine::build(
            self.rotor_one.as_bytes(),
            self.rotor_two.as_bytes(),
            self.reflector.as_bytes(),
        )
    }

    /// SHA3-256 over the three wirings, hex encoded. Two machines with the
    /// same fingerprint translate identically.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha3_256::new();
        hasher.update(b"enigma_settings_v1");
        for wiring in [&self.rotor_one, &self.rotor_two, &self.reflector] {
            hasher.update([wiring.len() as u8]);
            hasher.update(wiring.as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Draw random, valid settings
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            rotor_one: random_rotor(rng).to_letters(),
            rotor_two: random_rotor(rng).to_letters(),
            reflector: random_reflector(rng).to_letters(),
        }
    }
}

fn wiring_string(wiring: &[u8; ALPHABET_SIZE]) -> String {
    wiring.iter().map(|&b| b as char).collect()
}

fn shuffled_positions<R: Rng + ?Sized>(rng: &mut R) -> [u8; ALPHABET_SIZE] {
    let mut positions = [0u8; ALPHABET_SIZE];
    for (i, p) in positions.iter_mut().enumerate() {
        *p = i as u8;
    }
    positions.shuffle(rng);
    positions
}

/// Uniformly random permutation of the alphabet
pub fn random_rotor<R: Rng + ?Sized>(rng: &mut R) -> Permutation {
    let targets = shuffled_positions(rng);
    // A shuffle of 0..26 is always a bijection
    Permutation::from_targets(targets).unwrap_or_else(|_| Permutation::identity())
}

/// Random set of thirteen disjoint letter pairs
pub fn random_reflector<R: Rng + ?Sized>(rng: &mut R) -> Permutation {
    let order = shuffled_positions(rng);
    let mut targets = [0u8; ALPHABET_SIZE];
    for pair in order.chunks_exact(2) {
        targets[pair[0] as usize] = pair[1];
        targets[pair[1] as usize] = pair[0];
    }
    Permutation::from_targets(targets).unwrap_or_else(|_| Permutation::identity())
}
