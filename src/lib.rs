//! Enigma - a two-rotor substitution cipher machine
//!
//! A simplified Enigma: two rotors and a reflector, each a permutation of the
//! lowercase alphabet. Decryption is done by running the machine over the
//! cipher text with the same initial settings.
//!
//! ## Signal Path
//!
//! ```text
//! letter → Rotor one → Rotor two → Reflector → Rotor two⁻¹ → Rotor one⁻¹ → letter
//! ```
//!
//! - **Permutation**: validated bijection over a..z, stored as signed offsets
//! - **Rotor**: permutation that steps (rotates its wiring) as letters pass
//! - **Reflector**: thirteen disjoint letter pairs, never maps a letter to itself
//! - **Machine**: rotor one steps per letter, rotor two once per 26 letters
//! - **Codec**: translates a symbol stream; spaces and newlines pass untouched
//!
//! ## Example
//!
//! ```
//! use enigma::codec::transform_str;
//! use enigma::settings::MachineSettings;
//!
//! let settings = MachineSettings {
//!     rotor_one: "ekmflgdqvzntowyhxuspaibrcj".into(),
//!     rotor_two: "ajdksiruxblhwtmcqgznpyfvoe".into(),
//!     reflector: "yruhqsldpxngokmiebfzcwvjat".into(),
//! };
//!
//! let cipher = transform_str("hello world", &mut settings.build().unwrap());
//! let plain = transform_str(&cipher, &mut settings.build().unwrap());
//! assert_eq!(plain, "hello world");
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod machine;
pub mod permutation;
pub mod reflector;
pub mod rotor;
pub mod settings;
pub mod source;

pub use error::{EnigmaError, Result};
pub use machine::Machine;
pub use permutation::Permutation;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use settings::MachineSettings;
