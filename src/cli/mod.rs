pub mod generate;
pub mod info;
pub mod translate;

pub use generate::*;
pub use info::*;
pub use translate::*;

use crate::error::Result;
use crate::settings::MachineSettings;
use std::path::PathBuf;

/// Where a command obtains the machine's initial settings
#[derive(Debug, Clone)]
pub enum MachineSource {
    /// A JSON settings file
    Settings(PathBuf),
    /// Three permutation source files
    Files {
        rotor_one: PathBuf,
        rotor_two: PathBuf,
        reflector: PathBuf,
    },
}

impl MachineSource {
    pub fn load(&self) -> Result<MachineSettings> {
        match self {
            Self::Settings(path) => MachineSettings::load(path),
            Self::Files {
                rotor_one,
                rotor_two,
                reflector,
            } => MachineSettings::from_files(rotor_one, rotor_two, reflector),
        }
    }
}
