use crate::error::Result;
use crate::settings::MachineSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for reproducible settings; drawn from the OS when absent
    pub seed: Option<u64>,
}

/// Draw random settings and write them as a JSON settings file
pub fn generate_settings(output_path: &Path, options: &GenerateOptions) -> Result<MachineSettings> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let settings = MachineSettings::generate(&mut rng);
    settings.save(output_path)?;

    info!(
        output = %output_path.display(),
        fingerprint = %settings.fingerprint(),
        "generated settings"
    );
    Ok(settings)
}
