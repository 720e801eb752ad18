use crate::cli::MachineSource;
use crate::codec::{transform_bytes, validate_message};
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Reject messages with symbols outside a-z, space and newline
    pub strict: bool,
}

/// Outcome of a translation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateReport {
    /// Symbols written, including passed-through separators
    pub symbols: usize,
    /// Letters run through the rotors
    pub letters: u64,
}

/// Encrypt or decrypt `input_path` into `output_path`.
///
/// Every component is loaded and validated, and the message is checked in
/// strict mode, before the output file is touched.
pub fn translate_file(
    input_path: &Path,
    output_path: &Path,
    source: &MachineSource,
    options: &TranslateOptions,
) -> Result<TranslateReport> {
    let message = std::fs::read(input_path)?;
    if options.strict {
        validate_message(&message)?;
    }

    let settings = source.load()?;
    let mut machine = settings.build()?;

    let output = transform_bytes(&message, &mut machine);
    std::fs::write(output_path, &output)?;

    let report = TranslateReport {
        symbols: output.len(),
        letters: machine.translated(),
    };
    info!(
        input = %input_path.display(),
        output = %output_path.display(),
        letters = report.letters,
        "translation complete"
    );
    Ok(report)
}
