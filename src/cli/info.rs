use crate::cli::MachineSource;
use crate::error::Result;
use crate::permutation::Permutation;

/// Describe a machine's initial settings: one translation table per
/// component and the settings fingerprint.
pub fn show_info(source: &MachineSource) -> Result<String> {
    let settings = source.load()?;
    let machine = settings.build()?;

    let mut output = String::new();

    output.push_str("Enigma Machine Settings\n");
    output.push_str("=======================\n\n");

    push_component(&mut output, "Rotor one", machine.rotor_one().wiring());
    push_component(&mut output, "Rotor two", machine.rotor_two().wiring());
    push_component(&mut output, "Reflector", machine.reflector().wiring());

    output.push_str(&format!("Fingerprint: {}\n\n", settings.fingerprint()));

    output.push_str("Operation:\n");
    output.push_str("  Rotor one steps after every letter.\n");
    output.push_str("  Rotor two steps once every 26 letters.\n");
    output.push_str("  Decrypt by translating the cipher text with the same settings.\n");

    Ok(output)
}

fn push_component(output: &mut String, name: &str, wiring: &Permutation) {
    output.push_str(&format!("{}: {}\n", name, wiring.to_letters()));
    output.push_str(&wiring.translation_table());
    output.push('\n');
}
