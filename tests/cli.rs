use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const ROTOR_ONE: &str = "ekmflgdqvzntowyhxuspaibrcj";
const ROTOR_TWO: &str = "ajdksiruxblhwtmcqgznpyfvoe";
const REFLECTOR: &str = "yruhqsldpxngokmiebfzcwvjat";

fn enigma_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_enigma"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(enigma_command().args(args).output()?)
}

fn write_components(dir: &Path) -> Result<[String; 3], Box<dyn Error>> {
    let one = dir.join("rotor1.txt");
    let two = dir.join("rotor2.txt");
    let reflector = dir.join("reflector.txt");
    fs::write(&one, ROTOR_ONE)?;
    fs::write(&two, format!("{}\n", ROTOR_TWO))?;
    fs::write(&reflector, REFLECTOR)?;
    Ok([
        one.to_str().unwrap().to_string(),
        two.to_str().unwrap().to_string(),
        reflector.to_str().unwrap().to_string(),
    ])
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("enigma "), "unexpected version line: {}", stdout);
    assert!(stdout.contains("build"));
    Ok(())
}

#[test]
fn running_without_subcommand_displays_help() -> Result<(), Box<dyn Error>> {
    let output = enigma_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("translate"));
    Ok(())
}

#[test]
fn encrypt_then_decrypt_with_component_files() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let [one, two, reflector] = write_components(dir.path())?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let recovered = dir.path().join("recovered.txt");
    fs::write(&plain, "the enemy approaches from the north\nsend help\n")?;

    let encrypt = run(&[
        "encrypt",
        "--rotor-one",
        &one,
        "--rotor-two",
        &two,
        "--reflector",
        &reflector,
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
    ])?;
    assert!(
        encrypt.status.success(),
        "encrypt failed: {}",
        String::from_utf8_lossy(&encrypt.stderr)
    );
    assert!(String::from_utf8(encrypt.stdout)?.contains("Translation successfully completed."));
    assert_ne!(fs::read(&cipher)?, fs::read(&plain)?);

    let decrypt = run(&[
        "decrypt",
        "--rotor-one",
        &one,
        "--rotor-two",
        &two,
        "--reflector",
        &reflector,
        cipher.to_str().unwrap(),
        recovered.to_str().unwrap(),
    ])?;
    assert!(
        decrypt.status.success(),
        "decrypt failed: {}",
        String::from_utf8_lossy(&decrypt.stderr)
    );
    assert_eq!(fs::read(&recovered)?, fs::read(&plain)?);
    Ok(())
}

#[test]
fn generate_info_translate_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let settings = dir.path().join("settings.json");
    let plain = dir.path().join("message.txt");
    fs::write(&plain, "abc xyz\n")?;

    let generate = run(&["generate", "--seed", "99", settings.to_str().unwrap()])?;
    assert!(
        generate.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&generate.stderr)
    );
    let generate_stdout = String::from_utf8(generate.stdout)?;
    assert!(generate_stdout.contains("Fingerprint:"));

    let info = run(&["info", "--settings", settings.to_str().unwrap()])?;
    assert!(info.status.success());
    let info_stdout = String::from_utf8(info.stdout)?;
    assert!(info_stdout.contains("Rotor one:"));
    assert!(info_stdout.contains("Reflector:"));
    assert!(info_stdout.contains("a b c d e f"));

    // Output defaults to <INPUT>.out
    let translate = run(&["translate", "--settings", settings.to_str().unwrap(), plain.to_str().unwrap()])?;
    assert!(
        translate.status.success(),
        "translate failed: {}",
        String::from_utf8_lossy(&translate.stderr)
    );
    let cipher = dir.path().join("message.txt.out");
    let translated = fs::read(&cipher)?;
    assert_eq!(translated.len(), 8);
    assert_eq!(translated[3], b' ');
    assert_eq!(translated[7], b'\n');
    Ok(())
}

#[test]
fn invalid_reflector_is_reported() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let [one, two, _] = write_components(dir.path())?;
    let bad = dir.path().join("bad_reflector.txt");
    fs::write(&bad, "abcdefghijklmnopqrstuvwxyz")?;
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    fs::write(&plain, "hello")?;

    let output = run(&[
        "translate",
        "--rotor-one",
        &one,
        "--rotor-two",
        &two,
        "--reflector",
        bad.to_str().unwrap(),
        plain.to_str().unwrap(),
        cipher.to_str().unwrap(),
    ])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Problem with"), "stderr: {}", stderr);
    assert!(stderr.contains("bad_reflector.txt"));
    assert!(!cipher.exists());
    Ok(())
}

#[test]
fn strict_mode_rejects_uppercase() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let [one, two, reflector] = write_components(dir.path())?;
    let plain = dir.path().join("plain.txt");
    fs::write(&plain, "hello World\n")?;

    let lenient = run(&[
        "translate", "--rotor-one", &one, "--rotor-two", &two, "--reflector", &reflector,
        plain.to_str().unwrap(),
    ])?;
    assert!(lenient.status.success());

    let strict = run(&[
        "translate", "--strict", "--rotor-one", &one, "--rotor-two", &two, "--reflector",
        &reflector, plain.to_str().unwrap(),
    ])?;
    assert!(!strict.status.success());
    assert!(String::from_utf8(strict.stderr)?.contains("Unsupported symbol 'W' at offset 6"));
    Ok(())
}

#[test]
fn missing_machine_source_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let plain = dir.path().join("plain.txt");
    fs::write(&plain, "hello")?;

    let output = run(&["translate", plain.to_str().unwrap()])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("--settings"));
    Ok(())
}
