//! Permutation sources: text that names the translation of each letter.
//!
//! A source lists target letters for `a`, `b`, ... `z` in order. Whitespace
//! between letters is ignored, only the first 26 letters are used, and
//! anything after them is ignored too.

use crate::error::{EnigmaError, Result};
use crate::permutation::ALPHABET_SIZE;
use std::path::Path;
use tracing::debug;

/// Extract the 26 wiring letters from source text
pub fn parse_source(text: &[u8]) -> Result<[u8; ALPHABET_SIZE]> {
    let mut wiring = [0u8; ALPHABET_SIZE];
    let mut count = 0;

    for &symbol in text.iter().filter(|b| !b.is_ascii_whitespace()) {
        if count == ALPHABET_SIZE {
            break;
        }
        if !symbol.is_ascii_lowercase() {
            return Err(EnigmaError::MalformedSource(format!(
                "{:?} is not a lowercase letter (letter {})",
                symbol as char,
                count + 1
            )));
        }
        wiring[count] = symbol;
        count += 1;
    }

    if count < ALPHABET_SIZE {
        return Err(EnigmaError::MalformedSource(format!(
            "expected at least {} letters, found {}",
            ALPHABET_SIZE, count
        )));
    }

    Ok(wiring)
}

/// Read and parse a permutation source file. Errors carry the file name.
pub fn load_source(path: &Path) -> Result<[u8; ALPHABET_SIZE]> {
    let name = path.display().to_string();
    let text = std::fs::read(path).map_err(|e| EnigmaError::from(e).in_component(&name))?;
    let wiring = parse_source(&text).map_err(|e| e.in_component(&name))?;
    debug!(file = %name, "loaded permutation source");
    Ok(wiring)
}
