use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use tracing::warn;

/// Symbols a well-formed message may contain besides `a..=z`
pub const MESSAGE_SEPARATORS: [u8; 2] = [b' ', b'\n'];

/// Whether `symbol` belongs to the message alphabet (a-z, space, newline)
pub fn is_message_symbol(symbol: u8) -> bool {
    symbol.is_ascii_lowercase() || MESSAGE_SEPARATORS.contains(&symbol)
}

/// Reject messages containing anything outside a-z, space and newline.
/// Reports the first offending symbol and its byte offset.
pub fn validate_message(message: &[u8]) -> Result<()> {
    match message.iter().position(|&b| !is_message_symbol(b)) {
        Some(offset) => Err(EnigmaError::UnsupportedSymbol {
            symbol: message[offset] as char,
            offset,
        }),
        None => Ok(()),
    }
}

/// Lazy symbol-by-symbol translation of a byte stream through a machine.
///
/// One symbol in, one symbol out, in order. The machine's rotor state is
/// consumed as the iterator advances; stopping early leaves already emitted
/// output valid. Restarting requires a freshly built machine.
pub struct Transform<'m, I> {
    input: I,
    machine: &'m mut Machine,
    warned: bool,
}

impl<I: Iterator<Item = u8>> Iterator for Transform<'_, I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let symbol = self.input.next()?;
        if !self.warned && !is_message_symbol(symbol) {
            warn!(
                "passing through symbol {:?} outside the message alphabet",
                symbol as char
            );
            self.warned = true;
        }
        Some(self.machine.translate(symbol))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.input.size_hint()
    }
}

/// Translate `input` through `machine`, lazily
pub fn transform<I>(input: I, machine: &mut Machine) -> Transform<'_, I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    Transform {
        input: input.into_iter(),
        machine,
        warned: false,
    }
}

/// Translate a whole byte message
pub fn transform_bytes(input: &[u8], machine: &mut Machine) -> Vec<u8> {
    transform(input.iter().copied(), machine).collect()
}

/// Translate a string. Non-ASCII characters pass through untouched.
pub fn transform_str(input: &str, machine: &mut Machine) -> String {
    input.chars().map(|c| machine.translate_char(c)).collect()
}
