//! Serial console front end
//!
//! Feeds bytes from the UART into a line buffer and hands every complete
//! line to the interpreter. No editing keys: what arrives is what runs.
//! A line that overflowed the buffer is rejected whole with `E04`.

use core::fmt::Write;

use log::warn;

use super::{ConsoleError, Interpreter, LineBuffer, OutputBuffer};
use crate::config::{LINE_SIZE, OUTPUT_BUFFER_SIZE, REGISTRY_CAPACITY};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Console state machine
pub struct SerialConsole<'i, 'a, const N: usize = REGISTRY_CAPACITY> {
    interpreter: &'i Interpreter<'a, N>,
    line: LineBuffer,
    output: [u8; OUTPUT_BUFFER_SIZE],
    /// Echo typed characters back to the terminal
    echo: bool,
    /// Swallow the LF of a CRLF pair
    after_cr: bool,
}

impl<'i, 'a, const N: usize> SerialConsole<'i, 'a, N> {
    /// Create new console
    pub fn new(interpreter: &'i Interpreter<'a, N>) -> Self {
        Self {
            interpreter,
            line: LineBuffer::new(),
            output: [0u8; OUTPUT_BUFFER_SIZE],
            echo: true,
            after_cr: false,
        }
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Process a single input byte
    ///
    /// Returns Some(result) once a line was run or rejected, None if more input needed.
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> Option<Result<(), ConsoleError>> {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == b'\r');

        match byte {
            b'\n' if after_cr => None,

            // Enter
            b'\r' | b'\n' => {
                if self.echo {
                    let _ = out.write_str("\r\n");
                }

                let result = if self.line.overflowed() {
                    warn!("input line longer than {} bytes discarded", LINE_SIZE);
                    let err = ConsoleError::InvalidValue;
                    let _ = write!(out, "{}\r\n", err);
                    Some(Err(err))
                } else if self.line.as_str().trim().is_empty() {
                    None
                } else {
                    Some(self.dispatch_line(out))
                };

                self.line.clear();
                self.print_prompt(out);
                result
            }

            // Printable character
            0x20..=0x7E => {
                if self.line.push(byte) && self.echo {
                    let _ = out.write_char(byte as char);
                }
                None
            }

            _ => None,
        }
    }

    fn dispatch_line(&mut self, out: &mut dyn Write) -> Result<(), ConsoleError> {
        let mut buffer = OutputBuffer::new(&mut self.output);
        let result = self.interpreter.process_input(self.line.as_str(), &mut buffer);

        let _ = out.write_str(buffer.as_str());
        if let Err(err) = result {
            let _ = write!(out, "{}\r\n", err);
        }
        result
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = out.write_str("> ");
    }

    /// Print welcome banner
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = write!(out, "\r\n{}\r\n", VERSION);
        let _ = out.write_str("Type 'help' for commands.\r\n");
        self.print_prompt(out);
    }
}
