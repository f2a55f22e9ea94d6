//! # Console
//!
//! Prompt/response plumbing over any `BufRead` + `Write` pair. The real
//! application hands in stdin/stdout; tests hand in `Cursor`s and inspect
//! the transcript.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::AppError;

/// A line-oriented terminal: prompts go out, trimmed lines come back.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Prints `label` without a newline and reads one trimmed line.
    ///
    /// End of input (closed stdin) is an `UnexpectedEof` error; the menu
    /// loops cannot meaningfully continue without a terminal.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompts once and parses the reply; a parse failure is
    /// [`AppError::InvalidInput`], aborting the calling flow.
    pub fn prompt_parsed<T: FromStr>(&mut self, label: &str) -> Result<T, AppError> {
        self.prompt(label)?
            .parse()
            .map_err(|_| AppError::InvalidInput)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_input() {
        let mut c = console("  hello  \n");
        assert_eq!(c.prompt("> ").unwrap(), "hello");
    }

    #[test]
    fn test_prompt_writes_label() {
        let mut c = console("x\n");
        c.prompt("Select an option: ").unwrap();
        let transcript = String::from_utf8(c.output).unwrap();
        assert_eq!(transcript, "Select an option: ");
    }

    #[test]
    fn test_prompt_eof_is_an_error() {
        let mut c = console("");
        let err = c.prompt("> ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_prompt_parsed_number() {
        let mut c = console("42\n");
        let n: i32 = c.prompt_parsed("> ").unwrap();
        assert_eq!(n, 42);
    }

    #[test]
    fn test_prompt_parsed_rejects_garbage() {
        let mut c = console("seven\n");
        let err = c.prompt_parsed::<i32>("> ").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput));
    }
}
