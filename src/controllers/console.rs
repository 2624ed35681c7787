use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::error::ShellError;

/// Line-oriented terminal: writes prompts, reads one answer per line.
pub struct Console<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Writes a multi-line block as-is.
    pub fn block(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{}", text)
    }

    /// Next line without its terminator. `InputClosed` at end of input.
    ///
    /// Bytes that are not UTF-8 come back as replacement characters, so they
    /// fail integer parsing like any other garbage.
    pub fn read_line(&mut self) -> Result<String, ShellError> {
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(ShellError::InputClosed);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn prompt(&mut self, text: &str) -> Result<String, ShellError> {
        self.line(text)?;
        self.read_line()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_writes_then_reads() {
        let mut console = Console::new(Cursor::new("7\r\n"), Vec::new());
        assert_eq!(console.prompt("Enter:").unwrap(), "7");
        assert!(matches!(console.read_line(), Err(ShellError::InputClosed)));
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Enter:\n");
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let input = vec![0xff, 0xfe, b'\n', b'1', b'\n'];
        let mut console = Console::new(Cursor::new(input), Vec::new());
        assert_eq!(console.read_line().unwrap(), "\u{fffd}\u{fffd}");
        assert_eq!(console.read_line().unwrap(), "1");
    }
}
