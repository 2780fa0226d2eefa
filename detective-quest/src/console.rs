use std::io::{self, BufRead, Write};

/// Line-oriented player interaction. The game only ever talks to the player
/// through this trait, so sessions can be driven by a script in tests.
pub trait Console {
    /// Writes one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Shows `prompt` and reads one line of input, without its line
    /// terminator. Returns `None` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// [`Console`] over any reader/writer pair, typically locked stdin/stdout.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_terminator(&line).to_string()))
    }
}

/// Removes one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
