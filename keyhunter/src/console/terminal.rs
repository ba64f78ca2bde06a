//! Line-based terminal console.

use colored::Colorize;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::time::Duration;

use super::{parse_choice, ChoiceError, Console, ConsoleError};
use crate::events::Event;
use crate::narration::{self, Line};

const BORDER: &str = "-*-*-*-*-*-*-*-*-*-*-";

/// Reads answers line by line and writes styled narration.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    pause: Duration,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause: Duration::ZERO,
        }
    }

    /// Pause after every narrative block.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Get the output back, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Bytes that are not UTF-8 become replacement characters, so they read as a bad answer.
    fn next_line(&mut self) -> Result<String, ConsoleError> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn render(&mut self, line: &Line) -> io::Result<()> {
        match line {
            Line::Text(s) => writeln!(self.output, "{}", s),
            Line::Title(s) => writeln!(self.output, "{}", s.red().bold()),
            Line::Highlight(s) => writeln!(self.output, "{}", s.bright_cyan()),
            Line::Banner(s) => writeln!(self.output, "{}", s.yellow()),
            Line::Border => writeln!(self.output, "{}", BORDER.bold()),
            Line::Blank => writeln!(self.output),
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn choose(&mut self, question: &str, options: &[u8]) -> Result<u8, ConsoleError> {
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;

            let answer = self.next_line()?;
            match parse_choice(&answer, options) {
                Ok(choice) => return Ok(choice),
                Err(ChoiceError::NotANumber) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?
                }
                Err(ChoiceError::NotOffered) => {
                    writeln!(self.output, "Please choose from the following: {:?}", options)?
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_line()
    }

    fn show(&mut self, event: &Event) -> Result<(), ConsoleError> {
        for line in narration::describe(event) {
            self.render(&line)?;
        }
        self.output.flush()?;
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
        Ok(())
    }
}
