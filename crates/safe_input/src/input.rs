//! Reject-and-reprompt readers.

use super::banner::pretty_header;
use super::error::InputError;
use regex::Regex;
use std::fmt::{Debug, Display};
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;
use tracing::{debug, instrument, trace};

/// Console input provider.
///
/// Every reader writes its prompt on a fresh line, blocks for one line of
/// input, and loops until the line passes validation. Generic over the
/// streams so the same code drives a terminal or an in-memory script.
#[derive(Debug)]
pub struct SafeInput<R, W> {
    reader: R,
    writer: W,
}

impl SafeInput<StdinLock<'static>, Stdout> {
    /// Input provider bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> SafeInput<R, W> {
    /// Creates an input provider over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), InputError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Writes `text` verbatim.
    pub fn print(&mut self, text: impl Display) -> Result<(), InputError> {
        write!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Writes a 60-column banner around `msg`.
    pub fn banner(&mut self, msg: &str) -> Result<(), InputError> {
        self.print(pretty_header(msg))
    }

    /// Reads a line that is not empty.
    #[instrument(skip(self))]
    pub fn non_empty_line(&mut self, prompt: &str) -> Result<String, InputError> {
        loop {
            let line = self.ask(&format!("{}: ", prompt))?;
            if !line.is_empty() {
                return Ok(line);
            }
            debug!("Rejected empty line");
        }
    }

    /// Reads an integer.
    #[instrument(skip(self))]
    pub fn int(&mut self, prompt: &str) -> Result<i64, InputError> {
        self.number(&format!("{}: ", prompt), "Please enter an integer.", None)
    }

    /// Reads an integer within `[low, high]`.
    #[instrument(skip(self))]
    pub fn ranged_int(&mut self, prompt: &str, low: i64, high: i64) -> Result<i64, InputError> {
        self.number(
            &format!("{} [{} - {}]: ", prompt, low, high),
            "Please enter an integer.",
            Some((low, high)),
        )
    }

    /// Reads a floating-point number.
    #[instrument(skip(self))]
    pub fn double(&mut self, prompt: &str) -> Result<f64, InputError> {
        self.number(&format!("{}: ", prompt), "Please enter a valid number.", None)
    }

    /// Reads a floating-point number within `[low, high]`.
    #[instrument(skip(self))]
    pub fn ranged_double(&mut self, prompt: &str, low: f64, high: f64) -> Result<f64, InputError> {
        self.number(
            &format!("{} [{:?} - {:?}]: ", prompt, low, high),
            "Please enter a valid number.",
            Some((low, high)),
        )
    }

    /// Reads a `Y`/`N` answer (either case): true for yes.
    #[instrument(skip(self))]
    pub fn yes_no(&mut self, prompt: &str) -> Result<bool, InputError> {
        loop {
            let line = self.ask(&format!("{} [Y/N]: ", prompt))?;
            if line.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if line.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            debug!(%line, "Rejected yes/no answer");
            self.say(format_args!(
                "Invalid input: '{}'. Please enter 'Y' or 'N'.",
                line
            ))?;
        }
    }

    /// Reads a line matching `pattern` in full.
    ///
    /// # Errors
    ///
    /// [`InputError::Pattern`] if `pattern` is not a valid regular
    /// expression; nothing is prompted in that case.
    #[instrument(skip(self))]
    pub fn matching(&mut self, prompt: &str, pattern: &str) -> Result<String, InputError> {
        let full = Regex::new(&format!("^(?:{})$", pattern))?;
        loop {
            let line = self.ask(&format!("{}: ", prompt))?;
            if full.is_match(&line) {
                return Ok(line);
            }
            debug!(%line, pattern, "Rejected line not matching pattern");
            self.say(format_args!(
                "Invalid input: '{}'. Input must match the pattern: {}",
                line, pattern
            ))?;
        }
    }

    /// Shared loop for the numeric readers.
    fn number<T>(
        &mut self,
        prompt: &str,
        not_a_number: &str,
        bounds: Option<(T, T)>,
    ) -> Result<T, InputError>
    where
        T: FromStr + PartialOrd + Display + Debug + Copy,
    {
        loop {
            let line = self.ask(prompt)?;
            let Ok(value) = line.trim().parse::<T>() else {
                debug!(%line, "Rejected non-numeric input");
                self.say(format_args!("Invalid input: '{}'. {}", line, not_a_number))?;
                continue;
            };

            match bounds {
                Some((low, high)) if value < low || value > high => {
                    debug!(%value, %low, %high, "Rejected out-of-range input");
                    self.say(format_args!(
                        "Input is out of range. Please enter a value between {:?} and {:?}.",
                        low, high
                    ))?;
                }
                _ => return Ok(value),
            }
        }
    }

    /// Prompts on a new line and reads one line with its terminator removed.
    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "\n{}", prompt)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        // Undecodable bytes become U+FFFD and fail validation like any other typo.
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!(%line, "Line read");
        Ok(line)
    }
}
