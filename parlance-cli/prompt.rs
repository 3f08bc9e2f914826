//! Line-based resolution of interactive answers.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Parses a boolean answer token.
///
/// Accepts `y`, `yes`, `true`, `n`, `no` and `false`, ignoring case and
/// surrounding whitespace.
///
/// # Returns
///
/// `None` when the token is not recognized (including the empty string).
pub fn parse_bool(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// A single question asked over an input and an output channel.
pub struct Interaction<'a> {
    prompt: String,
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Interaction<'a> {
    /// Creates an interaction.
    ///
    /// # Parameters
    ///
    /// * `prompt` - Text shown before the default hint
    /// * `input` - Channel the answer is read from
    /// * `output` - Channel the prompt is written to
    pub fn new(
        prompt: impl Into<String>,
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            input,
            output,
        }
    }

    /// Asks a yes/no question and reads one answer line.
    ///
    /// The prompt is followed by ` [Yn]: ` or ` [yN]: ` depending on
    /// `default`. An empty answer selects the default. Blocks until a line is
    /// available or the input ends.
    ///
    /// # Errors
    ///
    /// - [`Error::WritePrompt`] if the prompt cannot be written
    /// - [`Error::ReadInput`] if reading the answer fails
    /// - [`Error::InputExhausted`] if the input ends before any answer
    /// - [`Error::InvalidBoolean`] if the answer is not a recognized token
    pub fn resolve_bool(self, default: bool) -> Result<bool> {
        let hint = if default { "Yn" } else { "yN" };
        write!(self.output, "{} [{hint}]: ", self.prompt)
            .and_then(|()| self.output.flush())
            .map_err(|source| Error::WritePrompt { source })?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::ReadInput { source })?;
        if read == 0 {
            return Err(Error::InputExhausted);
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }

        parse_bool(answer).ok_or_else(|| Error::InvalidBoolean {
            input: answer.to_string(),
        })
    }
}
