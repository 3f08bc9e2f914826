//! Error types for the presentation layer and the capability that lets errors
//! translate themselves.

use std::fmt;
use std::io;

use parlance_core::template::{self, Values};
use parlance_core::Translator;
use thiserror::Error;

/// An error that can render a localized message of itself.
///
/// Any error type may implement this. The default translated message is the
/// plain message, so ordinary errors opt in with an empty `impl` block.
pub trait TranslatableError: std::error::Error {
    /// Untranslated message.
    fn plain_message(&self) -> String {
        self.to_string()
    }

    /// Message localized through `translator`.
    fn translated_message(&self, _translator: &Translator) -> String {
        self.plain_message()
    }
}

impl TranslatableError for io::Error {}

impl TranslatableError for parlance_core::Error {}

/// Adapter giving any error the default (untranslated) behavior.
#[derive(Debug)]
pub struct Plain<E>(pub E);

impl<E: fmt::Display> fmt::Display for Plain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<E: std::error::Error> std::error::Error for Plain<E> {}

impl<E: std::error::Error> TranslatableError for Plain<E> {}

/// A failure described by a message template and its values.
///
/// The template doubles as the catalog key, so the message is localized when
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageError {
    template: String,
    values: Values,
}

impl MessageError {
    /// Creates an error from a template and its values.
    pub fn new(template: impl Into<String>, values: Values) -> Self {
        Self {
            template: template.into(),
            values,
        }
    }

    /// Message template used as the catalog key.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Values substituted into the template.
    pub fn values(&self) -> &Values {
        &self.values
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&template::interpolate(&self.template, Some(&self.values)))
    }
}

impl std::error::Error for MessageError {}

impl TranslatableError for MessageError {
    fn translated_message(&self, translator: &Translator) -> String {
        translator.translate(&self.template, Some(&self.values))
    }
}

/// Main error type for presentation-layer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Translator or settings could not be built
    #[error(transparent)]
    Core(#[from] parlance_core::Error),

    /// Table output could not be written
    #[error("Failed to write table: {source}")]
    WriteTable {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Prompt text could not be written
    #[error("Failed to write prompt: {source}")]
    WritePrompt {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input channel failed while reading an answer
    #[error("Failed to read input: {source}")]
    ReadInput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input channel ended before any answer
    #[error("Input ended before an answer was given")]
    InputExhausted,

    /// The answer is not a recognized boolean token
    #[error("Invalid input (not y, n, yes, or no): {input}")]
    InvalidBoolean {
        /// The rejected answer, trimmed
        input: String,
    },

    /// Table rows could not be read
    #[error("Failed to read table rows: {source}")]
    ReadRows {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A `NAME=VALUE` substitution argument is malformed
    #[error("Invalid value {pair}: expected NAME=VALUE")]
    InvalidValue {
        /// The offending argument
        pair: String,
    },
}

/// Specialized `Result` type for presentation-layer operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Catalog key and values describing this error, when it has one.
    fn message(&self) -> Option<(&'static str, Values)> {
        let message = match self {
            Error::Core(_) => return None,
            Error::WriteTable { source } => (
                "Failed to write table: {{.Error}}",
                Values::new().with("Error", source),
            ),
            Error::WritePrompt { source } => (
                "Failed to write prompt: {{.Error}}",
                Values::new().with("Error", source),
            ),
            Error::ReadInput { source } => (
                "Failed to read input: {{.Error}}",
                Values::new().with("Error", source),
            ),
            Error::InputExhausted => ("Input ended before an answer was given", Values::new()),
            Error::InvalidBoolean { input } => (
                "Invalid input (not y, n, yes, or no): {{.Input}}",
                Values::new().with("Input", input),
            ),
            Error::ReadRows { source } => (
                "Failed to read table rows: {{.Error}}",
                Values::new().with("Error", source),
            ),
            Error::InvalidValue { pair } => (
                "Invalid value {{.Pair}}: expected NAME=VALUE",
                Values::new().with("Pair", pair),
            ),
        };
        Some(message)
    }
}

impl TranslatableError for Error {
    fn translated_message(&self, translator: &Translator) -> String {
        match self.message() {
            Some((key, values)) => translator.translate(key, Some(&values)),
            None => self.plain_message(),
        }
    }
}
