//! Terminal presentation layer for command-line tools.
//!
//! Every line a tool shows the user goes through a [`Ui`]: templates are
//! localized by the bound translator, optionally colorized according to the
//! color setting, and routed to the `out` or `err` channel. Tables and yes/no
//! prompts share the same context.

use std::io::BufRead;

pub mod error;
pub mod logging;
pub mod prompt;
pub mod streams;
pub mod table;
pub mod ui;


pub use error::{Error, MessageError, Plain, Result, TranslatableError};
pub use prompt::{parse_bool, Interaction};
pub use streams::{CaptureBuffer, Streams};
pub use table::TableWriter;
pub use ui::Ui;

/// Default column padding for tables
pub const DEFAULT_PADDING: usize = 2;

/// Parses a `NAME=VALUE` substitution argument.
///
/// Splits on the first `=`; the value may itself contain `=` or be empty.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if there is no `=` or the name is empty.
pub fn parse_value_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidValue {
            pair: pair.to_string(),
        }),
    }
}

/// Reads table rows, one per line, cells separated by tabs.
///
/// Trailing carriage returns are stripped. Blank lines become rows with a
/// single empty cell.
///
/// # Errors
///
/// Returns [`Error::ReadRows`] if reading fails or the input is not UTF-8.
pub fn read_rows(reader: impl BufRead) -> Result<Vec<Vec<String>>> {
    reader
        .lines()
        .map(|line| -> Result<Vec<String>> {
            let line = line.map_err(|source| Error::ReadRows { source })?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            Ok(line.split('\t').map(str::to_string).collect())
        })
        .collect()
}
