//! Command line argument parsing for the parlance utility

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use parlance_cli::{parse_value_pair, DEFAULT_PADDING};
use parlance_core::{ColorSetting, Values};

/// Localized, flavored terminal output
///
/// Renders messages, tables and prompts through the parlance presentation
/// layer so catalogs and color handling can be checked from a shell.
#[derive(Parser, Debug)]
#[command(
    name = "parlance",
    version,
    about = "Localized, flavored terminal output",
    long_about = "parlance translates message templates through the bundled or a \
                  user-supplied catalog, applies color emphasis and writes the result \
                  to standard output or standard error."
)]
pub struct ParlanceOpts {
    /// Locale to translate into (overrides PARLANCE_LOCALE, LC_ALL and LANG)
    #[arg(short = 'l', long = "locale", global = true, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// When to color output: auto, always or never (overrides PARLANCE_COLOR)
    #[arg(long = "color", global = true, value_name = "WHEN")]
    pub color: Option<ColorSetting>,

    /// Directory of <locale>.all.json catalogs to use instead of the bundled ones
    #[arg(long = "catalog-dir", global = true, value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Increase diagnostic verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Substitution values shared by the template commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ValueArgs {
    /// Substitution value for a {{.NAME}} placeholder
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_value_pair)]
    pub set: Vec<(String, String)>,
}

impl ValueArgs {
    /// Values to substitute, or `None` when no `--set` was given.
    pub fn values(&self) -> Option<Values> {
        if self.set.is_empty() {
            return None;
        }
        Some(self.set.iter().map(|(k, v)| (k.as_str(), v)).collect())
    }
}

/// Presentation primitive to run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a translated message
    Text {
        /// Message template
        template: String,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Print a translated message with highlighted values
    Flavor {
        /// Message template
        template: String,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Print a "KEY: VALUE" line
    Pair {
        /// Key, translated on its own
        key: String,
        /// Value template
        template: String,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Print a bold section header
    Header {
        /// Header text
        text: String,
    },

    /// Print the success marker
    Ok,

    /// Print an empty line
    Newline,

    /// Print warnings to standard error
    Warn {
        /// Warning messages, one line each
        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// Report a failure and exit with status 1
    Fail {
        /// Error message template
        template: String,
        #[command(flatten)]
        values: ValueArgs,
    },

    /// Align tab-separated rows read from standard input
    Table {
        /// Text prepended to every row
        #[arg(short = 'p', long = "prefix", default_value = "")]
        prefix: String,
        /// Spaces between columns
        #[arg(short = 'n', long = "padding", default_value_t = DEFAULT_PADDING)]
        padding: usize,
    },

    /// Ask a yes/no question; exit 0 for yes, 1 for no
    Confirm {
        /// Question to ask, translated before display
        question: String,
        /// Make "no" the answer for empty input
        #[arg(long = "default-no")]
        default_no: bool,
        #[command(flatten)]
        values: ValueArgs,
    },
}
