//! Localized, flavored terminal output
//!
//! Exposes each presentation primitive as a subcommand so catalogs, color
//! handling, tables and prompts can be exercised from a shell.

use std::io;
use std::process;

use clap::Parser;

mod opts;

use opts::{Command, ParlanceOpts};

use parlance_cli::{logging, read_rows, MessageError, Result, Streams, Ui};
use parlance_core::{CatalogSource, DirectoryCatalogs, EmbeddedCatalogs, Settings};

const PROGRAM_NAME: &str = "parlance";

/// Exit status for a successful run or a "yes" answer
const EXIT_SUCCESS: i32 = 0;
/// Exit status for a reported failure or a "no" answer
const EXIT_FAILURE: i32 = 1;
/// Exit status for errors in the presentation layer itself
const EXIT_ERROR: i32 = 2;

fn main() {
    let opts = ParlanceOpts::parse();
    logging::init(opts.verbose);

    let mut ui = match build_ui(&opts) {
        Ok(ui) => ui,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(EXIT_ERROR);
        }
    };

    let status = match run(&mut ui, opts.command) {
        Ok(status) => status,
        Err(err) => {
            tracing::debug!(%err, "command failed");
            ui.display_error(&err);
            EXIT_ERROR
        }
    };

    process::exit(status);
}

/// Builds the UI from the environment, overridden by command line flags.
fn build_ui(opts: &ParlanceOpts) -> Result<Ui> {
    let settings = Settings::from_env()?
        .with_color(opts.color)
        .with_locale(opts.locale.clone());

    let source: Box<dyn CatalogSource> = match &opts.catalog_dir {
        Some(dir) => Box::new(DirectoryCatalogs::new(dir)),
        None => Box::new(EmbeddedCatalogs),
    };

    let ui = Ui::with_streams(&settings, source.as_ref(), Streams::stdio())?;
    tracing::debug!(
        locale = ui.translator().locale(),
        color = %ui.color_setting(),
        "presentation layer ready"
    );
    Ok(ui)
}

/// Runs one subcommand, returning the process exit status.
fn run(ui: &mut Ui, command: Command) -> Result<i32> {
    match command {
        Command::Text { template, values } => {
            ui.display_text(&template, values.values().as_ref());
        }
        Command::Flavor { template, values } => {
            ui.display_text_with_flavor(&template, values.values().as_ref());
        }
        Command::Pair {
            key,
            template,
            values,
        } => {
            ui.display_pair(&key, &template, values.values().as_ref());
        }
        Command::Header { text } => ui.display_help_header(&text),
        Command::Ok => ui.display_ok(),
        Command::Newline => ui.display_newline(),
        Command::Warn { messages } => ui.display_warnings(&messages),
        Command::Fail { template, values } => {
            let failure = MessageError::new(template, values.values().unwrap_or_default());
            ui.display_error(&failure);
            return Ok(EXIT_FAILURE);
        }
        Command::Table { prefix, padding } => {
            let rows = read_rows(io::stdin().lock())?;
            ui.display_table(&prefix, &rows, padding)?;
        }
        Command::Confirm {
            question,
            default_no,
            values,
        } => {
            let question = ui.translate_text(&question, values.values().as_ref());
            let answer = ui.display_bool_prompt(&question, !default_no)?;
            tracing::debug!(answer, "prompt answered");
            return Ok(if answer { EXIT_SUCCESS } else { EXIT_FAILURE });
        }
    }

    Ok(EXIT_SUCCESS)
}
