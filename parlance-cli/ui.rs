//! The UI context: translation, flavoring and routing of every line of output.

use std::io::Write;

use parlance_core::{
    paint, resolve, CatalogSource, Color, ColorSetting, Config, EmbeddedCatalogs, Translator,
    Values,
};

use crate::error::{Error, Result, TranslatableError};
use crate::prompt::Interaction;
use crate::streams::{CaptureBuffer, Streams};
use crate::table::TableWriter;

/// Cue appended to interactive questions. Never translated.
pub const PROMPT_CUE: &str = ">>";

/// Catalog key of the success marker.
pub const OK_KEY: &str = "OK";

/// Catalog key of the failure marker.
pub const FAILED_KEY: &str = "FAILED";

/// Presentation context owning the streams, color setting and translator.
///
/// Build one per process (or one per test) and pass it by reference to
/// whatever produces output. Writes to the same channel appear in call order;
/// nothing orders `out` against `err`.
#[derive(Debug)]
pub struct Ui {
    streams: Streams,
    color: ColorSetting,
    translator: Translator,
}

impl Ui {
    /// Creates a UI on the process standard streams using the embedded catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog for the configured locale cannot be
    /// parsed.
    pub fn new(config: &dyn Config) -> Result<Self> {
        Self::with_streams(config, &EmbeddedCatalogs, Streams::stdio())
    }

    /// Creates a UI on the given streams and catalog source.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen catalog exists but cannot be read or
    /// parsed. No UI is produced in that case.
    pub fn with_streams(
        config: &dyn Config,
        source: &dyn CatalogSource,
        streams: Streams,
    ) -> Result<Self> {
        let translator = resolve(&config.locale(), source)?;
        Ok(Self::from_parts(streams, config.color_setting(), translator))
    }

    /// Assembles a UI from already-resolved parts.
    pub fn from_parts(streams: Streams, color: ColorSetting, translator: Translator) -> Self {
        Self {
            streams,
            color,
            translator,
        }
    }

    /// Creates a UI on in-memory streams with color disabled and identity
    /// translation.
    ///
    /// # Returns
    ///
    /// The UI and handles to the captured `out` and `err` bytes.
    pub fn for_test(input: impl Into<Vec<u8>>) -> (Self, CaptureBuffer, CaptureBuffer) {
        let (streams, out, err) = Streams::capture(input);
        let ui = Self::from_parts(streams, ColorSetting::Disabled, Translator::identity());
        (ui, out, err)
    }

    /// Color setting fixed at construction.
    pub fn color_setting(&self) -> ColorSetting {
        self.color
    }

    /// Bound translator.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Translates `template` and substitutes `values` without displaying it.
    pub fn translate_text(&self, template: &str, values: Option<&Values>) -> String {
        self.translator.translate(template, values)
    }

    /// Writes the translated template to `out`.
    pub fn display_text(&mut self, template: &str, values: Option<&Values>) {
        let text = self.translate_text(template, values);
        self.write_out(&text);
    }

    /// Writes `"<key>: <value>"` to `out`.
    ///
    /// `key` is translated on its own; `values` only apply to `template`.
    pub fn display_pair(&mut self, key: &str, template: &str, values: Option<&Values>) {
        let line = format!(
            "{}: {}",
            self.translate_text(key, None),
            self.translate_text(template, values)
        );
        self.write_out(&line);
    }

    /// Writes the translated template to `out` with every value highlighted.
    ///
    /// Values are flavored before interpolation so their styling survives
    /// translation.
    pub fn display_text_with_flavor(&mut self, template: &str, values: Option<&Values>) {
        let flavored = values.map(|values| values.map_values(|v| self.flavor(v, Color::Cyan, true)));
        let text = self.translate_text(template, flavored.as_ref());
        self.write_out(&text);
    }

    /// Writes the translated text to `out` in bold.
    pub fn display_help_header(&mut self, text: &str) {
        let header = self.flavor(&self.translate_text(text, None), Color::Default, true);
        self.write_out(&header);
    }

    /// Writes a green, bold, translated `OK` to `out`.
    pub fn display_ok(&mut self) {
        let ok = self.flavor(&self.translate_text(OK_KEY, None), Color::Green, true);
        self.write_out(&ok);
    }

    /// Writes an empty line to `out`.
    pub fn display_newline(&mut self) {
        self.write_out("");
    }

    /// Writes the translated warning to `err`.
    pub fn display_warning(&mut self, template: &str, values: Option<&Values>) {
        let text = self.translate_text(template, values);
        self.write_err(&text);
    }

    /// Writes each translated warning to `err`, one line each, in order.
    pub fn display_warnings<S: AsRef<str>>(&mut self, warnings: &[S]) {
        for warning in warnings {
            let text = self.translate_text(warning.as_ref(), None);
            self.write_err(&text);
        }
    }

    /// Reports a failure.
    ///
    /// The error's translated message goes to `err`; a red, bold, translated
    /// `FAILED` then goes to `out`.
    pub fn display_error<E: TranslatableError + ?Sized>(&mut self, err: &E) {
        let message = err.translated_message(&self.translator);
        self.write_err(&message);

        let failed = self.flavor(&self.translate_text(FAILED_KEY, None), Color::Red, true);
        self.write_out(&failed);
    }

    /// Writes `table` to `out` with aligned columns.
    ///
    /// # Parameters
    ///
    /// * `prefix` - Text prepended to every row
    /// * `table` - Rows of cells
    /// * `padding` - Spaces between the widest cell of a column and the next
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteTable`] if writing to `out` fails.
    pub fn display_table<R, S>(&mut self, prefix: &str, table: &[R], padding: usize) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut writer = TableWriter::new(self.streams.out.as_mut(), padding);
        for row in table {
            writer.write_row(prefix, row.as_ref());
        }
        writer.flush().map_err(|source| Error::WriteTable { source })
    }

    /// Asks a yes/no question on `out` and reads the answer from `in`.
    ///
    /// The question is shown as given, followed by a highlighted cue and the
    /// default hint. An empty answer selects `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is not a recognized boolean, the input
    /// ends, or either channel fails.
    pub fn display_bool_prompt(&mut self, question: &str, default: bool) -> Result<bool> {
        let cue = self.flavor(PROMPT_CUE, Color::Cyan, true);
        let Streams { input, out, .. } = &mut self.streams;
        Interaction::new(format!("{question}{cue}"), &mut **input, &mut **out)
            .resolve_bool(default)
    }

    fn flavor(&self, text: &str, color: Color, bold: bool) -> String {
        let styled = self.color.resolve(|| self.streams.out_is_terminal());
        paint(text, color, bold, styled)
    }

    fn write_out(&mut self, line: &str) {
        write_line(self.streams.out.as_mut(), "out", line);
    }

    fn write_err(&mut self, line: &str) {
        write_line(self.streams.err.as_mut(), "err", line);
    }
}

/// Best-effort line output; failures are traced and otherwise ignored.
fn write_line(sink: &mut dyn Write, channel: &'static str, line: &str) {
    if let Err(err) = writeln!(sink, "{line}").and_then(|()| sink.flush()) {
        tracing::debug!(channel, %err, "dropped output line");
    }
}
