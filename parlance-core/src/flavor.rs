//! Color and weight emphasis for terminal text.

use console::Style;

/// Base colors used by the display primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Failure markers.
    Red,
    /// Success markers.
    Green,
    /// Highlighted values and prompt cues.
    Cyan,
    /// The terminal's default foreground; only weight applies.
    Default,
}

impl Color {
    fn style(self) -> Style {
        let style = Style::new();
        match self {
            Color::Red => style.red(),
            Color::Green => style.green(),
            Color::Cyan => style.cyan(),
            Color::Default => style,
        }
    }
}

/// Applies color and weight to `text`.
///
/// Pure and idempotent: the same arguments always produce the same bytes.
/// Callers decide `styled` from the color setting, usually through
/// [`ColorSetting::resolve`](crate::ColorSetting::resolve).
///
/// # Parameters
///
/// * `text` - Text to emphasize
/// * `color` - Base color
/// * `bold` - Whether to add bold weight on top of the color
/// * `styled` - When `false` the text is returned unchanged
///
/// # Returns
///
/// The text wrapped in ANSI styling sequences, or the plain text.
pub fn paint(text: &str, color: Color, bold: bool, styled: bool) -> String {
    let mut style = color.style().force_styling(styled);
    if bold {
        style = style.bold();
    }
    style.apply_to(text).to_string()
}
