//! Configuration primitives consumed when a UI is constructed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable overriding the color setting.
pub const COLOR_ENV: &str = "PARLANCE_COLOR";

/// Environment variable selecting the locale ahead of the POSIX variables.
pub const LOCALE_ENV: &str = "PARLANCE_LOCALE";

/// POSIX locale variables, in lookup order.
const POSIX_LOCALE_ENVS: [&str; 2] = ["LC_ALL", "LANG"];

/// Tri-state policy controlling whether output is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSetting {
    /// Always emit styling, even when output is redirected.
    Enabled,
    /// Never emit styling.
    Disabled,
    /// Emit styling only when the output channel is a terminal.
    #[default]
    Auto,
}

impl ColorSetting {
    /// Decides whether styling applies under this setting.
    ///
    /// The terminal check is only invoked for [`ColorSetting::Auto`].
    ///
    /// # Parameters
    ///
    /// * `is_terminal` - Capability check for the output channel
    ///
    /// # Returns
    ///
    /// Returns `true` when text should be styled.
    pub fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            ColorSetting::Enabled => true,
            ColorSetting::Disabled => false,
            ColorSetting::Auto => is_terminal(),
        }
    }
}

impl FromStr for ColorSetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "always" | "enabled" | "1" => Ok(ColorSetting::Enabled),
            "false" | "off" | "never" | "disabled" | "0" => Ok(ColorSetting::Disabled),
            "auto" => Ok(ColorSetting::Auto),
            _ => Err(Error::InvalidColorSetting(s.to_string())),
        }
    }
}

impl fmt::Display for ColorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSetting::Enabled => write!(f, "enabled"),
            ColorSetting::Disabled => write!(f, "disabled"),
            ColorSetting::Auto => write!(f, "auto"),
        }
    }
}

/// Read-only view of the settings a UI needs at construction time.
pub trait Config {
    /// Color policy for flavored output.
    fn color_setting(&self) -> ColorSetting;

    /// Raw locale string; normalization happens during translator resolution.
    fn locale(&self) -> String;
}

/// Concrete settings assembled from flags and the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Color policy
    pub color: ColorSetting,
    /// Locale identifier, empty for the default locale
    pub locale: String,
}

impl Settings {
    /// Creates settings from explicit values.
    pub fn new(color: ColorSetting, locale: impl Into<String>) -> Self {
        Self {
            color,
            locale: locale.into(),
        }
    }

    /// Builds settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorSetting`] if `PARLANCE_COLOR` holds an
    /// unrecognized value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings through an arbitrary variable lookup.
    ///
    /// The color comes from `PARLANCE_COLOR` (default [`ColorSetting::Auto`]).
    /// The locale comes from the first non-empty of `PARLANCE_LOCALE`,
    /// `LC_ALL` and `LANG`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorSetting`] for an unrecognized color value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = match lookup(COLOR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse()?,
            None => ColorSetting::Auto,
        };

        let locale = std::iter::once(LOCALE_ENV)
            .chain(POSIX_LOCALE_ENVS)
            .filter_map(&lookup)
            .find(|v| !v.trim().is_empty())
            .unwrap_or_default();

        Ok(Self { color, locale })
    }

    /// Returns a copy with the color replaced, when one is given.
    #[must_use]
    pub fn with_color(mut self, color: Option<ColorSetting>) -> Self {
        if let Some(color) = color {
            self.color = color;
        }
        self
    }

    /// Returns a copy with the locale replaced, when one is given.
    #[must_use]
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}

impl Config for Settings {
    fn color_setting(&self) -> ColorSetting {
        self.color
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }
}
