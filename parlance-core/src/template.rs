//! Named placeholder substitution for message templates.
//!
//! Templates reference values with `{{.Name}}`. Whitespace inside the braces is
//! tolerated (`{{ .Name }}`). Names are matched literally; a placeholder with no
//! value is left in the output untouched.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Display;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitution values keyed by placeholder name.
///
/// Values are stringified when inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(BTreeMap<String, String>);

impl Values {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning the updated set.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Looks up a value by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns `true` when no values are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Returns a copy with every value passed through `f`.
    #[must_use]
    pub fn map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self(
            self.0
                .iter()
                .map(|(name, value)| (name.clone(), f(value)))
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Substitutes `{{.Name}}` placeholders in `template`.
///
/// # Parameters
///
/// * `template` - Text containing zero or more placeholders
/// * `values` - Values to substitute, or `None` to leave the template as is
///
/// # Returns
///
/// The template with every known placeholder replaced. Unknown placeholders and
/// unterminated `{{` sequences are copied verbatim.
pub fn interpolate(template: &str, values: Option<&Values>) -> String {
    let Some(values) = values.filter(|v| !v.is_empty()) else {
        return template.to_string();
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        let Some(end) = candidate[OPEN.len()..].find(CLOSE) else {
            out.push_str(candidate);
            return out;
        };

        let token_len = OPEN.len() + end + CLOSE.len();
        let inner = candidate[OPEN.len()..OPEN.len() + end].trim();

        match inner.strip_prefix('.').and_then(|name| values.get(name)) {
            Some(value) => out.push_str(value),
            None => out.push_str(&candidate[..token_len]),
        }

        rest = &candidate[token_len..];
    }

    out.push_str(rest);
    out
}
