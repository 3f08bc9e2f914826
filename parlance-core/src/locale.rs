//! Locale normalization and selection against the supported catalog set.

/// Locale used when nothing better matches.
pub const DEFAULT_LOCALE: &str = "en-us";

/// Normalizes a raw locale identifier.
///
/// Lowercases, converts `_` to `-`, and drops encoding (`.UTF-8`) and modifier
/// (`@euro`) suffixes. The POSIX `C` and `POSIX` locales normalize to an empty
/// string.
///
/// # Parameters
///
/// * `raw` - Locale as supplied by configuration or the environment
///
/// # Returns
///
/// The normalized identifier, e.g. `fr_FR.UTF-8` becomes `fr-fr`.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let end = trimmed.find(['.', '@']).unwrap_or(trimmed.len());
    let tag = trimmed[..end].replace('_', "-").to_ascii_lowercase();

    match tag.as_str() {
        "c" | "posix" => String::new(),
        _ => tag,
    }
}

/// Returns the language subtag of a normalized locale (`fr` for `fr-fr`).
pub fn language(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Picks the locale to translate into.
///
/// An exact match wins; otherwise the first supported locale sharing the
/// language subtag; otherwise [`DEFAULT_LOCALE`].
///
/// # Parameters
///
/// * `raw` - Requested locale, normalized internally
/// * `supported` - Normalized locales with an available catalog
pub fn determine(raw: &str, supported: &[String]) -> String {
    let requested = normalize(raw);
    if requested.is_empty() {
        return DEFAULT_LOCALE.to_string();
    }

    if supported.iter().any(|s| *s == requested) {
        return requested;
    }

    let lang = language(&requested);
    supported
        .iter()
        .find(|s| language(s) == lang)
        .cloned()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}
