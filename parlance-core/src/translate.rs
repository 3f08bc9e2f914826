//! Translation of message keys into localized, interpolated text.

use crate::catalog::{Catalog, CatalogSource};
use crate::error::Result;
use crate::locale::{self, DEFAULT_LOCALE};
use crate::template::{self, Values};

/// Translation function bound to one locale.
///
/// Translation is total: keys missing from the catalog, or every key when no
/// catalog is loaded, translate to themselves before placeholder
/// interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    locale: String,
    catalog: Option<Catalog>,
}

impl Translator {
    /// Creates a translator that returns every key unchanged.
    pub fn identity() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            catalog: None,
        }
    }

    /// Creates a translator backed by `catalog`.
    pub fn with_catalog(locale: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            locale: locale.into(),
            catalog: Some(catalog),
        }
    }

    /// Normalized locale this translator was resolved for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns `true` when no catalog is loaded.
    pub fn is_identity(&self) -> bool {
        self.catalog.is_none()
    }

    /// Translates `key` and substitutes `values` into the result.
    ///
    /// # Parameters
    ///
    /// * `key` - Message key, itself a valid template
    /// * `values` - Placeholder values, if any
    ///
    /// # Returns
    ///
    /// The localized text. Placeholders without a value stay as written.
    pub fn translate(&self, key: &str, values: Option<&Values>) -> String {
        let template = self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.get(key))
            .unwrap_or(key);
        template::interpolate(template, values)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

/// Resolves the translator for a locale.
///
/// The locale is normalized and matched against the locales `source` offers
/// (see [`locale::determine`]). When the source has no catalog for the chosen
/// locale the identity translator is returned.
///
/// # Parameters
///
/// * `requested` - Raw locale string from configuration
/// * `source` - Where catalogs come from
///
/// # Errors
///
/// Returns an error if the source cannot be listed, or if the chosen catalog
/// exists but cannot be read or parsed.
pub fn resolve(requested: &str, source: &dyn CatalogSource) -> Result<Translator> {
    let chosen = locale::determine(requested, &source.locales()?);

    match source.load(&chosen)? {
        Some(catalog) => {
            tracing::debug!(
                requested,
                locale = %chosen,
                messages = catalog.len(),
                "loaded translation catalog"
            );
            Ok(Translator::with_catalog(chosen, catalog))
        }
        None => {
            tracing::debug!(requested, locale = %chosen, "no catalog, using identity translation");
            Ok(Translator {
                locale: chosen,
                catalog: None,
            })
        }
    }
}
