//! Translation catalogs and the sources they are loaded from.
//!
//! A catalog document is a JSON array of entries:
//!
//! ```json
//! [
//!   { "id": "FAILED", "translation": "ÉCHEC" },
//!   { "id": "Hello {{.Name}}", "translation": "Bonjour {{.Name}}" }
//! ]
//! ```
//!
//! Catalog files are named `<locale>.all.json`, e.g. `fr-fr.all.json`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::locale;

/// Suffix shared by all catalog file names.
pub const CATALOG_SUFFIX: &str = ".all.json";

/// Catalogs compiled into the crate, keyed by normalized locale.
const EMBEDDED: &[(&str, &str)] = &[
    ("de-de", include_str!("../i18n/resources/de-de.all.json")),
    ("en-us", include_str!("../i18n/resources/en-us.all.json")),
    ("es-es", include_str!("../i18n/resources/es-es.all.json")),
    ("fr-fr", include_str!("../i18n/resources/fr-fr.all.json")),
];

#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
    #[serde(default)]
    translation: String,
}

/// Parsed message catalog for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Parses a catalog document.
    ///
    /// Entries with an empty translation are skipped so the key itself is used.
    ///
    /// # Parameters
    ///
    /// * `locale` - Normalized locale, used for error reporting
    /// * `document` - JSON catalog text
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseCatalog`] if the document is not a valid catalog.
    pub fn parse(locale: &str, document: &str) -> Result<Self> {
        let entries: Vec<Entry> =
            serde_json::from_str(document).map_err(|source| Error::ParseCatalog {
                locale: locale.to_string(),
                source,
            })?;

        let messages = entries
            .into_iter()
            .filter(|entry| !entry.translation.is_empty())
            .map(|entry| (entry.id, entry.translation))
            .collect();

        Ok(Self { messages })
    }

    /// Looks up the localized template for `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    /// Number of translated messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when the catalog holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Provider of catalogs by locale.
pub trait CatalogSource {
    /// Normalized locales this source can provide.
    ///
    /// # Errors
    ///
    /// Returns an error when the source itself is unavailable.
    fn locales(&self) -> Result<Vec<String>>;

    /// Loads the catalog for a normalized locale.
    ///
    /// Returns `Ok(None)` when the source has no catalog for `locale`.
    ///
    /// # Errors
    ///
    /// Returns an error when a catalog exists but cannot be read or parsed.
    fn load(&self, locale: &str) -> Result<Option<Catalog>>;
}

/// Catalogs bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogs;

impl CatalogSource for EmbeddedCatalogs {
    fn locales(&self) -> Result<Vec<String>> {
        Ok(EMBEDDED.iter().map(|(name, _)| (*name).to_string()).collect())
    }

    fn load(&self, locale: &str) -> Result<Option<Catalog>> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == locale)
            .map(|(name, document)| Catalog::parse(name, document))
            .transpose()
    }
}

/// Catalogs read from `<dir>/<locale>.all.json`.
///
/// File stems are normalized like any other locale, so `fr_FR.all.json`
/// serves `fr-fr`. When two files normalize to the same locale, the one
/// already spelled in normalized form wins.
#[derive(Debug, Clone)]
pub struct DirectoryCatalogs {
    dir: PathBuf,
}

impl DirectoryCatalogs {
    /// Creates a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory catalogs are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps each normalized locale to the catalog file serving it.
    fn scan(&self) -> Result<BTreeMap<String, PathBuf>> {
        let unreadable = |source| Error::ReadCatalogDir {
            path: self.dir.clone(),
            source,
        };

        let mut files = BTreeMap::new();
        for entry in fs::read_dir(&self.dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let name = entry.file_name();
            let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(CATALOG_SUFFIX)) else {
                continue;
            };

            let locale = locale::normalize(stem);
            if locale.is_empty() {
                continue;
            }
            if stem == locale || !files.contains_key(&locale) {
                files.insert(locale, entry.path());
            }
        }
        Ok(files)
    }
}

impl CatalogSource for DirectoryCatalogs {
    fn locales(&self) -> Result<Vec<String>> {
        Ok(self.scan()?.into_keys().collect())
    }

    fn load(&self, locale: &str) -> Result<Option<Catalog>> {
        let Some(path) = self.scan()?.remove(locale) else {
            return Ok(None);
        };

        let document = match fs::read_to_string(&path) {
            Ok(document) => document,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(Error::ReadCatalog {
                    locale: locale.to_string(),
                    path,
                    source,
                })
            }
        };

        tracing::debug!(locale, path = %path.display(), "read catalog file");
        Catalog::parse(locale, &document).map(Some)
    }
}
