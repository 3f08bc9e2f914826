//! # parlance-core
//!
//! Translation and flavoring primitives for terminal output.
//!
//! This crate turns a message key plus substitution values into localized text
//! and applies color emphasis according to a tri-state color setting. It does no
//! terminal I/O of its own; the `parlance-cli` crate routes the results to the
//! standard streams.
//!
//! # Example
//!
//! ```rust
//! use parlance_core::{resolve, EmbeddedCatalogs, Values};
//!
//! let translator = resolve("fr_FR.UTF-8", &EmbeddedCatalogs)?;
//! assert_eq!(translator.locale(), "fr-fr");
//!
//! let values = Values::new().with("Name", "demo");
//! let text = translator.translate("Hello {{.Name}}", Some(&values));
//! assert_eq!(text, "Bonjour demo");
//! # Ok::<(), parlance_core::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod flavor;
pub mod locale;
pub mod template;
pub mod translate;

mod error;

pub use catalog::{Catalog, CatalogSource, DirectoryCatalogs, EmbeddedCatalogs};
pub use config::{ColorSetting, Config, Settings};
pub use error::{Error, Result};
pub use flavor::{paint, Color};
pub use template::Values;
pub use translate::{resolve, Translator};
