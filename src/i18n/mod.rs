//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: the languages the site is published in, and the default one
//! - `language`: `Language`, a code that is known to be supported
//! - `strings`: the static copy and slug tables
//! - `catalog`: key lookup with default-language and raw-key fallback
//! - `validator`: startup coverage checks for the tables
//! - `metrics`: fallback counters
//!
//! # Example
//!
//! ```rust
//! use grait_site::i18n::{translate, Language};
//!
//! assert_eq!(translate("nav.contact", Language::GERMAN.code()), "Kontakt");
//! assert_eq!(translate("nav.contact", "xx"), "Contact");
//! assert_eq!(translate("no.such.key", "en"), "no.such.key");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use catalog::{localized_slug, translate, Entry, Lookup, LookupIssue, TranslationTable};
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
