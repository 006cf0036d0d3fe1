//! Language negotiation: which language a request is served in, and where
//! the same page lives in the other languages.
//!
//! ```rust
//! use grait_site::negotiation::{resolve, Resolution};
//! use grait_site::i18n::Language;
//!
//! assert_eq!(
//!     resolve("/", Some("de,en;q=0.5")),
//!     Resolution::Redirect { location: "/de".to_string(), language: Language::GERMAN },
//! );
//! ```

mod accept_language;
mod alternates;
mod resolver;

pub use accept_language::negotiate;
pub use alternates::{alternate_urls, AlternateUrl};
pub use resolver::{prefixed_path, resolve, Action, Resolution};
