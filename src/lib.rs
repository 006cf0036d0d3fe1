//! grait.io site core: language negotiation, translation lookup, and the
//! HTTP host that ties them to page rendering.

pub mod config;
pub mod content;
pub mod i18n;
pub mod negotiation;
pub mod seo;
pub mod server;
