//! Locale-aware routing and static translation lookup for multilingual sites.
//!
//! The library exposes the i18n core (`i18n`), the per-request page context
//! built from it (`context`), and the HTTP surface (`server`) used by the
//! `locale-router` binary.

pub mod config;
pub mod context;
pub mod i18n;
pub mod server;
