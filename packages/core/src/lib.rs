//! Angular core declarations shared with the compiler
//!
//! Mirrors packages/core/src: DI tokens and schema metadata. Only the
//! declarations live here; nothing in this crate resolves providers.

pub mod application_tokens;
pub mod di;
pub mod metadata;

pub use di::{FactoryProvider, InjectionToken, TokenId};
pub use metadata::schema::{SchemaMetadata, CUSTOM_ELEMENTS_SCHEMA, NO_ERRORS_SCHEMA};
