//! Schema Metadata
//!
//! Corresponds to packages/core/src/metadata/schema.ts

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A schema definition associated with an NgModule.
///
/// The template compiler checks these by name to allow otherwise unknown
/// elements and properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaMetadata {
    pub name: Cow<'static, str>,
}

impl SchemaMetadata {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        SchemaMetadata { name: name.into() }
    }
}

/// Allows non-Angular elements and element properties named with dash case,
/// the naming convention of custom elements.
pub const CUSTOM_ELEMENTS_SCHEMA: SchemaMetadata = SchemaMetadata {
    name: Cow::Borrowed("custom-elements"),
};

/// Allows any property on any element.
pub const NO_ERRORS_SCHEMA: SchemaMetadata = SchemaMetadata {
    name: Cow::Borrowed("no-errors-schema"),
};
