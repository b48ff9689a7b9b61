#![deny(clippy::all)]

/**
 * Angular Rust Compiler - shared utilities
 *
 * String helpers, the UTF-8 encoder, the structural value visitor and the
 * sync/async value wrapper, with optional Node.js bindings
 */

#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

// Core modules (root level - mirrors packages/compiler/src/*.ts)
pub mod config;
pub mod error;
pub mod logging;
pub mod parse_util;
pub mod sync_async;
pub mod util;
pub mod value;
mod version;

// Re-exports
pub use config::{CompilerConfig, GlobalContext, HostKind};
pub use error::{CompilerError, Result};
pub use sync_async::SyncAsync;
pub use util::Version;
pub use value::{visit_value, Value, ValueTransformer, ValueVisitor};
pub use version::VERSION;

/// Convert dash-case to camelCase
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn dash_case_to_camel_case(input: String) -> String {
    util::dash_case_to_camel_case(&input)
}

/// UTF-8 bytes of a JavaScript string
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn utf8_encode(input: String) -> napi::bindgen_prelude::Buffer {
    util::utf8_encode(&input).into()
}

/// Escape a string for use inside a regular expression
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn escape_regex(input: String) -> String {
    util::escape_regex(&input)
}

/// Get compiler version
#[cfg(feature = "napi-bindings")]
#[napi]
pub fn get_version() -> String {
    VERSION.full.clone()
}
