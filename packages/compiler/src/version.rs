//! Version Information
//!
//! Corresponds to packages/compiler/src/version.ts

use crate::util::Version;
use once_cell::sync::Lazy;

pub static VERSION: Lazy<Version> = Lazy::new(|| {
    let version = Version::new(env!("CARGO_PKG_VERSION"));
    tracing::debug!(version = %version, "compiler version");
    version
});
