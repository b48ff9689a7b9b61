//! Injection Tokens
//!
//! Corresponds to packages/core/src/di/injection_token.ts
//!
//! A token is a lookup key with a description for debugging. Two tokens are
//! equal only if they are the same token, even when their descriptions match.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_TOKEN_ID: AtomicUsize = AtomicUsize::new(1);

/// Identity of a token, independent of the value type it provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(usize);

pub struct InjectionToken<T> {
    id: TokenId,
    desc: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> InjectionToken<T> {
    pub fn new(desc: &'static str) -> Self {
        InjectionToken {
            id: TokenId(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed)),
            desc,
            _type: PhantomData,
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn desc(&self) -> &'static str {
        self.desc
    }
}

// Manual impls: `T` only describes the provided value, it is never stored.
impl<T> Clone for InjectionToken<T> {
    fn clone(&self) -> Self {
        InjectionToken {
            id: self.id,
            desc: self.desc,
            _type: PhantomData,
        }
    }
}

impl<T> PartialEq for InjectionToken<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for InjectionToken<T> {}

impl<T> Hash for InjectionToken<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for InjectionToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionToken")
            .field("id", &self.id.0)
            .field("desc", &self.desc)
            .finish()
    }
}

impl<T> fmt::Display for InjectionToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InjectionToken {}", self.desc)
    }
}

/// `{provide, useFactory, deps}` provider record.
pub struct FactoryProvider<T: 'static> {
    pub provide: &'static InjectionToken<T>,
    pub use_factory: fn() -> T,
    pub deps: Vec<TokenId>,
}

impl<T: 'static> FactoryProvider<T> {
    /// Run the factory. Dependencies are not resolved here.
    pub fn create(&self) -> T {
        (self.use_factory)()
    }
}

impl<T: 'static> fmt::Debug for FactoryProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryProvider")
            .field("provide", self.provide)
            .field("deps", &self.deps)
            .finish()
    }
}
