//! Sync/Async Values
//!
//! Corresponds to `SyncAsync` in packages/compiler/src/util.ts
//!
//! A value that is either available now or produced by a future. Resource
//! loading may or may not be asynchronous; callers chain work with `then` and
//! only pay for a future when one of the inputs really is one.

use crate::error::{CompilerError, Result};
use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;

pub enum SyncAsync<T> {
    Sync(T),
    Async(BoxFuture<'static, T>),
}

impl<T: Send + 'static> SyncAsync<T> {
    pub fn from_future<F>(future: F) -> Self
    where
        F: std::future::Future<Output = T> + Send + 'static,
    {
        SyncAsync::Async(future.boxed())
    }

    pub fn is_async(&self) -> bool {
        matches!(self, SyncAsync::Async(_))
    }

    /// Unwrap a value that must already be available.
    pub fn assert_sync(self) -> Result<T> {
        match self {
            SyncAsync::Sync(value) => Ok(value),
            SyncAsync::Async(_) => Err(CompilerError::IllegalState(
                "value cannot be a promise".to_string(),
            )),
        }
    }

    /// Apply `f` now if the value is available, otherwise once it resolves.
    pub fn then<U, F>(self, f: F) -> SyncAsync<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self {
            SyncAsync::Sync(value) => SyncAsync::Sync(f(value)),
            SyncAsync::Async(pending) => {
                tracing::trace!("deferring continuation until value resolves");
                SyncAsync::Async(pending.map(f).boxed())
            }
        }
    }

    /// Collect many values, staying synchronous when none of them is pending.
    /// Results keep the order of the inputs.
    pub fn all<I>(values: I) -> SyncAsync<Vec<T>>
    where
        I: IntoIterator<Item = SyncAsync<T>>,
    {
        let values: Vec<SyncAsync<T>> = values.into_iter().collect();
        if !values.iter().any(SyncAsync::is_async) {
            return SyncAsync::Sync(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        SyncAsync::Sync(value) => Some(value),
                        SyncAsync::Async(_) => None,
                    })
                    .collect(),
            );
        }

        let pending = values.iter().filter(|v| v.is_async()).count();
        tracing::debug!(total = values.len(), pending, "joining sync/async values");
        let futures: Vec<BoxFuture<'static, T>> = values
            .into_iter()
            .map(|v| match v {
                SyncAsync::Sync(value) => future::ready(value).boxed(),
                SyncAsync::Async(pending) => pending,
            })
            .collect();
        SyncAsync::Async(future::join_all(futures).boxed())
    }

    /// Wait for the value, whichever form it is in.
    pub async fn resolve(self) -> T {
        match self {
            SyncAsync::Sync(value) => value,
            SyncAsync::Async(pending) => pending.await,
        }
    }
}

impl<T> From<T> for SyncAsync<T> {
    fn from(value: T) -> Self {
        SyncAsync::Sync(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncAsync<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncAsync::Sync(value) => f.debug_tuple("Sync").field(value).finish(),
            SyncAsync::Async(_) => f.write_str("Async(..)"),
        }
    }
}
