//! Inert stand-ins for asynchronous results.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

/// Query and retrieval surface of a pending asynchronous result.
pub trait ResultHandle<T> {
    /// Returns whether the request was honoured.
    fn cancel(&self, may_interrupt_if_running: bool) -> bool;
    fn is_cancelled(&self) -> bool;
    fn is_done(&self) -> bool;
    fn get(&self) -> Option<T>;
    fn get_timeout(&self, timeout: Duration) -> Option<T>;
}

/// A handle that never completes and never holds a value.
///
/// Retrieval returns `None` straight away instead of blocking, and cancellation
/// is refused. Awaiting it resolves to `None` on the first poll.
pub struct StubbedFuture<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> StubbedFuture<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for StubbedFuture<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StubbedFuture<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StubbedFuture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubbedFuture").finish()
    }
}

impl<T> ResultHandle<T> for StubbedFuture<T> {
    fn cancel(&self, may_interrupt_if_running: bool) -> bool {
        tracing::trace!(may_interrupt_if_running, "cancel ignored by stubbed future");
        false
    }

    fn is_cancelled(&self) -> bool {
        false
    }

    fn is_done(&self) -> bool {
        false
    }

    fn get(&self) -> Option<T> {
        None
    }

    fn get_timeout(&self, _timeout: Duration) -> Option<T> {
        None
    }
}

impl<T> Future for StubbedFuture<T> {
    type Output = Option<T>;

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Ready(None)
    }
}
