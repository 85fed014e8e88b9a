//! Execution context for repository calls.
//!
//! A [`Dispatcher`] decides where the body of a remote call runs: on a tokio
//! runtime as a background task, or inline inside whichever task awaits the
//! result. Repositories receive one through their constructor.
//!
//! Whatever happens to the call body (a panic, runtime shutdown), the
//! returned [`Pending`] resolves exactly once to an [`ApiResult`].

use futures::future::{BoxFuture, FutureExt};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::ApiFault;
use crate::result::ApiResult;
use crate::traits::HttpError;

#[derive(Debug, Clone)]
enum DispatchKind {
    Spawn(Handle),
    Inline,
}

/// Where repository calls execute.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    kind: DispatchKind,
}

impl Dispatcher {
    /// Spawn calls onto the given runtime.
    pub fn new(handle: Handle) -> Self {
        Self {
            kind: DispatchKind::Spawn(handle),
        }
    }

    /// Spawn calls onto the runtime of the calling task.
    ///
    /// Outside a runtime this falls back to [`Dispatcher::inline`].
    pub fn current() -> Self {
        match Handle::try_current() {
            Ok(handle) => Self::new(handle),
            Err(_) => {
                tracing::warn!("No tokio runtime in scope, dispatching inline");
                Self::inline()
            }
        }
    }

    /// Run calls inside the awaiting task.
    pub fn inline() -> Self {
        Self {
            kind: DispatchKind::Inline,
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.kind, DispatchKind::Inline)
    }

    /// Start a call and return its single pending result.
    pub fn dispatch<T, F>(&self, call: F) -> Pending<T>
    where
        T: Send + 'static,
        F: Future<Output = ApiResult<T>> + Send + 'static,
    {
        let guarded = AssertUnwindSafe(call)
            .catch_unwind()
            .map(|outcome| outcome.unwrap_or_else(panicked));

        let inner = match &self.kind {
            DispatchKind::Spawn(handle) => PendingInner::Spawned(handle.spawn(guarded)),
            DispatchKind::Inline => PendingInner::Inline(guarded.boxed()),
        };
        Pending { inner }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::current()
    }
}

fn panicked<T>(panic: Box<dyn Any + Send>) -> ApiResult<T> {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    let fault = ApiFault::Other(format!("Request panicked: {}", detail));
    tracing::error!(error = %fault, "Repository call panicked");
    ApiResult::from_fault(&fault)
}

enum PendingInner<T> {
    Spawned(JoinHandle<ApiResult<T>>),
    Inline(BoxFuture<'static, ApiResult<T>>),
}

/// The not-yet-available result of one repository call.
///
/// Dropping a spawned `Pending` detaches the call; it still runs to
/// completion.
pub struct Pending<T> {
    inner: PendingInner<T>,
}

impl<T> Pending<T> {
    /// A pending result that is already resolved.
    pub fn ready(result: ApiResult<T>) -> Self
    where
        T: Send + 'static,
    {
        Self {
            inner: PendingInner::Inline(futures::future::ready(result).boxed()),
        }
    }
}

impl<T> Future for Pending<T> {
    type Output = ApiResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().inner {
            PendingInner::Spawned(handle) => Pin::new(handle).poll(cx).map(|joined| {
                joined.unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "Repository task did not complete");
                    ApiResult::from_fault(&ApiFault::Transport(HttpError::Cancelled))
                })
            }),
            PendingInner::Inline(call) => call.as_mut().poll(cx),
        }
    }
}
