// api/abort.rs - Cancellation for in-flight requests
//
// A component holds the handle for as long as it lives and fires it from
// its cleanup hook. Dropping the handle without firing it does NOT abort,
// so a request outliving its handle still runs to completion.

use futures::channel::oneshot;
use futures::future::{select, Either};
use futures::Future;
use std::pin::pin;

use crate::api::error::ApiError;

/// Fires the paired [`AbortToken`].
pub struct AbortHandle {
    tx: oneshot::Sender<()>,
}

/// Resolves when the paired [`AbortHandle`] fires.
pub struct AbortToken {
    rx: oneshot::Receiver<()>,
}

/// Creates a connected handle/token pair.
pub fn pair() -> (AbortHandle, AbortToken) {
    let (tx, rx) = oneshot::channel();
    (AbortHandle { tx }, AbortToken { rx })
}

impl AbortHandle {
    /// Aborts whatever is running inside the paired token's scope.
    pub fn abort(self) {
        let _ = self.tx.send(());
    }
}

impl AbortToken {
    /// Runs `fut` to completion unless the paired handle fires first.
    ///
    /// On abort the future is dropped, which cancels the underlying
    /// request. A handle dropped without firing leaves `fut` running.
    pub async fn scope<F, T>(self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let fut = pin!(fut);
        match select(fut, self.rx).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right((Ok(()), _)) => Err(ApiError::Aborted),
            Either::Right((Err(_), fut)) => fut.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_scope_passes_through_a_completed_future() {
        let (_handle, token) = pair();
        let outcome = block_on(token.scope(async { Ok(42) }));
        assert_eq!(outcome.unwrap(), 42);
    }

    #[test]
    fn test_fired_handle_aborts_a_pending_future() {
        let (handle, token) = pair();
        handle.abort();
        let outcome: Result<(), _> = block_on(token.scope(futures::future::pending()));
        assert!(matches!(outcome, Err(ApiError::Aborted)));
    }

    #[test]
    fn test_dropped_handle_does_not_abort() {
        let (handle, token) = pair();
        drop(handle);
        let outcome = block_on(token.scope(async { Ok("still running") }));
        assert_eq!(outcome.unwrap(), "still running");
    }

    #[test]
    fn test_errors_pass_through_unchanged() {
        let (_handle, token) = pair();
        let outcome: Result<(), _> =
            block_on(token.scope(async { Err(ApiError::Status(404)) }));
        assert!(matches!(outcome, Err(ApiError::Status(404))));
    }
}
