use crate::utils::error::{AdminError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A single in-flight admin request.
///
/// The request task is spawned when the handle is created, so the HTTP call
/// is issued whether or not the handle is ever polled. The backing channel is
/// written exactly once: the operation either completes with a value or fails
/// with an already-mapped `AdminError`. Dropping the handle abandons the wait
/// without cancelling the request.
pub struct PendingOperation<T> {
    rx: oneshot::Receiver<Result<T>>,
}

impl<T: Send + 'static> PendingOperation<T> {
    /// Spawns `op` onto the current runtime and returns the handle.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn<F>(op: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // The receiver may already be gone if the caller timed out;
            // the result is discarded in that case.
            let _ = tx.send(op.await);
        });
        Self { rx }
    }
}

impl<T> Future for PendingOperation<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Sender dropped without resolving: the request task was torn
            // down before it could complete.
            Poll::Ready(Err(_)) => Poll::Ready(Err(AdminError::Interrupted)),
            Poll::Pending => Poll::Pending,
        }
    }
}
