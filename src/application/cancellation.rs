//! Cancellation plumbing for use-case handlers.

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// The caller cancelled the operation. Not a recoverable domain failure.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Operation was cancelled")]
pub struct Cancelled;

/// Awaits `fut` unless `token` fires first.
///
/// On cancellation the pending future is dropped, aborting it. A token that
/// is already cancelled wins without polling `fut` at all.
pub async fn cancellable<F>(token: &CancellationToken, fut: F) -> Result<F::Output, Cancelled>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(Cancelled),
        output = fut => Ok(output),
    }
}
