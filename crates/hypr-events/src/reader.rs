//! Cancellable reads from the event socket
//!
//! A read races against a [`CancellationToken`]. Whichever finishes first
//! decides the outcome; the other branch is dropped inside `select!`, so
//! nothing keeps running after the call returns. Tokio's socket reads are
//! cancel-safe: a dropped read has consumed no bytes and the stream can be
//! read again straight away.

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::EventError;

/// Size of the per-read buffer. Records longer than this are truncated.
pub const BUF_SIZE: usize = 8192;

/// Perform exactly one read into `buf`, abandoning it if `cancel` fires
///
/// # Errors
///
/// Returns `EventError::Cancelled` if the token fires first (or already has).
/// Returns `EventError::ConnectionClosed` on end of stream.
/// Returns `EventError::Read` if the read itself fails.
pub async fn read_with_cancel<R>(
    reader: &mut R,
    buf: &mut [u8],
    cancel: &CancellationToken,
) -> Result<usize, EventError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let result = tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!("Event read cancelled");
            return Err(EventError::Cancelled);
        }
        result = reader.read(buf) => result,
    };

    match result {
        Ok(0) => Err(EventError::ConnectionClosed),
        Ok(n) => Ok(n),
        Err(e) => Err(EventError::Read(e)),
    }
}
