//! Event socket client and subscription loop
//!
//! `EventClient` owns a connection to `.socket2.sock` and turns its byte
//! stream into handler calls. The socket is one-way: the compositor writes
//! newline-delimited `TAG>>payload` records and never reads.
//!
//! ## Loop
//!
//! ```text
//! read (cancellable) -> split into records -> dispatch each, in order
//! ```
//!
//! The loop only ends when a read fails: the compositor closed the socket,
//! an I/O error occurred, or the cancellation token fired. There is no
//! reconnection; callers that want to survive a compositor restart connect a
//! new client.

use std::fmt;
use std::path::Path;

use tokio::io::{AsyncRead, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::decode::dispatch;
use crate::error::EventError;
use crate::frame::{split_records, RawRecord};
use crate::handler::EventHandler;
use crate::reader::{read_with_cancel, BUF_SIZE};
use crate::socket::event_socket_path;
use crate::types::EventType;

/// What the subscription loop does with a subscribed record whose payload
/// is too short for its event shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Log a warning and continue with the next record
    #[default]
    Skip,
    /// Stop the subscription and return the error
    Abort,
}

/// Client for the compositor's event socket
///
/// Generic over the transport so tests (and callers with their own
/// connection handling) can supply any async byte stream.
///
/// # Example
///
/// ```ignore
/// let mut client = EventClient::connect_default().await?;
/// let cancel = CancellationToken::new();
/// let err = client
///     .subscribe(&cancel, &mut MyHandler, &[EventType::Workspace, EventType::OpenWindow])
///     .await;
/// eprintln!("subscription ended: {}", err);
/// ```
pub struct EventClient<S = UnixStream> {
    stream: S,
    buf: Box<[u8]>,
    policy: MalformedPolicy,
}

impl<S: fmt::Debug> fmt::Debug for EventClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventClient")
            .field("stream", &self.stream)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl EventClient<UnixStream> {
    /// Connect to the event socket at `path`
    ///
    /// # Errors
    ///
    /// Returns `EventError::ConnectionFailed` if the connection fails.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, EventError> {
        let path = path.as_ref();

        let stream = UnixStream::connect(path)
            .await
            .map_err(|e| EventError::ConnectionFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(path = %path.display(), "Connected to event socket");
        Ok(Self::from_stream(stream))
    }

    /// Discover the running instance's event socket and connect to it
    ///
    /// # Errors
    ///
    /// Returns `EventError::SignatureNotSet` or `EventError::SocketNotFound`
    /// if discovery fails, `EventError::ConnectionFailed` if connecting does.
    pub async fn connect_default() -> Result<Self, EventError> {
        let path = event_socket_path()?;
        Self::connect(path).await
    }

    /// Shut down the connection
    ///
    /// # Errors
    ///
    /// Returns `EventError::Close` if the shutdown fails.
    pub async fn close(mut self) -> Result<(), EventError> {
        self.stream.shutdown().await.map_err(EventError::Close)
    }
}

impl<S> EventClient<S>
where
    S: AsyncRead + Unpin,
{
    /// Wrap an already-connected stream
    pub fn from_stream(stream: S) -> Self {
        Self {
            stream,
            buf: vec![0u8; BUF_SIZE].into_boxed_slice(),
            policy: MalformedPolicy::default(),
        }
    }

    /// Set the policy for subscribed records that are too short for their shape
    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The current malformed-payload policy
    pub fn malformed_policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Release the underlying stream
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Read once and split the data into records
    ///
    /// This is the low-level building block of [`subscribe`](Self::subscribe);
    /// prefer `subscribe` unless you need the raw records.
    ///
    /// # Errors
    ///
    /// Returns `EventError::Cancelled`, `EventError::ConnectionClosed` or
    /// `EventError::Read` from the underlying read.
    pub async fn receive(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawRecord>, EventError> {
        let n = read_with_cancel(&mut self.stream, &mut self.buf, cancel).await?;
        debug!(bytes = n, "Read from event socket");

        Ok(split_records(&self.buf[..n]))
    }

    /// Deliver events to `handler` until a read fails or `cancel` fires
    ///
    /// Only records whose tag is in `events` are decoded and delivered, in the
    /// order they arrive. Pass [`EventType::ALL`] to receive everything.
    ///
    /// This never returns on its own: the returned error is always an
    /// `EventError::Processing` wrapping the cause. Use
    /// [`EventError::is_cancelled`] to tell a requested stop from a failure.
    pub async fn subscribe<H>(
        &mut self,
        cancel: &CancellationToken,
        handler: &mut H,
        events: &[EventType],
    ) -> EventError
    where
        H: EventHandler + ?Sized,
    {
        loop {
            let records = match self.receive(cancel).await {
                Ok(records) => records,
                Err(e) => {
                    debug!(error = %e, "Event subscription stopped");
                    return EventError::processing(e);
                }
            };

            for record in &records {
                if let Err(e) = dispatch(record, handler, events) {
                    match self.policy {
                        MalformedPolicy::Skip => {
                            warn!(tag = %record.tag, error = %e, "Skipping malformed event");
                        }
                        MalformedPolicy::Abort => return EventError::processing(e),
                    }
                }
            }
        }
    }
}
