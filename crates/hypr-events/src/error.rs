//! Error types for event socket operations

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::EventType;

/// Errors that can occur while subscribing to Hyprland events
#[derive(Debug, Error, Diagnostic)]
pub enum EventError {
    /// The HYPRLAND_INSTANCE_SIGNATURE environment variable is not set
    #[error("HYPRLAND_INSTANCE_SIGNATURE environment variable not set - is Hyprland running?")]
    #[diagnostic(code(hypr_events::socket::signature_not_set))]
    SignatureNotSet,

    /// The event socket path does not exist
    #[error("Hyprland event socket not found at {path}")]
    #[diagnostic(code(hypr_events::socket::not_found))]
    SocketNotFound { path: PathBuf },

    /// Failed to connect to the event socket
    #[error("Failed to connect to event socket at {path}: {source}")]
    #[diagnostic(code(hypr_events::socket::connect))]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the socket failed
    #[error("Failed to read from event socket: {0}")]
    #[diagnostic(code(hypr_events::read))]
    Read(#[source] std::io::Error),

    /// The compositor closed the socket
    #[error("Event socket closed by the compositor")]
    #[diagnostic(code(hypr_events::closed))]
    ConnectionClosed,

    /// The read was abandoned because the cancellation token fired
    #[error("Event read cancelled")]
    #[diagnostic(code(hypr_events::cancelled))]
    Cancelled,

    /// A tag name that is not part of the event protocol
    #[error("Unknown event type: {0}")]
    #[diagnostic(
        code(hypr_events::unknown_event),
        help("run `hypr-events --list-events` to see every supported tag")
    )]
    UnknownEvent(String),

    /// A subscribed record carried fewer fields than its shape needs
    #[error(
        "Malformed {event} payload: expected {expected} field(s), found {found} in {payload:?}"
    )]
    #[diagnostic(code(hypr_events::malformed_payload))]
    MalformedPayload {
        event: EventType,
        expected: usize,
        found: usize,
        payload: String,
    },

    /// Shutting down the socket failed
    #[error("Failed to close event socket: {0}")]
    #[diagnostic(code(hypr_events::close))]
    Close(#[source] std::io::Error),

    /// The subscription loop stopped
    #[error("Event processing: {0}")]
    #[diagnostic(code(hypr_events::processing))]
    Processing(#[source] Box<EventError>),
}

impl EventError {
    /// Wrap an error with subscription-loop context
    pub(crate) fn processing(source: EventError) -> Self {
        Self::Processing(Box::new(source))
    }

    /// The innermost error, looking through `Processing` wrappers
    pub fn root_cause(&self) -> &EventError {
        match self {
            Self::Processing(inner) => inner.root_cause(),
            other => other,
        }
    }

    /// Whether this error (or the error it wraps) is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), Self::Cancelled)
    }

    /// Whether this error (or the error it wraps) means the compositor went away
    pub fn is_connection_closed(&self) -> bool {
        match self.root_cause() {
            Self::ConnectionClosed => true,
            Self::Read(err) => matches!(
                err.kind(),
                std::io::ErrorKind::ConnectionReset | std::io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }
}
