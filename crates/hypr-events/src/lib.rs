//! Typed client for the Hyprland event socket
//!
//! Hyprland publishes state changes (focus, workspaces, monitors, layouts,
//! ...) on a one-way Unix socket, `.socket2.sock`. This crate reads that
//! stream and delivers each event to an [`EventHandler`] as a typed value.
//!
//! ## Architecture
//!
//! - `reader`: a single socket read that can be abandoned via a `CancellationToken`
//! - `frame`: splits a read into `TAG>>payload` records, dropping noise
//! - `decode`: a table of per-event decoders plus [`dispatch`]
//! - `handler`: the [`EventHandler`] callback trait
//! - `client`: [`EventClient`], which runs the read/split/dispatch loop
//! - `socket`: discovery of the running instance's socket
//!
//! ## Protocol
//!
//! Each line is `TAG>>payload`, the payload being comma-separated fields.
//! There is no escaping, so free text (window titles) only ever appears as
//! the last field of a record.
//!
//! ## Example
//!
//! ```ignore
//! use hypr_events::{EventClient, EventHandler, EventType, OpenWindow};
//! use tokio_util::sync::CancellationToken;
//!
//! struct Logger;
//!
//! impl EventHandler for Logger {
//!     fn open_window(&mut self, window: OpenWindow) {
//!         println!("{} opened on workspace {}", window.class, window.workspace_name);
//!     }
//! }
//!
//! let mut client = EventClient::connect_default().await?;
//! let err = client
//!     .subscribe(&CancellationToken::new(), &mut Logger, &[EventType::OpenWindow])
//!     .await;
//! ```

mod client;
mod decode;
mod error;
mod frame;
mod handler;
mod reader;
mod socket;
mod types;

pub use client::{EventClient, MalformedPolicy};
pub use decode::{decode, decoder, dispatch, Decoder};
pub use error::EventError;
pub use frame::{split_records, RawRecord, SEPARATOR};
pub use handler::{DefaultEventHandler, EventHandler};
pub use reader::{read_with_cancel, BUF_SIZE};
pub use socket::{
    event_socket_path, event_socket_path_in, EVENT_SOCKET_NAME, INSTANCE_SIGNATURE_ENV,
    RUNTIME_DIR_ENV,
};
pub use types::*;
