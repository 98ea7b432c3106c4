//! Locating the compositor's event socket
//!
//! Hyprland creates one directory per running instance under the user's
//! runtime directory:
//!
//! ```text
//! $XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket2.sock
//! ```
//!
//! `.socket2.sock` carries the event stream; `.socket.sock` (not used here)
//! carries request/response commands.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::EventError;

/// Environment variable holding the running instance's signature
pub const INSTANCE_SIGNATURE_ENV: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Environment variable holding the per-user runtime directory
pub const RUNTIME_DIR_ENV: &str = "XDG_RUNTIME_DIR";

/// File name of the event socket inside the instance directory
pub const EVENT_SOCKET_NAME: &str = ".socket2.sock";

/// Build the event socket path for an instance without touching the filesystem
pub fn event_socket_path_in(runtime_dir: &Path, signature: &str) -> PathBuf {
    runtime_dir
        .join("hypr")
        .join(signature)
        .join(EVENT_SOCKET_NAME)
}

/// Runtime directory from `$XDG_RUNTIME_DIR`, or `/run/user/<uid>` if unset
fn runtime_dir() -> PathBuf {
    match std::env::var_os(RUNTIME_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let uid = nix::unistd::getuid();
            PathBuf::from(format!("/run/user/{}", uid))
        }
    }
}

/// Discover the event socket of the running Hyprland instance
///
/// # Errors
///
/// Returns `EventError::SignatureNotSet` if `$HYPRLAND_INSTANCE_SIGNATURE`
/// is unset or empty.
/// Returns `EventError::SocketNotFound` if the resulting path doesn't exist.
///
/// # Example
///
/// ```ignore
/// let path = event_socket_path()?;
/// println!("Event socket at: {}", path.display());
/// ```
pub fn event_socket_path() -> Result<PathBuf, EventError> {
    let signature = std::env::var(INSTANCE_SIGNATURE_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(EventError::SignatureNotSet)?;

    let path = event_socket_path_in(&runtime_dir(), &signature);
    debug!(path = %path.display(), "Resolved event socket path");

    if !path.exists() {
        return Err(EventError::SocketNotFound { path });
    }

    Ok(path)
}
