//! hypr-events CLI
//!
//! Subscribes to the Hyprland event socket and prints each event.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use hypr_events::{Event, EventClient, EventHandler, EventType, MalformedPolicy};
use tokio_util::sync::CancellationToken;

#[derive(Parser, Debug)]
#[command(name = "hypr-events")]
#[command(about = "Print Hyprland compositor events as they happen")]
#[command(version)]
struct Cli {
    /// Path to the event socket (defaults to the running instance's .socket2.sock)
    #[arg(short, long)]
    socket: Option<String>,

    /// Events to subscribe to (default: all)
    #[arg(short, long = "event", value_name = "TAG", value_delimiter = ',')]
    events: Vec<EventType>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,

    /// Stop on a record with too few fields instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Stop after this many seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// List every supported event tag and exit
    #[arg(long)]
    list_events: bool,
}

/// Writes each event to stdout
struct Printer {
    json: bool,
}

impl EventHandler for Printer {
    fn handle(&mut self, event: Event) {
        let tag = event.event_type();

        if self.json {
            let line = serde_json::json!({ "event": tag, "data": event });
            println!("{}", line);
        } else {
            println!("{}>>{:?}", tag, event);
        }
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list_events {
        for event in EventType::ALL {
            println!("{}", event);
        }
        return Ok(());
    }

    let events: Vec<EventType> = if cli.events.is_empty() {
        EventType::ALL.to_vec()
    } else {
        cli.events
    };

    let client = match &cli.socket {
        Some(socket) => {
            // Expand tilde in socket path
            let path: PathBuf = shellexpand::tilde(socket).into_owned().into();
            EventClient::connect(&path).await?
        }
        None => EventClient::connect_default().await?,
    };

    let policy = if cli.strict {
        MalformedPolicy::Abort
    } else {
        MalformedPolicy::Skip
    };
    let mut client = client.with_malformed_policy(policy);

    let cancel = CancellationToken::new();
    spawn_cancel_triggers(&cancel, cli.timeout.map(Duration::from_secs));

    tracing::info!("Subscribed to {} event type(s)", events.len());

    let mut printer = Printer { json: cli.json };
    let err = client.subscribe(&cancel, &mut printer, &events).await;

    client.close().await?;

    if err.is_cancelled() {
        tracing::info!("Stopped");
        return Ok(());
    }

    Err(err.into())
}

/// Cancel on Ctrl-C, or when the optional timeout elapses
fn spawn_cancel_triggers(cancel: &CancellationToken, timeout: Option<Duration>) {
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupted");
            on_signal.cancel();
        }
    });

    if let Some(timeout) = timeout {
        let on_timeout = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            tracing::debug!("Timeout of {:?} elapsed", timeout);
            on_timeout.cancel();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let cli = Cli::try_parse_from(["hypr-events"]).unwrap();
        assert!(cli.socket.is_none());
        assert!(cli.events.is_empty());
        assert!(!cli.json);
        assert!(!cli.strict);
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn test_event_list_parsing() {
        let cli = Cli::try_parse_from([
            "hypr-events",
            "-e",
            "workspace,openwindow",
            "--event",
            "focusedmonv2",
        ])
        .unwrap();

        assert_eq!(
            cli.events,
            vec![
                EventType::Workspace,
                EventType::OpenWindow,
                EventType::FocusedMonitorV2
            ]
        );
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let result = Cli::try_parse_from(["hypr-events", "-e", "nosuchevent"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_line_shape() {
        let event = Event::Workspace("2".to_string());
        let line = serde_json::json!({ "event": event.event_type(), "data": event });
        assert_eq!(line.to_string(), r#"{"data":"2","event":"workspace"}"#);
    }
}
