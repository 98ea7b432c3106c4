//! Table-driven decoding of raw records into typed events
//!
//! Each [`EventType`] has one [`Decoder`] entry: how many comma-separated
//! fields its payload carries and how to build the [`Event`] from them.
//! Shapes whose last field is free text (window titles, monitor
//! descriptions, workspace names) split into at most `arity` tokens so that
//! field keeps its commas. All other shapes read the first `arity` tokens
//! and ignore the rest.
//!
//! The token count is checked before construction: a record that is too
//! short for its shape is reported as `EventError::MalformedPayload`, never
//! decoded into an event with missing fields.

use tracing::debug;

use crate::error::EventError;
use crate::frame::RawRecord;
use crate::handler::EventHandler;
use crate::types::*;

/// How to decode one event type
pub struct Decoder {
    pub event: EventType,
    /// Number of payload fields the shape reads
    pub arity: usize,
    /// Whether the last field is free text that keeps any further commas;
    /// otherwise tokens past `arity` are ignored
    pub rest: bool,
    /// Builds the event; always called with exactly `arity` fields
    build: fn(&[&str]) -> Event,
}

fn flag(token: &str) -> bool {
    token == "1"
}

fn address(token: &str) -> WindowAddress {
    WindowAddress {
        address: token.to_string(),
    }
}

fn workspace_v2(f: &[&str]) -> WorkspaceV2 {
    WorkspaceV2 {
        id: f[0].to_string(),
        name: f[1].to_string(),
    }
}

fn monitor_v2(f: &[&str]) -> MonitorV2 {
    MonitorV2 {
        id: f[0].to_string(),
        name: f[1].to_string(),
        description: f[2].to_string(),
    }
}

static DECODERS: &[Decoder] = &[
    Decoder {
        event: EventType::Workspace,
        arity: 1,
        rest: true,
        build: |f| Event::Workspace(f[0].to_string()),
    },
    Decoder {
        event: EventType::WorkspaceV2,
        arity: 2,
        rest: true,
        build: |f| Event::WorkspaceV2(workspace_v2(f)),
    },
    Decoder {
        event: EventType::FocusedMonitor,
        arity: 2,
        rest: true,
        build: |f| {
            Event::FocusedMonitor(FocusedMonitor {
                monitor_name: f[0].to_string(),
                workspace_name: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::FocusedMonitorV2,
        arity: 2,
        rest: false,
        build: |f| {
            Event::FocusedMonitorV2(FocusedMonitorV2 {
                monitor_name: f[0].to_string(),
                workspace_id: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::ActiveWindow,
        arity: 2,
        rest: true,
        build: |f| {
            Event::ActiveWindow(ActiveWindow {
                class: f[0].to_string(),
                title: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::ActiveWindowV2,
        arity: 1,
        rest: false,
        build: |f| {
            Event::ActiveWindowV2(ActiveWindowV2 {
                address: f[0].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::Fullscreen,
        arity: 1,
        rest: false,
        build: |f| Event::Fullscreen(flag(f[0])),
    },
    Decoder {
        event: EventType::MonitorRemoved,
        arity: 1,
        rest: true,
        build: |f| Event::MonitorRemoved(f[0].to_string()),
    },
    Decoder {
        event: EventType::MonitorRemovedV2,
        arity: 3,
        rest: true,
        build: |f| Event::MonitorRemovedV2(monitor_v2(f)),
    },
    Decoder {
        event: EventType::MonitorAdded,
        arity: 1,
        rest: true,
        build: |f| Event::MonitorAdded(f[0].to_string()),
    },
    Decoder {
        event: EventType::MonitorAddedV2,
        arity: 3,
        rest: true,
        build: |f| Event::MonitorAddedV2(monitor_v2(f)),
    },
    Decoder {
        event: EventType::CreateWorkspace,
        arity: 1,
        rest: true,
        build: |f| Event::CreateWorkspace(f[0].to_string()),
    },
    Decoder {
        event: EventType::CreateWorkspaceV2,
        arity: 2,
        rest: true,
        build: |f| Event::CreateWorkspaceV2(workspace_v2(f)),
    },
    Decoder {
        event: EventType::DestroyWorkspace,
        arity: 1,
        rest: true,
        build: |f| Event::DestroyWorkspace(f[0].to_string()),
    },
    Decoder {
        event: EventType::DestroyWorkspaceV2,
        arity: 2,
        rest: true,
        build: |f| Event::DestroyWorkspaceV2(workspace_v2(f)),
    },
    Decoder {
        event: EventType::MoveWorkspace,
        arity: 2,
        rest: false,
        build: |f| {
            Event::MoveWorkspace(MoveWorkspace {
                workspace_name: f[0].to_string(),
                monitor_name: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::MoveWorkspaceV2,
        arity: 3,
        rest: false,
        build: |f| {
            Event::MoveWorkspaceV2(MoveWorkspaceV2 {
                id: f[0].to_string(),
                name: f[1].to_string(),
                monitor_name: f[2].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::RenameWorkspace,
        arity: 2,
        rest: true,
        build: |f| {
            Event::RenameWorkspace(RenameWorkspace {
                id: f[0].to_string(),
                new_name: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::ActiveSpecial,
        arity: 2,
        rest: false,
        build: |f| {
            Event::ActiveSpecial(ActiveSpecial {
                name: f[0].to_string(),
                monitor_name: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::ActiveSpecialV2,
        arity: 3,
        rest: false,
        build: |f| {
            Event::ActiveSpecialV2(ActiveSpecialV2 {
                id: f[0].to_string(),
                name: f[1].to_string(),
                monitor_name: f[2].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::ActiveLayout,
        arity: 2,
        rest: true,
        build: |f| {
            Event::ActiveLayout(ActiveLayout {
                keyboard: f[0].to_string(),
                layout: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::OpenWindow,
        arity: 4,
        rest: true,
        build: |f| {
            Event::OpenWindow(OpenWindow {
                address: f[0].to_string(),
                workspace_name: f[1].to_string(),
                class: f[2].to_string(),
                title: f[3].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::CloseWindow,
        arity: 1,
        rest: false,
        build: |f| Event::CloseWindow(address(f[0])),
    },
    Decoder {
        event: EventType::MoveWindow,
        arity: 2,
        rest: true,
        build: |f| {
            Event::MoveWindow(MoveWindow {
                address: f[0].to_string(),
                workspace_name: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::MoveWindowV2,
        arity: 3,
        rest: true,
        build: |f| {
            Event::MoveWindowV2(MoveWindowV2 {
                address: f[0].to_string(),
                workspace_id: f[1].to_string(),
                workspace_name: f[2].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::OpenLayer,
        arity: 1,
        rest: true,
        build: |f| Event::OpenLayer(f[0].to_string()),
    },
    Decoder {
        event: EventType::CloseLayer,
        arity: 1,
        rest: true,
        build: |f| Event::CloseLayer(f[0].to_string()),
    },
    Decoder {
        event: EventType::Submap,
        arity: 1,
        rest: true,
        build: |f| Event::Submap(f[0].to_string()),
    },
    Decoder {
        event: EventType::ChangeFloatingMode,
        arity: 2,
        rest: false,
        build: |f| {
            Event::ChangeFloatingMode(ChangeFloatingMode {
                address: f[0].to_string(),
                floating: flag(f[1]),
            })
        },
    },
    Decoder {
        event: EventType::Urgent,
        arity: 1,
        rest: false,
        build: |f| Event::Urgent(address(f[0])),
    },
    Decoder {
        event: EventType::Screencast,
        arity: 2,
        rest: false,
        build: |f| {
            Event::Screencast(Screencast {
                sharing: flag(f[0]),
                owner: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::WindowTitle,
        arity: 1,
        rest: false,
        build: |f| Event::WindowTitle(address(f[0])),
    },
    Decoder {
        event: EventType::WindowTitleV2,
        arity: 2,
        rest: true,
        build: |f| {
            Event::WindowTitleV2(WindowTitleV2 {
                address: f[0].to_string(),
                title: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::ToggleGroup,
        arity: 2,
        rest: true,
        build: |f| {
            Event::ToggleGroup(ToggleGroup {
                toggle: flag(f[0]),
                addresses: f[1].to_string(),
            })
        },
    },
    Decoder {
        event: EventType::MoveIntoGroup,
        arity: 1,
        rest: false,
        build: |f| Event::MoveIntoGroup(address(f[0])),
    },
    Decoder {
        event: EventType::MoveOutOfGroup,
        arity: 1,
        rest: false,
        build: |f| Event::MoveOutOfGroup(address(f[0])),
    },
    Decoder {
        event: EventType::IgnoreGroupLock,
        arity: 1,
        rest: false,
        build: |f| Event::IgnoreGroupLock(flag(f[0])),
    },
    Decoder {
        event: EventType::LockGroups,
        arity: 1,
        rest: false,
        build: |f| Event::LockGroups(flag(f[0])),
    },
    Decoder {
        event: EventType::ConfigReloaded,
        arity: 0,
        rest: false,
        build: |_| Event::ConfigReloaded,
    },
    Decoder {
        event: EventType::Pin,
        arity: 2,
        rest: false,
        build: |f| {
            Event::Pin(Pin {
                address: f[0].to_string(),
                pinned: flag(f[1]),
            })
        },
    },
    Decoder {
        event: EventType::Minimize,
        arity: 2,
        rest: false,
        build: |f| {
            Event::Minimize(Minimize {
                address: f[0].to_string(),
                minimized: flag(f[1]),
            })
        },
    },
    Decoder {
        event: EventType::Bell,
        arity: 1,
        rest: false,
        build: |f| Event::Bell(address(f[0])),
    },
];

/// Look up the decoder for an event type
pub fn decoder(event: EventType) -> Option<&'static Decoder> {
    DECODERS.iter().find(|decoder| decoder.event == event)
}

impl Decoder {
    /// Split `payload` into this shape's fields and build the event
    ///
    /// # Errors
    ///
    /// Returns `EventError::MalformedPayload` when the payload has fewer
    /// comma-separated fields than the shape reads.
    pub fn decode(&self, payload: &str) -> Result<Event, EventError> {
        if self.arity == 0 {
            return Ok((self.build)(&[]));
        }

        let fields: Vec<&str> = if self.rest {
            payload.splitn(self.arity, ',').collect()
        } else {
            payload.split(',').take(self.arity).collect()
        };
        if fields.len() < self.arity {
            return Err(EventError::MalformedPayload {
                event: self.event,
                expected: self.arity,
                found: fields.len(),
                payload: payload.to_string(),
            });
        }

        Ok((self.build)(&fields))
    }
}

/// Decode a payload as the given event type
///
/// # Errors
///
/// Returns `EventError::MalformedPayload` if the payload is too short, or
/// `EventError::UnknownEvent` if the type has no decoder.
pub fn decode(event: EventType, payload: &str) -> Result<Event, EventError> {
    decoder(event)
        .ok_or_else(|| EventError::UnknownEvent(event.to_string()))?
        .decode(payload)
}

/// Decode `record` and hand it to `handler` if its tag is subscribed
///
/// Returns the event type that was delivered, or `None` when the tag is not
/// in `subscribed`. A tag listed more than once is still delivered once.
///
/// # Errors
///
/// Returns `EventError::MalformedPayload` when a subscribed record is too
/// short for its shape; the handler is not called.
pub fn dispatch<H>(
    record: &RawRecord,
    handler: &mut H,
    subscribed: &[EventType],
) -> Result<Option<EventType>, EventError>
where
    H: EventHandler + ?Sized,
{
    let Some(event_type) = subscribed
        .iter()
        .copied()
        .find(|event| event.as_str() == record.tag)
    else {
        return Ok(None);
    };

    let event = decode(event_type, &record.payload)?;
    debug!(event = %event_type, "Dispatching event");
    handler.handle(event);

    Ok(Some(event_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tag: &str, payload: &str) -> RawRecord {
        RawRecord {
            tag: tag.to_string(),
            payload: payload.to_string(),
        }
    }

    #[derive(Default)]
    struct Collect(Vec<Event>);

    impl EventHandler for Collect {
        fn handle(&mut self, event: Event) {
            self.0.push(event);
        }
    }

    #[test]
    fn test_every_event_type_has_one_decoder() {
        for event in EventType::ALL {
            let count = DECODERS.iter().filter(|d| d.event == event).count();
            assert_eq!(count, 1, "{} has {} decoders", event, count);
        }
        assert_eq!(DECODERS.len(), EventType::ALL.len());
    }

    #[test]
    fn test_decoders_build_their_own_event_type() {
        for decoder in DECODERS {
            let payload = vec!["1"; decoder.arity.max(1)].join(",");
            let event = decoder.decode(&payload).unwrap();
            assert_eq!(event.event_type(), decoder.event);
        }
    }

    #[test]
    fn test_single_field_shape() {
        let event = decode(EventType::OpenLayer, "wofi").unwrap();
        assert_eq!(event, Event::OpenLayer("wofi".to_string()));
    }

    #[test]
    fn test_open_window_fields() {
        let event = decode(EventType::OpenWindow, "80864f60,1,Alacritty,Alacritty").unwrap();
        assert_eq!(
            event,
            Event::OpenWindow(OpenWindow {
                address: "80864f60".to_string(),
                workspace_name: "1".to_string(),
                class: "Alacritty".to_string(),
                title: "Alacritty".to_string(),
            })
        );
    }

    #[test]
    fn test_trailing_title_keeps_commas() {
        let event =
            decode(EventType::OpenWindow, "80864f60,1,firefox,Inbox, 3 unread - Mail").unwrap();
        let Event::OpenWindow(window) = event else {
            panic!("Expected OpenWindow, got: {:?}", event);
        };
        assert_eq!(window.class, "firefox");
        assert_eq!(window.title, "Inbox, 3 unread - Mail");
    }

    #[test]
    fn test_monitor_description_keeps_commas() {
        let event =
            decode(EventType::MonitorAddedV2, "1,DP-1,Dell Inc. DELL U2720Q, 0x1234").unwrap();
        assert_eq!(
            event,
            Event::MonitorAddedV2(MonitorV2 {
                id: "1".to_string(),
                name: "DP-1".to_string(),
                description: "Dell Inc. DELL U2720Q, 0x1234".to_string(),
            })
        );
    }

    #[test]
    fn test_boolean_fields() {
        assert_eq!(decode(EventType::Fullscreen, "1").unwrap(), Event::Fullscreen(true));
        assert_eq!(decode(EventType::Fullscreen, "0").unwrap(), Event::Fullscreen(false));
        assert_eq!(decode(EventType::Fullscreen, "true").unwrap(), Event::Fullscreen(false));
        assert_eq!(decode(EventType::LockGroups, "1").unwrap(), Event::LockGroups(true));

        let Event::Minimize(minimize) = decode(EventType::Minimize, "80864f60,1").unwrap() else {
            panic!("Expected Minimize");
        };
        assert!(minimize.minimized);
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let Event::Pin(pin) = decode(EventType::Pin, "80864f60,1,extra").unwrap() else {
            panic!("Expected Pin");
        };
        assert_eq!(pin.address, "80864f60");
        assert!(pin.pinned);

        assert_eq!(decode(EventType::Fullscreen, "1,2").unwrap(), Event::Fullscreen(true));
        assert_eq!(
            decode(EventType::CloseWindow, "80864f60,extra").unwrap(),
            Event::CloseWindow(WindowAddress {
                address: "80864f60".to_string()
            })
        );
        assert_eq!(
            decode(EventType::FocusedMonitorV2, "DP-1,3,extra").unwrap(),
            Event::FocusedMonitorV2(FocusedMonitorV2 {
                monitor_name: "DP-1".to_string(),
                workspace_id: "3".to_string(),
            })
        );
    }

    #[test]
    fn test_free_text_shapes_keep_commas() {
        for decoder in DECODERS.iter().filter(|d| d.rest) {
            assert!(decoder.arity > 0, "{} has no field to keep commas in", decoder.event);
        }
        assert_eq!(
            decode(EventType::ToggleGroup, "1,80864f60,80864f61").unwrap(),
            Event::ToggleGroup(ToggleGroup {
                toggle: true,
                addresses: "80864f60,80864f61".to_string(),
            })
        );
        assert_eq!(
            decode(EventType::Workspace, "notes, misc").unwrap(),
            Event::Workspace("notes, misc".to_string())
        );
    }

    #[test]
    fn test_active_window_v2_is_not_active_window() {
        let event = decode(EventType::ActiveWindowV2, "80864f60").unwrap();
        assert_eq!(
            event,
            Event::ActiveWindowV2(ActiveWindowV2 {
                address: "80864f60".to_string()
            })
        );
    }

    #[test]
    fn test_short_payload_is_malformed() {
        let err = decode(EventType::OpenWindow, "80864f60,1").unwrap_err();
        match err {
            EventError::MalformedPayload {
                event,
                expected,
                found,
                payload,
            } => {
                assert_eq!(event, EventType::OpenWindow);
                assert_eq!(expected, 4);
                assert_eq!(found, 2);
                assert_eq!(payload, "80864f60,1");
            }
            other => panic!("Expected MalformedPayload, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_fields_are_not_missing_fields() {
        // activespecial sends an empty name when the special workspace closes
        let event = decode(EventType::ActiveSpecial, ",DP-1").unwrap();
        assert_eq!(
            event,
            Event::ActiveSpecial(ActiveSpecial {
                name: String::new(),
                monitor_name: "DP-1".to_string(),
            })
        );
    }

    #[test]
    fn test_dispatch_delivers_subscribed_event() {
        let mut handler = Collect::default();
        let delivered = dispatch(
            &record("workspace", "2"),
            &mut handler,
            &[EventType::OpenWindow, EventType::Workspace],
        )
        .unwrap();

        assert_eq!(delivered, Some(EventType::Workspace));
        assert_eq!(handler.0, vec![Event::Workspace("2".to_string())]);
    }

    #[test]
    fn test_dispatch_skips_unsubscribed_event() {
        let mut handler = Collect::default();
        let delivered =
            dispatch(&record("workspace", "2"), &mut handler, &[EventType::WorkspaceV2]).unwrap();

        assert_eq!(delivered, None);
        assert!(handler.0.is_empty());
    }

    #[test]
    fn test_dispatch_ignores_unknown_tags() {
        let mut handler = Collect::default();
        let delivered =
            dispatch(&record("someplugin", "a,b"), &mut handler, &EventType::ALL).unwrap();

        assert_eq!(delivered, None);
        assert!(handler.0.is_empty());
    }

    #[test]
    fn test_dispatch_duplicate_subscription_delivers_once() {
        let mut handler = Collect::default();
        dispatch(
            &record("bell", "80864f60"),
            &mut handler,
            &[EventType::Bell, EventType::Bell],
        )
        .unwrap();

        assert_eq!(handler.0.len(), 1);
    }

    #[test]
    fn test_dispatch_malformed_does_not_call_handler() {
        let mut handler = Collect::default();
        let err = dispatch(&record("movewindowv2", "80864f60"), &mut handler, &EventType::ALL)
            .unwrap_err();

        assert!(matches!(err, EventError::MalformedPayload { .. }), "Got: {:?}", err);
        assert!(handler.0.is_empty());
    }

    #[test]
    fn test_dispatch_unsubscribed_malformed_is_not_an_error() {
        let mut handler = Collect::default();
        let delivered =
            dispatch(&record("movewindowv2", "80864f60"), &mut handler, &[EventType::Bell])
                .unwrap();
        assert_eq!(delivered, None);
    }
}
