//! Event tags and typed payloads
//!
//! Every record on the event socket is `TAG>>payload`. `EventType` is the
//! closed set of tags this crate understands; the structs below are the
//! decoded payloads, with fields in the same order the compositor writes them.
//!
//! Reference: <https://wiki.hyprland.org/IPC/>

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::EventError;

/// Workspace name as reported by the compositor (numeric workspaces use their number)
pub type WorkspaceName = String;

/// Monitor (output) name, e.g. `DP-1`
pub type MonitorName = String;

/// One event kind of the wire protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "&'static str")]
pub enum EventType {
    Workspace,
    WorkspaceV2,
    FocusedMonitor,
    FocusedMonitorV2,
    ActiveWindow,
    ActiveWindowV2,
    Fullscreen,
    MonitorRemoved,
    MonitorRemovedV2,
    MonitorAdded,
    MonitorAddedV2,
    CreateWorkspace,
    CreateWorkspaceV2,
    DestroyWorkspace,
    DestroyWorkspaceV2,
    MoveWorkspace,
    MoveWorkspaceV2,
    RenameWorkspace,
    ActiveSpecial,
    ActiveSpecialV2,
    ActiveLayout,
    OpenWindow,
    CloseWindow,
    MoveWindow,
    MoveWindowV2,
    OpenLayer,
    CloseLayer,
    Submap,
    ChangeFloatingMode,
    Urgent,
    Screencast,
    WindowTitle,
    WindowTitleV2,
    ToggleGroup,
    MoveIntoGroup,
    MoveOutOfGroup,
    IgnoreGroupLock,
    LockGroups,
    ConfigReloaded,
    Pin,
    Minimize,
    Bell,
}

impl EventType {
    /// Every supported event type, for subscribing to everything at once.
    ///
    /// Prefer naming the events you need: the compositor adds new events over
    /// time and a catch-all subscription pays the decode cost for all of them.
    pub const ALL: [EventType; 42] = [
        Self::Workspace,
        Self::WorkspaceV2,
        Self::FocusedMonitor,
        Self::FocusedMonitorV2,
        Self::ActiveWindow,
        Self::ActiveWindowV2,
        Self::Fullscreen,
        Self::MonitorRemoved,
        Self::MonitorRemovedV2,
        Self::MonitorAdded,
        Self::MonitorAddedV2,
        Self::CreateWorkspace,
        Self::CreateWorkspaceV2,
        Self::DestroyWorkspace,
        Self::DestroyWorkspaceV2,
        Self::MoveWorkspace,
        Self::MoveWorkspaceV2,
        Self::RenameWorkspace,
        Self::ActiveSpecial,
        Self::ActiveSpecialV2,
        Self::ActiveLayout,
        Self::OpenWindow,
        Self::CloseWindow,
        Self::MoveWindow,
        Self::MoveWindowV2,
        Self::OpenLayer,
        Self::CloseLayer,
        Self::Submap,
        Self::ChangeFloatingMode,
        Self::Urgent,
        Self::Screencast,
        Self::WindowTitle,
        Self::WindowTitleV2,
        Self::ToggleGroup,
        Self::MoveIntoGroup,
        Self::MoveOutOfGroup,
        Self::IgnoreGroupLock,
        Self::LockGroups,
        Self::ConfigReloaded,
        Self::Pin,
        Self::Minimize,
        Self::Bell,
    ];

    /// The tag as it appears on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::WorkspaceV2 => "workspacev2",
            Self::FocusedMonitor => "focusedmon",
            Self::FocusedMonitorV2 => "focusedmonv2",
            Self::ActiveWindow => "activewindow",
            Self::ActiveWindowV2 => "activewindowv2",
            Self::Fullscreen => "fullscreen",
            Self::MonitorRemoved => "monitorremoved",
            Self::MonitorRemovedV2 => "monitorremovedv2",
            Self::MonitorAdded => "monitoradded",
            Self::MonitorAddedV2 => "monitoraddedv2",
            Self::CreateWorkspace => "createworkspace",
            Self::CreateWorkspaceV2 => "createworkspacev2",
            Self::DestroyWorkspace => "destroyworkspace",
            Self::DestroyWorkspaceV2 => "destroyworkspacev2",
            Self::MoveWorkspace => "moveworkspace",
            Self::MoveWorkspaceV2 => "moveworkspacev2",
            Self::RenameWorkspace => "renameworkspace",
            Self::ActiveSpecial => "activespecial",
            Self::ActiveSpecialV2 => "activespecialv2",
            Self::ActiveLayout => "activelayout",
            Self::OpenWindow => "openwindow",
            Self::CloseWindow => "closewindow",
            Self::MoveWindow => "movewindow",
            Self::MoveWindowV2 => "movewindowv2",
            Self::OpenLayer => "openlayer",
            Self::CloseLayer => "closelayer",
            Self::Submap => "submap",
            Self::ChangeFloatingMode => "changefloatingmode",
            Self::Urgent => "urgent",
            Self::Screencast => "screencast",
            Self::WindowTitle => "windowtitle",
            Self::WindowTitleV2 => "windowtitlev2",
            Self::ToggleGroup => "togglegroup",
            Self::MoveIntoGroup => "moveintogroup",
            Self::MoveOutOfGroup => "moveoutofgroup",
            Self::IgnoreGroupLock => "ignoregrouplock",
            Self::LockGroups => "lockgroups",
            Self::ConfigReloaded => "configreloaded",
            Self::Pin => "pin",
            Self::Minimize => "minimize",
            Self::Bell => "bell",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EventType> for &'static str {
    fn from(event: EventType) -> Self {
        event.as_str()
    }
}

impl FromStr for EventType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| EventError::UnknownEvent(s.to_string()))
    }
}

// =============================================================================
// Payload shapes
// =============================================================================

/// `focusedmon>>MONNAME,WORKSPACENAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusedMonitor {
    pub monitor_name: MonitorName,
    pub workspace_name: WorkspaceName,
}

/// `focusedmonv2>>MONNAME,WORKSPACEID`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusedMonitorV2 {
    pub monitor_name: MonitorName,
    pub workspace_id: String,
}

/// `activewindow>>WINDOWCLASS,WINDOWTITLE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveWindow {
    pub class: String,
    /// May contain commas
    pub title: String,
}

/// `activewindowv2>>WINDOWADDRESS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveWindowV2 {
    pub address: String,
}

/// `workspacev2`, `createworkspacev2` and `destroyworkspacev2`: `ID,NAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceV2 {
    pub id: String,
    pub name: WorkspaceName,
}

/// `monitoraddedv2` and `monitorremovedv2`: `ID,NAME,DESCRIPTION`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorV2 {
    pub id: String,
    pub name: MonitorName,
    /// Vendor description, may contain commas
    pub description: String,
}

/// `moveworkspace>>WORKSPACENAME,MONNAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveWorkspace {
    pub workspace_name: WorkspaceName,
    pub monitor_name: MonitorName,
}

/// `moveworkspacev2>>ID,NAME,MONNAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveWorkspaceV2 {
    pub id: String,
    pub name: WorkspaceName,
    pub monitor_name: MonitorName,
}

/// `renameworkspace>>ID,NEWNAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameWorkspace {
    pub id: String,
    pub new_name: WorkspaceName,
}

/// `activespecial>>NAME,MONNAME`
///
/// The name is empty when the special workspace on that monitor closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSpecial {
    pub name: WorkspaceName,
    pub monitor_name: MonitorName,
}

/// `activespecialv2>>ID,NAME,MONNAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSpecialV2 {
    pub id: String,
    pub name: WorkspaceName,
    pub monitor_name: MonitorName,
}

/// `activelayout>>KEYBOARDNAME,LAYOUTNAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveLayout {
    pub keyboard: String,
    pub layout: String,
}

/// `openwindow>>WINDOWADDRESS,WORKSPACENAME,WINDOWCLASS,WINDOWTITLE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenWindow {
    pub address: String,
    pub workspace_name: WorkspaceName,
    pub class: String,
    /// May contain commas
    pub title: String,
}

/// `movewindow>>WINDOWADDRESS,WORKSPACENAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveWindow {
    pub address: String,
    pub workspace_name: WorkspaceName,
}

/// `movewindowv2>>WINDOWADDRESS,WORKSPACEID,WORKSPACENAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveWindowV2 {
    pub address: String,
    pub workspace_id: String,
    pub workspace_name: WorkspaceName,
}

/// `screencast>>STATE,OWNER`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screencast {
    /// True while a screen or window is being shared
    pub sharing: bool,
    /// "0" when a monitor is shared, "1" when a window is shared
    pub owner: String,
}

/// `togglegroup>>0/1,WINDOWADDRESS(ES)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleGroup {
    /// False when the group was destroyed
    pub toggle: bool,
    /// Member addresses, comma-separated as sent
    pub addresses: String,
}

/// `changefloatingmode>>WINDOWADDRESS,FLOATING`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeFloatingMode {
    pub address: String,
    pub floating: bool,
}

/// `windowtitlev2>>WINDOWADDRESS,WINDOWTITLE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowTitleV2 {
    pub address: String,
    /// May contain commas
    pub title: String,
}

/// `pin>>WINDOWADDRESS,PINSTATE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pin {
    pub address: String,
    pub pinned: bool,
}

/// `minimize>>WINDOWADDRESS,0/1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Minimize {
    pub address: String,
    pub minimized: bool,
}

/// A window address, for the single-field window events
/// (`closewindow`, `urgent`, `windowtitle`, `moveintogroup`, `moveoutofgroup`, `bell`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowAddress {
    pub address: String,
}

/// A decoded event, one variant per [`EventType`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Event {
    Workspace(WorkspaceName),
    WorkspaceV2(WorkspaceV2),
    FocusedMonitor(FocusedMonitor),
    FocusedMonitorV2(FocusedMonitorV2),
    ActiveWindow(ActiveWindow),
    ActiveWindowV2(ActiveWindowV2),
    Fullscreen(bool),
    MonitorRemoved(MonitorName),
    MonitorRemovedV2(MonitorV2),
    MonitorAdded(MonitorName),
    MonitorAddedV2(MonitorV2),
    CreateWorkspace(WorkspaceName),
    CreateWorkspaceV2(WorkspaceV2),
    DestroyWorkspace(WorkspaceName),
    DestroyWorkspaceV2(WorkspaceV2),
    MoveWorkspace(MoveWorkspace),
    MoveWorkspaceV2(MoveWorkspaceV2),
    RenameWorkspace(RenameWorkspace),
    ActiveSpecial(ActiveSpecial),
    ActiveSpecialV2(ActiveSpecialV2),
    ActiveLayout(ActiveLayout),
    OpenWindow(OpenWindow),
    CloseWindow(WindowAddress),
    MoveWindow(MoveWindow),
    MoveWindowV2(MoveWindowV2),
    /// Layer surface namespace, e.g. `wofi`
    OpenLayer(String),
    CloseLayer(String),
    /// Empty name means the default submap
    Submap(String),
    ChangeFloatingMode(ChangeFloatingMode),
    Urgent(WindowAddress),
    Screencast(Screencast),
    WindowTitle(WindowAddress),
    WindowTitleV2(WindowTitleV2),
    ToggleGroup(ToggleGroup),
    MoveIntoGroup(WindowAddress),
    MoveOutOfGroup(WindowAddress),
    IgnoreGroupLock(bool),
    LockGroups(bool),
    ConfigReloaded,
    Pin(Pin),
    Minimize(Minimize),
    Bell(WindowAddress),
}

impl Event {
    /// The tag this event was decoded from
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Workspace(_) => EventType::Workspace,
            Self::WorkspaceV2(_) => EventType::WorkspaceV2,
            Self::FocusedMonitor(_) => EventType::FocusedMonitor,
            Self::FocusedMonitorV2(_) => EventType::FocusedMonitorV2,
            Self::ActiveWindow(_) => EventType::ActiveWindow,
            Self::ActiveWindowV2(_) => EventType::ActiveWindowV2,
            Self::Fullscreen(_) => EventType::Fullscreen,
            Self::MonitorRemoved(_) => EventType::MonitorRemoved,
            Self::MonitorRemovedV2(_) => EventType::MonitorRemovedV2,
            Self::MonitorAdded(_) => EventType::MonitorAdded,
            Self::MonitorAddedV2(_) => EventType::MonitorAddedV2,
            Self::CreateWorkspace(_) => EventType::CreateWorkspace,
            Self::CreateWorkspaceV2(_) => EventType::CreateWorkspaceV2,
            Self::DestroyWorkspace(_) => EventType::DestroyWorkspace,
            Self::DestroyWorkspaceV2(_) => EventType::DestroyWorkspaceV2,
            Self::MoveWorkspace(_) => EventType::MoveWorkspace,
            Self::MoveWorkspaceV2(_) => EventType::MoveWorkspaceV2,
            Self::RenameWorkspace(_) => EventType::RenameWorkspace,
            Self::ActiveSpecial(_) => EventType::ActiveSpecial,
            Self::ActiveSpecialV2(_) => EventType::ActiveSpecialV2,
            Self::ActiveLayout(_) => EventType::ActiveLayout,
            Self::OpenWindow(_) => EventType::OpenWindow,
            Self::CloseWindow(_) => EventType::CloseWindow,
            Self::MoveWindow(_) => EventType::MoveWindow,
            Self::MoveWindowV2(_) => EventType::MoveWindowV2,
            Self::OpenLayer(_) => EventType::OpenLayer,
            Self::CloseLayer(_) => EventType::CloseLayer,
            Self::Submap(_) => EventType::Submap,
            Self::ChangeFloatingMode(_) => EventType::ChangeFloatingMode,
            Self::Urgent(_) => EventType::Urgent,
            Self::Screencast(_) => EventType::Screencast,
            Self::WindowTitle(_) => EventType::WindowTitle,
            Self::WindowTitleV2(_) => EventType::WindowTitleV2,
            Self::ToggleGroup(_) => EventType::ToggleGroup,
            Self::MoveIntoGroup(_) => EventType::MoveIntoGroup,
            Self::MoveOutOfGroup(_) => EventType::MoveOutOfGroup,
            Self::IgnoreGroupLock(_) => EventType::IgnoreGroupLock,
            Self::LockGroups(_) => EventType::LockGroups,
            Self::ConfigReloaded => EventType::ConfigReloaded,
            Self::Pin(_) => EventType::Pin,
            Self::Minimize(_) => EventType::Minimize,
            Self::Bell(_) => EventType::Bell,
        }
    }
}
