//! Caller-supplied event callbacks

use tokio::sync::mpsc;
use tracing::debug;

use crate::types::*;

/// Callbacks for every event the compositor emits
///
/// Every method has an empty default body, so implementors only override the
/// events they care about. Events are delivered through [`handle`], whose
/// default routes each [`Event`] to its method; override `handle` instead to
/// receive the decoded enum directly.
///
/// Event documentation follows <https://wiki.hyprland.org/IPC/>.
///
/// [`handle`]: EventHandler::handle
#[allow(unused_variables)]
pub trait EventHandler {
    /// Emitted on workspace change, only when a user requests it (not on mouse movement)
    fn workspace(&mut self, name: WorkspaceName) {}
    /// Emitted on workspace change, with the workspace ID
    fn workspace_v2(&mut self, workspace: WorkspaceV2) {}
    /// Emitted when the active monitor changes
    fn focused_monitor(&mut self, monitor: FocusedMonitor) {}
    /// Emitted when the active monitor changes, with the workspace ID
    fn focused_monitor_v2(&mut self, monitor: FocusedMonitorV2) {}
    /// Emitted when the active window changes
    fn active_window(&mut self, window: ActiveWindow) {}
    /// Emitted when the active window changes, with the window address
    fn active_window_v2(&mut self, window: ActiveWindowV2) {}
    /// Emitted when the fullscreen state of a window changes
    fn fullscreen(&mut self, fullscreen: bool) {}
    /// Emitted when a monitor is disconnected
    fn monitor_removed(&mut self, name: MonitorName) {}
    /// Emitted when a monitor is disconnected, with ID and description
    fn monitor_removed_v2(&mut self, monitor: MonitorV2) {}
    /// Emitted when a monitor is connected
    fn monitor_added(&mut self, name: MonitorName) {}
    /// Emitted when a monitor is connected, with ID and description
    fn monitor_added_v2(&mut self, monitor: MonitorV2) {}
    /// Emitted when a workspace is created
    fn create_workspace(&mut self, name: WorkspaceName) {}
    /// Emitted when a workspace is created, with the workspace ID
    fn create_workspace_v2(&mut self, workspace: WorkspaceV2) {}
    /// Emitted when a workspace is destroyed
    fn destroy_workspace(&mut self, name: WorkspaceName) {}
    /// Emitted when a workspace is destroyed, with the workspace ID
    fn destroy_workspace_v2(&mut self, workspace: WorkspaceV2) {}
    /// Emitted when a workspace moves to a different monitor
    fn move_workspace(&mut self, workspace: MoveWorkspace) {}
    /// Emitted when a workspace moves to a different monitor, with the workspace ID
    fn move_workspace_v2(&mut self, workspace: MoveWorkspaceV2) {}
    /// Emitted when a workspace is renamed
    fn rename_workspace(&mut self, workspace: RenameWorkspace) {}
    /// Emitted when a special workspace opens or closes on a monitor
    fn active_special(&mut self, special: ActiveSpecial) {}
    /// Emitted when a special workspace opens or closes, with the workspace ID
    fn active_special_v2(&mut self, special: ActiveSpecialV2) {}
    /// Emitted on a layout change of the active keyboard
    fn active_layout(&mut self, layout: ActiveLayout) {}
    /// Emitted when a window is opened
    fn open_window(&mut self, window: OpenWindow) {}
    /// Emitted when a window is closed
    fn close_window(&mut self, window: WindowAddress) {}
    /// Emitted when a window is moved to a workspace
    fn move_window(&mut self, window: MoveWindow) {}
    /// Emitted when a window is moved to a workspace, with the workspace ID
    fn move_window_v2(&mut self, window: MoveWindowV2) {}
    /// Emitted when a layer surface is mapped
    fn open_layer(&mut self, namespace: String) {}
    /// Emitted when a layer surface is unmapped
    fn close_layer(&mut self, namespace: String) {}
    /// Emitted when the keybind submap changes
    fn submap(&mut self, name: String) {}
    /// Emitted when a window toggles between floating and tiled
    fn change_floating_mode(&mut self, window: ChangeFloatingMode) {}
    /// Emitted when a window requests urgent attention
    fn urgent(&mut self, window: WindowAddress) {}
    /// Emitted when the screencopy state of a client changes.
    /// There may be several clients sharing at once.
    fn screencast(&mut self, screencast: Screencast) {}
    /// Emitted when a window title changes
    fn window_title(&mut self, window: WindowAddress) {}
    /// Emitted when a window title changes, with the new title
    fn window_title_v2(&mut self, window: WindowTitleV2) {}
    /// Emitted when a group is toggled
    fn toggle_group(&mut self, group: ToggleGroup) {}
    /// Emitted when a window is moved into a group
    fn move_into_group(&mut self, window: WindowAddress) {}
    /// Emitted when a window is moved out of a group
    fn move_out_of_group(&mut self, window: WindowAddress) {}
    /// Emitted when ignoring the group lock is toggled
    fn ignore_group_lock(&mut self, enabled: bool) {}
    /// Emitted when group locking is toggled
    fn lock_groups(&mut self, locked: bool) {}
    /// Emitted when the compositor configuration is reloaded
    fn config_reloaded(&mut self) {}
    /// Emitted when a window is pinned or unpinned
    fn pin(&mut self, window: Pin) {}
    /// Emitted when a window is minimized or restored
    fn minimize(&mut self, window: Minimize) {}
    /// Emitted when a client requests the system bell
    fn bell(&mut self, window: WindowAddress) {}

    /// Deliver a decoded event to the matching method
    fn handle(&mut self, event: Event) {
        match event {
            Event::Workspace(e) => self.workspace(e),
            Event::WorkspaceV2(e) => self.workspace_v2(e),
            Event::FocusedMonitor(e) => self.focused_monitor(e),
            Event::FocusedMonitorV2(e) => self.focused_monitor_v2(e),
            Event::ActiveWindow(e) => self.active_window(e),
            Event::ActiveWindowV2(e) => self.active_window_v2(e),
            Event::Fullscreen(e) => self.fullscreen(e),
            Event::MonitorRemoved(e) => self.monitor_removed(e),
            Event::MonitorRemovedV2(e) => self.monitor_removed_v2(e),
            Event::MonitorAdded(e) => self.monitor_added(e),
            Event::MonitorAddedV2(e) => self.monitor_added_v2(e),
            Event::CreateWorkspace(e) => self.create_workspace(e),
            Event::CreateWorkspaceV2(e) => self.create_workspace_v2(e),
            Event::DestroyWorkspace(e) => self.destroy_workspace(e),
            Event::DestroyWorkspaceV2(e) => self.destroy_workspace_v2(e),
            Event::MoveWorkspace(e) => self.move_workspace(e),
            Event::MoveWorkspaceV2(e) => self.move_workspace_v2(e),
            Event::RenameWorkspace(e) => self.rename_workspace(e),
            Event::ActiveSpecial(e) => self.active_special(e),
            Event::ActiveSpecialV2(e) => self.active_special_v2(e),
            Event::ActiveLayout(e) => self.active_layout(e),
            Event::OpenWindow(e) => self.open_window(e),
            Event::CloseWindow(e) => self.close_window(e),
            Event::MoveWindow(e) => self.move_window(e),
            Event::MoveWindowV2(e) => self.move_window_v2(e),
            Event::OpenLayer(e) => self.open_layer(e),
            Event::CloseLayer(e) => self.close_layer(e),
            Event::Submap(e) => self.submap(e),
            Event::ChangeFloatingMode(e) => self.change_floating_mode(e),
            Event::Urgent(e) => self.urgent(e),
            Event::Screencast(e) => self.screencast(e),
            Event::WindowTitle(e) => self.window_title(e),
            Event::WindowTitleV2(e) => self.window_title_v2(e),
            Event::ToggleGroup(e) => self.toggle_group(e),
            Event::MoveIntoGroup(e) => self.move_into_group(e),
            Event::MoveOutOfGroup(e) => self.move_out_of_group(e),
            Event::IgnoreGroupLock(e) => self.ignore_group_lock(e),
            Event::LockGroups(e) => self.lock_groups(e),
            Event::ConfigReloaded => self.config_reloaded(),
            Event::Pin(e) => self.pin(e),
            Event::Minimize(e) => self.minimize(e),
            Event::Bell(e) => self.bell(e),
        }
    }
}

/// Handler that ignores every event
///
/// Useful as a field to delegate to, or to drain a socket without acting on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEventHandler;

impl EventHandler for DefaultEventHandler {}

/// Forward every event into a channel, for consumption from another task
///
/// A dropped receiver does not stop the subscription; events are discarded
/// until the subscription itself ends.
impl EventHandler for mpsc::UnboundedSender<Event> {
    fn handle(&mut self, event: Event) {
        if let Err(mpsc::error::SendError(event)) = self.send(event) {
            debug!(event = %event.event_type(), "Event receiver dropped, discarding event");
        }
    }
}
