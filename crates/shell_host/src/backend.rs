use crate::{
    geometry::Rect,
    tray::TrayAnimationStrategy,
    wrappers::{SignalHandle, Timestamp, WindowId, WorkspaceId},
};

/// Reference to a window owned by the shell. Handles are cheap refcounted
/// clones in the shell's object style; the panel never owns a window's
/// lifetime through one.
pub trait WindowHandle: Clone {
    fn id(&self) -> WindowId;
    fn title(&self) -> String;
    fn has_focus(&self) -> bool;
    /// Whether the window is currently shown on its workspace, as opposed to
    /// minimized or otherwise hidden.
    fn showing_on_its_workspace(&self) -> bool;
    /// Stable key assigned at window creation, used to keep list order
    /// deterministic. Monotonic across the shell's lifetime.
    fn stable_sequence(&self) -> u64;
    /// Ask the shell to raise and focus this window. Fire-and-forget; the
    /// shell drops requests whose timestamp predates a newer one.
    fn activate(&self, time: Timestamp);
    /// Ask the shell to minimize this window. Fire-and-forget.
    fn minimize(&self, time: Timestamp);
}

/// The full set of capabilities the panel needs from its host shell.
///
/// `connect_*` calls declare interest; the shell then delivers the matching
/// [`crate::ShellEvent`]s until the returned handle is passed to
/// [`disconnect`](Self::disconnect). Disconnecting an unknown handle is a
/// no-op, so teardown paths don't have to care whether a subscription was
/// ever established.
pub trait ShellBackend {
    type Window: WindowHandle;
    /// Opaque rendered application icon.
    type Icon;

    /// Whether the window is a normal user window, as opposed to desktop,
    /// dock or other shell chrome.
    fn is_interesting(&self, window: &Self::Window) -> bool;
    /// Resolve the window's owning application and render its icon at the
    /// given size. `None` when no owning application can be determined.
    fn app_icon(&self, window: &Self::Window, size: i32) -> Option<Self::Icon>;

    fn workspace_count(&self) -> usize;
    fn active_workspace(&self) -> WorkspaceId;
    /// The windows currently on the given workspace, in no particular order.
    fn workspace_windows(&self, workspace: WorkspaceId) -> Vec<Self::Window>;

    fn connect_window_added(&mut self, workspace: WorkspaceId) -> SignalHandle;
    fn connect_window_removed(&mut self, workspace: WorkspaceId) -> SignalHandle;
    fn connect_title_changed(&mut self, window: &Self::Window) -> SignalHandle;
    fn connect_summary_added(&mut self) -> SignalHandle;
    fn connect_summary_removed(&mut self) -> SignalHandle;
    fn disconnect(&mut self, handle: SignalHandle);

    /// Number of children in the notification summary.
    fn summary_count(&self) -> usize;
    /// Toggle the notification tray's shown/hidden state.
    fn toggle_tray(&mut self);

    fn primary_display(&self) -> Rect;
    /// Themed height of the rendered panel content.
    fn panel_height(&self) -> i32;
    /// Add the panel to the shell's chrome, reserving struts for it.
    fn attach_panel(&mut self, geometry: Rect);
    fn detach_panel(&mut self);
    fn move_panel(&mut self, geometry: Rect);

    /// Swap the tray animation strategy, returning the previously installed
    /// one. `None` restores the shell's built-in behavior.
    fn replace_tray_animation(
        &mut self,
        strategy: Option<Box<dyn TrayAnimationStrategy>>,
    ) -> Option<Box<dyn TrayAnimationStrategy>>;

    /// Monotonic event-time token, taken at the time of the user interaction
    /// being handled.
    fn current_time(&self) -> Timestamp;
}
