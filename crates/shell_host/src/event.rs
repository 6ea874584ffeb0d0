use crate::wrappers::WorkspaceId;

/// Everything the host shell delivers into the panel. Events are dispatched
/// synchronously on the shell's single logical thread; each one runs to
/// completion before the next arrives.
#[derive(Debug, Clone)]
pub enum ShellEvent<W> {
    /// A window appeared on the given workspace.
    WindowAdded { workspace: WorkspaceId, window: W },
    /// A window left the given workspace.
    WindowRemoved { workspace: WorkspaceId, window: W },
    /// The number of workspaces changed.
    WorkspaceCountChanged,
    /// The active workspace changed.
    WorkspaceSwitched,
    /// Some window gained focus. The shell only reports that focus moved,
    /// not which window lost it, so this event carries no subject.
    FocusChanged,
    WindowMinimized(W),
    WindowMapped(W),
    TitleChanged(W),
    /// Pointer press on the window item representing this window.
    ItemPressed(W),
    /// Scroll gesture on the window list container.
    ListScrolled(ScrollDirection),
    SummaryItemAdded,
    SummaryItemRemoved,
    /// Click on the tray toggle button.
    TrayTogglePressed,
    MonitorsChanged,
    ThemeChanged,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}
