use itertools::Itertools;
use shell_host::{ScrollDirection, ShellBackend, SignalHandle, WindowHandle, WindowId, WorkspaceId};

use crate::window_item::{WindowItem, ICON_SIZE};

/// Ordered, deduplicated list of [`WindowItem`]s, kept in sync with the
/// interesting windows on the active workspace.
///
/// Invariants:
/// - the items are exactly the interesting windows with a resolvable owning
///   application on the active workspace, one item per window identity.
/// - after a full rebuild the order is ascending stable sequence, i.e.
///   window-creation order, never activation order.
///
/// All mutation happens synchronously inside the shell's event dispatch, so
/// the sequence is only ever touched on the turn of the triggering event.
pub struct WindowListModel<S: ShellBackend> {
    items: Vec<WindowItem<S>>,
    workspace_signals: Vec<SignalHandle>,
}

impl<S: ShellBackend> WindowListModel<S> {
    pub fn new(shell: &mut S) -> Self {
        let mut model = Self { items: Vec::new(), workspace_signals: Vec::new() };
        model.change_workspaces(shell);
        model.reload_items(shell);
        model
    }

    /// Re-establish the window-added/window-removed subscriptions on every
    /// workspace. Must run whenever the workspace count changes, so we never
    /// keep listening on a stale or missing workspace.
    fn change_workspaces(&mut self, shell: &mut S) {
        for signal in self.workspace_signals.drain(..) {
            shell.disconnect(signal);
        }
        for index in 0..shell.workspace_count() {
            let workspace = WorkspaceId(index);
            self.workspace_signals.push(shell.connect_window_added(workspace));
            self.workspace_signals.push(shell.connect_window_removed(workspace));
        }
    }

    /// Throw the whole sequence away and rebuild it from the active
    /// workspace's live window list, in window-creation order. Add/remove
    /// events arrive unordered relative to creation, so this is the only
    /// place the displayed order is guaranteed.
    fn reload_items(&mut self, shell: &mut S) {
        log::debug!("rebuilding window list for workspace {}", shell.active_workspace());
        for item in &mut self.items {
            item.dispose(shell);
        }
        self.items.clear();

        let windows = shell.workspace_windows(shell.active_workspace());
        for window in windows.into_iter().sorted_by_key(|w| w.stable_sequence()) {
            self.add_window(shell, window);
        }
        // Highlight whichever window currently has focus.
        self.on_focus_changed();
    }

    fn add_window(&mut self, shell: &mut S, window: S::Window) {
        // Interesting windows exclude docks, desktop and other chrome.
        if !shell.is_interesting(&window) {
            return;
        }
        // No owning application is a filtering decision, not an error.
        let Some(icon) = shell.app_icon(&window, ICON_SIZE) else {
            log::debug!("window {} has no owning application, skipping", window.id());
            return;
        };
        if self.find(window.id()).is_some() {
            return;
        }
        self.items.push(WindowItem::new(shell, window, icon));
    }

    // Linear scan; the list only ever holds the windows of one workspace.
    fn find(&self, id: WindowId) -> Option<usize> {
        self.items.iter().position(|item| item.window().id() == id)
    }

    pub fn on_window_added(&mut self, shell: &mut S, workspace: WorkspaceId, window: S::Window) {
        if workspace != shell.active_workspace() {
            return;
        }
        self.add_window(shell, window);
    }

    pub fn on_window_removed(&mut self, shell: &mut S, workspace: WorkspaceId, window: &S::Window) {
        if workspace != shell.active_workspace() {
            return;
        }
        // Removals of untracked windows are expected: chrome and app-less
        // windows never got an item in the first place.
        let Some(index) = self.find(window.id()) else { return };
        let mut item = self.items.remove(index);
        item.dispose(shell);
    }

    /// The shell only reports that focus moved somewhere, not which window
    /// lost it, so every item re-reads its own focus flag. This is the one
    /// event that visits the whole collection.
    pub fn on_focus_changed(&mut self) {
        for item in &mut self.items {
            let focused = item.window().has_focus();
            item.set_focused(focused);
        }
    }

    pub fn on_window_minimized(&mut self, window: &S::Window) {
        self.refresh_item(window);
    }

    pub fn on_window_mapped(&mut self, window: &S::Window) {
        self.refresh_item(window);
    }

    pub fn on_title_changed(&mut self, window: &S::Window) {
        self.refresh_item(window);
    }

    fn refresh_item(&mut self, window: &S::Window) {
        // Events for windows outside the tracked set (other workspaces,
        // uninteresting windows) are ignored.
        if let Some(index) = self.find(window.id()) {
            self.items[index].refresh_label();
        }
    }

    pub fn on_item_pressed(&self, shell: &S, window: &S::Window) {
        if let Some(index) = self.find(window.id()) {
            self.items[index].pressed(shell);
        }
    }

    /// Step focus along the list by one. Without a focused item there is no
    /// position to step from, so the gesture is ignored; at the ends the
    /// index clamps and nothing is activated.
    pub fn on_scroll(&self, shell: &S, direction: ScrollDirection) {
        let Some(focused) = self.items.iter().position(|item| item.window().has_focus()) else {
            return;
        };
        let step: isize = match direction {
            ScrollDirection::Up => -1,
            ScrollDirection::Down => 1,
        };
        let last = self.items.len() as isize - 1;
        let target = (focused as isize + step).clamp(0, last) as usize;
        if target == focused {
            return;
        }
        self.items[target].window().activate(shell.current_time());
    }

    pub fn on_workspace_count_changed(&mut self, shell: &mut S) {
        self.change_workspaces(shell);
        self.reload_items(shell);
    }

    pub fn on_workspace_switched(&mut self, shell: &mut S) {
        self.reload_items(shell);
    }

    /// Dispose every item and drop the workspace subscriptions.
    pub(crate) fn dispose(&mut self, shell: &mut S) {
        for item in &mut self.items {
            item.dispose(shell);
        }
        self.items.clear();
        for signal in self.workspace_signals.drain(..) {
            shell.disconnect(signal);
        }
    }

    pub fn items(&self) -> &[WindowItem<S>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
