//! In-memory shell implementing [`ShellBackend`], used by the panel's tests
//! and the `simulate` example. Windows are `Rc<RefCell>` handles in the
//! style of a refcounted toolkit object; the shell records every panel-side
//! mutation (subscriptions, activation requests, panel placement) so tests
//! can assert on them.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::{
    backend::{ShellBackend, WindowHandle},
    geometry::Rect,
    tray::{Easing, TrayAnimation, TrayAnimationStrategy, ANIMATION_TIME_MS},
    wrappers::{SignalHandle, Timestamp, WindowId, WorkspaceId},
};

#[derive(Debug)]
struct FakeWindowState {
    id: WindowId,
    title: String,
    focused: bool,
    showing: bool,
    stable_sequence: u64,
    interesting: bool,
    app: Option<String>,
    activations: Vec<Timestamp>,
    minimizations: Vec<Timestamp>,
}

/// Handle to a window owned by a [`FakeShell`].
#[derive(Clone, Debug)]
pub struct FakeWindow {
    state: Rc<RefCell<FakeWindowState>>,
}

impl FakeWindow {
    pub fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    /// Flip the shown-on-workspace flag, as minimizing/unminimizing would.
    pub fn set_showing(&self, showing: bool) {
        self.state.borrow_mut().showing = showing;
    }

    /// Activation requests received so far, with their timestamps.
    pub fn activations(&self) -> Vec<Timestamp> {
        self.state.borrow().activations.clone()
    }

    /// Minimization requests received so far, with their timestamps.
    pub fn minimizations(&self) -> Vec<Timestamp> {
        self.state.borrow().minimizations.clone()
    }
}

impl WindowHandle for FakeWindow {
    fn id(&self) -> WindowId {
        self.state.borrow().id
    }

    fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    fn has_focus(&self) -> bool {
        self.state.borrow().focused
    }

    fn showing_on_its_workspace(&self) -> bool {
        self.state.borrow().showing
    }

    fn stable_sequence(&self) -> u64 {
        self.state.borrow().stable_sequence
    }

    fn activate(&self, time: Timestamp) {
        self.state.borrow_mut().activations.push(time);
    }

    fn minimize(&self, time: Timestamp) {
        self.state.borrow_mut().minimizations.push(time);
    }
}

/// Icon "rendered" by the fake shell: just the app name and requested size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeIcon {
    pub app: String,
    pub size: i32,
}

/// What a live subscription is listening for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Connection {
    WindowAdded(WorkspaceId),
    WindowRemoved(WorkspaceId),
    TitleChanged(WindowId),
    SummaryAdded,
    SummaryRemoved,
}

/// The shell's built-in tray behavior: slide to rest at the display edge.
struct EdgeSlide;

impl TrayAnimationStrategy for EdgeSlide {
    fn show_target(&self, tray_height: i32) -> TrayAnimation {
        TrayAnimation { y: -tray_height, duration_ms: ANIMATION_TIME_MS, easing: Easing::EaseOutQuad }
    }

    fn hide_target(&self, tray_height: i32) -> TrayAnimation {
        TrayAnimation { y: tray_height, duration_ms: ANIMATION_TIME_MS, easing: Easing::EaseOutQuad }
    }
}

pub struct FakeShell {
    workspaces: Vec<Vec<FakeWindow>>,
    active: WorkspaceId,
    connections: HashMap<SignalHandle, Connection>,
    disconnect_log: Vec<SignalHandle>,
    next_handle: u64,
    next_window_id: u64,
    next_sequence: u64,
    summary_count: usize,
    tray_shown: bool,
    display: Rect,
    panel_height: i32,
    panel_geometry: Option<Rect>,
    panel_attached: bool,
    strategy: Option<Box<dyn TrayAnimationStrategy>>,
    clock: Cell<u64>,
}

impl FakeShell {
    pub fn new(workspaces: usize) -> Self {
        Self {
            workspaces: (0..workspaces).map(|_| Vec::new()).collect(),
            active: WorkspaceId(0),
            connections: HashMap::new(),
            disconnect_log: Vec::new(),
            next_handle: 1,
            next_window_id: 1,
            next_sequence: 1,
            summary_count: 0,
            tray_shown: false,
            display: Rect { x: 0, y: 0, width: 1920, height: 1080 },
            panel_height: 24,
            panel_geometry: None,
            panel_attached: false,
            strategy: None,
            clock: Cell::new(0),
        }
    }

    fn open(&mut self, workspace: WorkspaceId, title: &str, interesting: bool, app: Option<String>) -> FakeWindow {
        let state = FakeWindowState {
            id: WindowId(self.next_window_id),
            title: title.to_string(),
            focused: false,
            showing: true,
            stable_sequence: self.next_sequence,
            interesting,
            app,
            activations: Vec::new(),
            minimizations: Vec::new(),
        };
        self.next_window_id += 1;
        self.next_sequence += 1;
        let window = FakeWindow { state: Rc::new(RefCell::new(state)) };
        self.workspaces[workspace.0].push(window.clone());
        window
    }

    /// Open a normal user window with a resolvable owning application.
    pub fn open_window(&mut self, workspace: WorkspaceId, title: &str) -> FakeWindow {
        self.open(workspace, title, true, Some(title.to_lowercase()))
    }

    /// Open a window classified as shell chrome (dock, desktop, ...).
    pub fn open_chrome(&mut self, workspace: WorkspaceId, title: &str) -> FakeWindow {
        self.open(workspace, title, false, None)
    }

    /// Open an interesting window whose owning application can't be resolved.
    pub fn open_appless(&mut self, workspace: WorkspaceId, title: &str) -> FakeWindow {
        self.open(workspace, title, true, None)
    }

    pub fn close_window(&mut self, window: &FakeWindow) {
        let id = window.id();
        for windows in &mut self.workspaces {
            windows.retain(|w| w.id() != id);
        }
    }

    /// Move focus to the given window (or nowhere), clearing it everywhere
    /// else. Does not deliver any event; tests do that themselves.
    pub fn focus(&mut self, window: Option<&FakeWindow>) {
        let id = window.map(|w| w.id());
        for windows in &self.workspaces {
            for w in windows {
                let focused = Some(w.id()) == id;
                w.state.borrow_mut().focused = focused;
            }
        }
    }

    pub fn switch_to(&mut self, workspace: WorkspaceId) {
        assert!(workspace.0 < self.workspaces.len());
        self.active = workspace;
    }

    /// Grow or shrink the workspace registry. Windows on removed workspaces
    /// are dropped; if the active workspace disappears, the last remaining
    /// one becomes active.
    pub fn set_workspace_count(&mut self, count: usize) {
        assert!(count > 0);
        self.workspaces.resize_with(count, Vec::new);
        if self.active.0 >= count {
            self.active = WorkspaceId(count - 1);
        }
    }

    pub fn add_summary_item(&mut self) {
        self.summary_count += 1;
    }

    pub fn remove_summary_item(&mut self) {
        self.summary_count = self.summary_count.saturating_sub(1);
    }

    pub fn set_display(&mut self, display: Rect) {
        self.display = display;
    }

    pub fn set_panel_height(&mut self, height: i32) {
        self.panel_height = height;
    }

    pub fn tray_shown(&self) -> bool {
        self.tray_shown
    }

    pub fn panel_geometry(&self) -> Option<Rect> {
        self.panel_geometry
    }

    pub fn panel_attached(&self) -> bool {
        self.panel_attached
    }

    pub fn has_custom_tray_animation(&self) -> bool {
        self.strategy.is_some()
    }

    /// Show target as the shell would compute it, through the installed
    /// strategy or the built-in edge slide.
    pub fn tray_show_target(&self, tray_height: i32) -> TrayAnimation {
        let fallback = EdgeSlide;
        let strategy: &dyn TrayAnimationStrategy = match &self.strategy {
            Some(s) => s.as_ref(),
            None => &fallback,
        };
        strategy.show_target(tray_height)
    }

    pub fn tray_hide_target(&self, tray_height: i32) -> TrayAnimation {
        let fallback = EdgeSlide;
        let strategy: &dyn TrayAnimationStrategy = match &self.strategy {
            Some(s) => s.as_ref(),
            None => &fallback,
        };
        strategy.hide_target(tray_height)
    }

    pub fn live_connections(&self) -> usize {
        self.connections.len()
    }

    pub fn title_watch_count(&self) -> usize {
        self.connections.values().filter(|c| matches!(c, Connection::TitleChanged(_))).count()
    }

    pub fn workspace_watch_count(&self) -> usize {
        self.connections
            .values()
            .filter(|c| matches!(c, Connection::WindowAdded(_) | Connection::WindowRemoved(_)))
            .count()
    }

    /// Every handle ever passed to `disconnect`, in call order. A handle
    /// appearing twice means someone double-disposed a subscription.
    pub fn disconnect_log(&self) -> &[SignalHandle] {
        &self.disconnect_log
    }

    fn connect(&mut self, connection: Connection) -> SignalHandle {
        let handle = SignalHandle(self.next_handle);
        self.next_handle += 1;
        self.connections.insert(handle, connection);
        handle
    }
}

impl ShellBackend for FakeShell {
    type Window = FakeWindow;
    type Icon = FakeIcon;

    fn is_interesting(&self, window: &FakeWindow) -> bool {
        window.state.borrow().interesting
    }

    fn app_icon(&self, window: &FakeWindow, size: i32) -> Option<FakeIcon> {
        let app = window.state.borrow().app.clone()?;
        Some(FakeIcon { app, size })
    }

    fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }

    fn active_workspace(&self) -> WorkspaceId {
        self.active
    }

    fn workspace_windows(&self, workspace: WorkspaceId) -> Vec<FakeWindow> {
        self.workspaces.get(workspace.0).cloned().unwrap_or_default()
    }

    fn connect_window_added(&mut self, workspace: WorkspaceId) -> SignalHandle {
        self.connect(Connection::WindowAdded(workspace))
    }

    fn connect_window_removed(&mut self, workspace: WorkspaceId) -> SignalHandle {
        self.connect(Connection::WindowRemoved(workspace))
    }

    fn connect_title_changed(&mut self, window: &FakeWindow) -> SignalHandle {
        self.connect(Connection::TitleChanged(window.id()))
    }

    fn connect_summary_added(&mut self) -> SignalHandle {
        self.connect(Connection::SummaryAdded)
    }

    fn connect_summary_removed(&mut self) -> SignalHandle {
        self.connect(Connection::SummaryRemoved)
    }

    fn disconnect(&mut self, handle: SignalHandle) {
        self.disconnect_log.push(handle);
        if self.connections.remove(&handle).is_none() {
            log::warn!("Tried to disconnect unknown signal handle {}", handle);
        }
    }

    fn summary_count(&self) -> usize {
        self.summary_count
    }

    fn toggle_tray(&mut self) {
        self.tray_shown = !self.tray_shown;
    }

    fn primary_display(&self) -> Rect {
        self.display
    }

    fn panel_height(&self) -> i32 {
        self.panel_height
    }

    fn attach_panel(&mut self, geometry: Rect) {
        self.panel_attached = true;
        self.panel_geometry = Some(geometry);
    }

    fn detach_panel(&mut self) {
        self.panel_attached = false;
        self.panel_geometry = None;
    }

    fn move_panel(&mut self, geometry: Rect) {
        self.panel_geometry = Some(geometry);
    }

    fn replace_tray_animation(
        &mut self,
        strategy: Option<Box<dyn TrayAnimationStrategy>>,
    ) -> Option<Box<dyn TrayAnimationStrategy>> {
        std::mem::replace(&mut self.strategy, strategy)
    }

    fn current_time(&self) -> Timestamp {
        self.clock.set(self.clock.get() + 1);
        Timestamp(self.clock.get())
    }
}
