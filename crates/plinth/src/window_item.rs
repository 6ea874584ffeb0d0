use shell_host::{ShellBackend, SignalHandle, WindowHandle};

/// Icon size for window items.
pub(crate) const ICON_SIZE: i32 = 16;

/// One entry in the window list: a single managed window on the active
/// workspace, together with its rendered state. Exactly one item exists per
/// tracked window; the item holds a handle to the window but never owns its
/// lifetime.
pub struct WindowItem<S: ShellBackend> {
    window: S::Window,
    icon: S::Icon,
    label: String,
    focused: bool,
    title_signal: Option<SignalHandle>,
}

impl<S: ShellBackend> WindowItem<S> {
    pub(crate) fn new(shell: &mut S, window: S::Window, icon: S::Icon) -> Self {
        let title_signal = Some(shell.connect_title_changed(&window));
        let mut item = Self { window, icon, label: String::new(), focused: false, title_signal };
        item.refresh_label();
        item
    }

    /// The label is the raw title while the window is shown on its
    /// workspace, and the bracketed title while it is minimized or hidden,
    /// so minimized windows stay visible in the list without losing
    /// identity.
    pub fn refresh_label(&mut self) {
        let title = self.window.title();
        self.label = if self.window.showing_on_its_workspace() { title } else { format!("[{}]", title) };
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// A press minimizes the window when it has focus and raises it
    /// otherwise. The timestamp lets the shell discard requests that lost a
    /// race against a newer one; minimization doesn't strictly need one, but
    /// takes it anyway.
    pub(crate) fn pressed(&self, shell: &S) {
        let time = shell.current_time();
        if self.window.has_focus() {
            self.window.minimize(time);
        } else {
            self.window.activate(time);
        }
    }

    /// Drop the title-change subscription. Runs at most once no matter how
    /// often it is called, so teardown triggered from the visual container
    /// can't touch a half-destroyed window.
    pub(crate) fn dispose(&mut self, shell: &mut S) {
        if let Some(signal) = self.title_signal.take() {
            shell.disconnect(signal);
        }
    }

    pub fn window(&self) -> &S::Window {
        &self.window
    }

    pub fn icon(&self) -> &S::Icon {
        &self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
