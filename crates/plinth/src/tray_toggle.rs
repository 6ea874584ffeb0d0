use shell_host::{ShellBackend, SignalHandle};

pub const GLYPH_EMPTY: &str = " ";
pub const GLYPH_PENDING: &str = "!";

/// Button reflecting whether the shell's notification summary holds
/// anything. Clicking it toggles the tray's shown/hidden state.
pub struct TrayToggle {
    glyph: &'static str,
    added_signal: Option<SignalHandle>,
    removed_signal: Option<SignalHandle>,
}

impl TrayToggle {
    pub fn new<S: ShellBackend>(shell: &mut S) -> Self {
        let mut toggle = Self {
            glyph: GLYPH_EMPTY,
            added_signal: Some(shell.connect_summary_added()),
            removed_signal: Some(shell.connect_summary_removed()),
        };
        toggle.refresh(shell);
        toggle
    }

    /// Recompute the glyph from the summary child count. Runs on every
    /// add/remove of a summary child.
    pub fn refresh<S: ShellBackend>(&mut self, shell: &S) {
        self.glyph = if shell.summary_count() == 0 { GLYPH_EMPTY } else { GLYPH_PENDING };
    }

    pub fn on_pressed<S: ShellBackend>(&self, shell: &mut S) {
        shell.toggle_tray();
    }

    /// Each subscription is guarded on its own, so a partially initialized
    /// toggle can still be torn down.
    pub fn dispose<S: ShellBackend>(&mut self, shell: &mut S) {
        if let Some(signal) = self.added_signal.take() {
            shell.disconnect(signal);
        }
        if let Some(signal) = self.removed_signal.take() {
            shell.disconnect(signal);
        }
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }
}
