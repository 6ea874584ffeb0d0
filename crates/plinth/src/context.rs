use anyhow::{bail, Result};
use shell_host::{ShellBackend, ShellEvent, TrayAnimationStrategy};

use crate::{panel::Panel, tray_animation::PanelClearance};

/// Owns the panel and the saved host tray-animation strategy. One of these
/// replaces the loose module-level globals a shell extension would otherwise
/// keep; the host constructs it at startup and tears it down explicitly.
pub struct PanelContext<S: ShellBackend> {
    panel: Panel<S>,
    /// `Some(previous)` while our tray animation override is installed.
    saved_tray_animation: Option<Option<Box<dyn TrayAnimationStrategy>>>,
}

impl<S: ShellBackend> PanelContext<S> {
    pub fn new(shell: &mut S) -> Self {
        Self { panel: Panel::new(shell), saved_tray_animation: None }
    }

    /// Put the bar on screen and take over the tray animation. Fails when
    /// the panel is already enabled.
    pub fn enable(&mut self, shell: &mut S) -> Result<()> {
        if self.saved_tray_animation.is_some() {
            bail!("panel is already enabled");
        }
        let clearance = PanelClearance::new(self.panel.clearance());
        let previous = shell.replace_tray_animation(Some(Box::new(clearance)));
        self.saved_tray_animation = Some(previous);

        shell.attach_panel(self.panel.geometry());
        self.panel.relayout(shell);
        Ok(())
    }

    /// Undo [`enable`](Self::enable): restore the shell's previous tray
    /// animation and take the bar off screen. A no-op on a disabled panel.
    pub fn disable(&mut self, shell: &mut S) {
        if let Some(previous) = self.saved_tray_animation.take() {
            shell.replace_tray_animation(previous);
            shell.detach_panel();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.saved_tray_animation.is_some()
    }

    /// Route one shell event to the component that owns it. Runs to
    /// completion on the caller's turn; nothing here blocks or suspends.
    pub fn dispatch(&mut self, shell: &mut S, event: ShellEvent<S::Window>) {
        match event {
            ShellEvent::WindowAdded { workspace, window } => {
                self.panel.window_list.on_window_added(shell, workspace, window)
            }
            ShellEvent::WindowRemoved { workspace, window } => {
                self.panel.window_list.on_window_removed(shell, workspace, &window)
            }
            ShellEvent::WorkspaceCountChanged => self.panel.window_list.on_workspace_count_changed(shell),
            ShellEvent::WorkspaceSwitched => self.panel.window_list.on_workspace_switched(shell),
            ShellEvent::FocusChanged => self.panel.window_list.on_focus_changed(),
            ShellEvent::WindowMinimized(window) => self.panel.window_list.on_window_minimized(&window),
            ShellEvent::WindowMapped(window) => self.panel.window_list.on_window_mapped(&window),
            ShellEvent::TitleChanged(window) => self.panel.window_list.on_title_changed(&window),
            ShellEvent::ItemPressed(window) => self.panel.window_list.on_item_pressed(shell, &window),
            ShellEvent::ListScrolled(direction) => self.panel.window_list.on_scroll(shell, direction),
            ShellEvent::SummaryItemAdded | ShellEvent::SummaryItemRemoved => self.panel.tray_toggle.refresh(shell),
            ShellEvent::TrayTogglePressed => self.panel.tray_toggle.on_pressed(shell),
            ShellEvent::MonitorsChanged | ShellEvent::ThemeChanged => self.panel.relayout(shell),
        }
    }

    /// Explicit teardown: disable, then drop every subscription the panel
    /// holds. Safe regardless of how far construction or enabling got.
    pub fn shutdown(mut self, shell: &mut S) {
        self.disable(shell);
        self.panel.window_list.dispose(shell);
        self.panel.tray_toggle.dispose(shell);
    }

    pub fn panel(&self) -> &Panel<S> {
        &self.panel
    }
}
