use std::{cell::Cell, rc::Rc};

use shell_host::{Easing, TrayAnimation, TrayAnimationStrategy, ANIMATION_TIME_MS};

/// Slides the notification tray to rest directly above the panel instead of
/// the bare display edge.
///
/// Targets use the shell's tray coordinates: relative to the bottom display
/// edge, positive y falling off-screen. The panel height cell is shared with
/// [`crate::Panel`], which updates it on every relayout.
pub struct PanelClearance {
    panel_height: Rc<Cell<i32>>,
}

impl PanelClearance {
    pub fn new(panel_height: Rc<Cell<i32>>) -> Self {
        Self { panel_height }
    }
}

impl TrayAnimationStrategy for PanelClearance {
    fn show_target(&self, tray_height: i32) -> TrayAnimation {
        TrayAnimation {
            y: -(tray_height + self.panel_height.get()),
            duration_ms: ANIMATION_TIME_MS,
            easing: Easing::EaseOutQuad,
        }
    }

    fn hide_target(&self, tray_height: i32) -> TrayAnimation {
        TrayAnimation { y: tray_height, duration_ms: ANIMATION_TIME_MS, easing: Easing::EaseOutQuad }
    }
}
