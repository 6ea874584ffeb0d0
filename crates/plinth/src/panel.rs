use std::{cell::Cell, rc::Rc};

use shell_host::{Rect, ShellBackend};

use crate::{tray_toggle::TrayToggle, window_list::WindowListModel};

/// The bar itself: window list on the left, tray toggle on the right,
/// anchored flush to the bottom edge of the primary display.
pub struct Panel<S: ShellBackend> {
    pub(crate) window_list: WindowListModel<S>,
    pub(crate) tray_toggle: TrayToggle,
    geometry: Rect,
    clearance: Rc<Cell<i32>>,
}

impl<S: ShellBackend> Panel<S> {
    pub fn new(shell: &mut S) -> Self {
        Self {
            window_list: WindowListModel::new(shell),
            tray_toggle: TrayToggle::new(shell),
            geometry: Rect { x: 0, y: 0, width: 0, height: 0 },
            clearance: Rc::new(Cell::new(0)),
        }
    }

    /// Recompute the bar's placement from the primary display and the
    /// themed content height. Only with these precise measurements will
    /// windows snap to it like a real panel.
    pub fn relayout(&mut self, shell: &mut S) {
        let prim = shell.primary_display();
        let height = shell.panel_height();
        self.geometry = Rect { x: prim.x, y: prim.y + prim.height - height, width: prim.width, height };
        self.clearance.set(height);
        shell.move_panel(self.geometry);
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Height cell shared with the installed tray animation strategy, so the
    /// tray keeps clearing the bar after theme changes.
    pub(crate) fn clearance(&self) -> Rc<Cell<i32>> {
        Rc::clone(&self.clearance)
    }

    pub fn window_list(&self) -> &WindowListModel<S> {
        &self.window_list
    }

    pub fn tray_toggle(&self) -> &TrayToggle {
        &self.tray_toggle
    }
}
