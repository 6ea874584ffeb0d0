//! plinth — a taskbar-like bottom panel for desktop shells.
//!
//! The panel shows one item per normal user window on the active workspace
//! plus a toggle button for the shell's notification tray, anchored to the
//! bottom edge of the primary display. It is a plugin, not a program: the
//! host shell implements [`shell_host::ShellBackend`], constructs a
//! [`PanelContext`], forwards its events as [`shell_host::ShellEvent`]s
//! through [`PanelContext::dispatch`], and renders the bar from the model
//! state ([`WindowListModel::items`], [`TrayToggle::glyph`],
//! [`Panel::geometry`]).
//!
//! While enabled, the panel also swaps in a tray animation strategy that
//! makes the notification tray slide to rest directly above the bar instead
//! of the display edge.

pub mod context;
pub mod panel;
pub mod tray_animation;
pub mod tray_toggle;
pub mod window_item;
pub mod window_list;

#[cfg(test)]
mod test;

pub use context::PanelContext;
pub use panel::Panel;
pub use tray_animation::PanelClearance;
pub use tray_toggle::TrayToggle;
pub use window_item::WindowItem;
pub use window_list::WindowListModel;
