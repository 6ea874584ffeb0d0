/// Duration of the tray slide animation.
pub const ANIMATION_TIME_MS: u32 = 200;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Easing {
    EaseOutQuad,
}

/// Target of one tray slide. `y` is relative to the bottom display edge,
/// with positive values falling off-screen (the shell's tray coordinate
/// convention).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrayAnimation {
    pub y: i32,
    pub duration_ms: u32,
    pub easing: Easing,
}

/// Pluggable computation of the tray's show/hide animation targets.
///
/// The shell consults the installed strategy whenever it slides the
/// notification tray in or out. A plugin that needs the tray to clear some
/// chrome installs its own strategy via
/// [`crate::ShellBackend::replace_tray_animation`] and puts the previous one
/// back when it deactivates.
pub trait TrayAnimationStrategy {
    /// Target for sliding the tray into view. `tray_height` is the themed
    /// height of the tray itself.
    fn show_target(&self, tray_height: i32) -> TrayAnimation;
    /// Target for sliding the tray out of view.
    fn hide_target(&self, tray_height: i32) -> TrayAnimation;
}
