//! The capability surface a desktop shell exposes to the plinth panel.
//!
//! The panel never talks to a GUI toolkit or window manager directly. The
//! host shell implements [`ShellBackend`] (and hands out [`WindowHandle`]s),
//! delivers [`ShellEvent`]s on its single logical thread, and renders from
//! the panel's model state. [`fake`] contains an in-memory shell used by the
//! panel's tests and the `simulate` example.

pub mod backend;
pub mod event;
pub mod fake;
pub mod geometry;
pub mod tray;
pub mod wrappers;

pub use backend::*;
pub use event::*;
pub use geometry::*;
pub use tray::*;
pub use wrappers::*;
