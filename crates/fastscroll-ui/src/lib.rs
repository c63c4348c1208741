//! # Fastscroll UI
//!
//! Binds the fast scroller to an iced application.
//!
//! ## Architecture
//!
//! The app follows the Elm architecture. `App` owns the editor host and the
//! scroller; every message ends with a sync step that:
//! - routes queued scroll notifications from the host to the scroller
//! - runs a draw pass if the scroller asked for one
//! - arms a tokio sleep for every timer the scroller scheduled
//!
//! The view then paints the last `ThumbFrame` without touching the scroller.

pub mod app;
pub mod host;
pub mod overlay;
pub mod theme;

pub use app::{run, App, Flags};
pub use host::EditorHost;
pub use theme::Theme;
