//! # Fastscroll Core
//!
//! Platform-independent logic for the fast scroller: a thumb overlay that
//! appears while a text view scrolls, fades out after inactivity, and can be
//! dragged to jump through long documents.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      FastScroller                         │
//! │  ┌────────────┐ ┌────────────┐ ┌────────────────────────┐ │
//! │  │  Geometry  │ │   Timers   │ │      SpriteCache       │ │
//! │  └────────────┘ └────────────┘ └────────────────────────┘ │
//! │         │                                                 │
//! │  ┌──────┴─────────────────────────────┐                   │
//! │  │  ScrollHost (borrowed, never owned) │                  │
//! │  └─────────────────────────────────────┘                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The UI layer owns both the host editor and the scroller and lends the
//! host to every scroller call that needs it.

pub mod config;
pub mod geometry;
pub mod host;
pub mod scroller;
pub mod sprite;
pub mod timer;

pub use config::{Config, ConfigError, EditorConfig, ScrollerConfig};
pub use host::{ListenerId, ScrollChange, ScrollHost, ScrollListeners};
pub use scroller::{FastScroller, ScrollerState, ThumbFrame, TouchEvent};
pub use sprite::{Rgba, Sprite, SpriteCache, SpriteKind, ThumbDrawable};
pub use timer::{TimerRequest, TimerToken, Timers};

/// Result type for scroller operations
pub type ScrollerResult<T> = Result<T, ScrollerError>;

/// Errors that can occur in scroller operations
#[derive(Debug, thiserror::Error)]
pub enum ScrollerError {
    #[error("Sprite size {width}x{height} is invalid")]
    InvalidSpriteSize { width: u32, height: u32 },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
