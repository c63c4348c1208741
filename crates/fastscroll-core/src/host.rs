//! The contract between the scroller and the text view it overlays.
//!
//! The scroller never owns its host. The application owns both and lends
//! the host to each scroller call, so there is no shared or cyclic ownership
//! between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(Uuid);

impl ListenerId {
    /// Creates a new unique listener ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scroll position change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollChange {
    pub x: f32,
    pub y: f32,
    pub old_x: f32,
    pub old_y: f32,
}

/// What the scroller needs from the text view it scrolls.
pub trait ScrollHost {
    /// Registers a listener for scroll changes. Returns false if it was
    /// already registered.
    fn add_on_scroll_changed_listener(&mut self, id: ListenerId) -> bool;

    fn scroll_x(&self) -> f32;

    fn scroll_y(&self) -> f32;

    /// Total content height, or `None` before layout has happened.
    fn layout_height(&self) -> Option<f32>;

    /// Viewport height.
    fn height(&self) -> f32;

    fn line_height(&self) -> f32;

    /// Stops any momentum scroll in progress.
    fn abort_fling(&mut self);

    fn scroll_to(&mut self, x: f32, y: f32);
}

/// Listener registry a host embeds to fan out scroll notifications.
///
/// Notifications are queued rather than delivered through callbacks; the
/// owner drains them and routes each one to its listener.
#[derive(Debug, Default)]
pub struct ScrollListeners {
    ids: Vec<ListenerId>,
    pending: Vec<(ListenerId, ScrollChange)>,
}

impl ScrollListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener. Duplicates are refused.
    pub fn add(&mut self, id: ListenerId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: ListenerId) {
        self.ids.retain(|l| *l != id);
        self.pending.retain(|(l, _)| *l != id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Queues `change` for every registered listener.
    pub fn notify(&mut self, change: ScrollChange) {
        for id in &self.ids {
            self.pending.push((*id, change));
        }
    }

    /// Takes all queued notifications in the order they were raised.
    pub fn drain(&mut self) -> Vec<(ListenerId, ScrollChange)> {
        std::mem::take(&mut self.pending)
    }
}
