//! Editor host: a `text_editor` the fast scroller can drive.
//!
//! iced's text editor scrolls in whole lines and does not report its offset,
//! so [`ScrollTracker`] mirrors the offset from the actions that pass through
//! [`EditorHost::perform`]: wheel scrolls directly, everything else by
//! following the cursor the way the editor does when it moves. Wheel scrolls
//! also start a short fling that keeps scrolling on frame ticks until it
//! decays or is aborted.

use fastscroll_core::{ListenerId, ScrollChange, ScrollHost, ScrollListeners};
use iced::widget::text_editor;

/// Share of a wheel scroll carried over into the fling, per frame.
const FLING_BOOST: f32 = 0.5;
/// Velocity kept after each frame.
const FLING_DECAY: f32 = 0.85;
/// Lines per frame below which the fling stops.
const FLING_STOP: f32 = 0.05;

/// Line-based scroll offset and fling state.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    first_line: usize,
    line_count: usize,
    line_height: f32,
    viewport_height: f32,
    fling_velocity: f32,
    fling_remainder: f32,
}

impl ScrollTracker {
    pub fn new(line_count: usize, line_height: f32) -> Self {
        Self {
            first_line: 0,
            line_count: line_count.max(1),
            line_height,
            viewport_height: 0.0,
            fling_velocity: 0.0,
            fling_remainder: 0.0,
        }
    }

    pub fn first_line(&self) -> usize {
        self.first_line
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    pub fn set_line_count(&mut self, count: usize) {
        self.line_count = count.max(1);
        self.first_line = self.first_line.min(self.max_first_line());
    }

    fn max_first_line(&self) -> usize {
        self.line_count - 1
    }

    pub fn scroll_y(&self) -> f32 {
        self.first_line as f32 * self.line_height
    }

    /// Content height, unknown until the viewport has been measured.
    pub fn layout_height(&self) -> Option<f32> {
        (self.viewport_height > 0.0).then_some(self.line_count as f32 * self.line_height)
    }

    /// Moves the first visible line by `lines`, clamped to the document.
    /// Returns the delta actually applied.
    pub fn scroll_by(&mut self, lines: i32) -> i32 {
        let target = (self.first_line as i64 + lines as i64).clamp(0, self.max_first_line() as i64);
        let applied = target - self.first_line as i64;
        self.first_line = target as usize;
        applied as i32
    }

    /// Whole lines that fit in the viewport, at least one.
    pub fn visible_lines(&self) -> usize {
        if self.line_height <= 0.0 {
            return 1;
        }
        ((self.viewport_height / self.line_height).floor() as usize).max(1)
    }

    /// Scrolls the least amount that brings `line` into view.
    /// Returns the delta applied.
    pub fn follow_line(&mut self, line: usize) -> i32 {
        let line = line.min(self.max_first_line());
        let visible = self.visible_lines();
        let target = if line < self.first_line {
            line
        } else if line >= self.first_line + visible {
            line + 1 - visible
        } else {
            return 0;
        };
        let applied = target as i64 - self.first_line as i64;
        self.first_line = target;
        applied as i32
    }

    /// Line delta that brings the pixel offset `y` to the top.
    pub fn delta_to(&self, y: f32) -> i32 {
        if self.line_height <= 0.0 {
            return 0;
        }
        let target = (y / self.line_height)
            .round()
            .clamp(0.0, self.max_first_line() as f32) as i64;
        (target - self.first_line as i64) as i32
    }

    pub fn start_fling(&mut self, lines: i32) {
        self.fling_velocity = lines as f32 * FLING_BOOST;
        self.fling_remainder = 0.0;
    }

    pub fn is_flinging(&self) -> bool {
        self.fling_velocity != 0.0
    }

    pub fn abort_fling(&mut self) {
        self.fling_velocity = 0.0;
        self.fling_remainder = 0.0;
    }

    /// Advances the fling by one frame and returns the whole lines to scroll.
    pub fn fling_step(&mut self) -> i32 {
        if !self.is_flinging() {
            return 0;
        }
        self.fling_remainder += self.fling_velocity;
        let step = self.fling_remainder.trunc();
        self.fling_remainder -= step;
        self.fling_velocity *= FLING_DECAY;
        if self.fling_velocity.abs() < FLING_STOP {
            self.abort_fling();
        }
        step as i32
    }
}

/// A text editor that implements [`ScrollHost`].
pub struct EditorHost {
    content: text_editor::Content,
    tracker: ScrollTracker,
    listeners: ScrollListeners,
}

impl EditorHost {
    pub fn new(text: &str, line_height: f32) -> Self {
        let content = text_editor::Content::with_text(text);
        let tracker = ScrollTracker::new(content.line_count(), line_height);
        Self {
            content,
            tracker,
            listeners: ScrollListeners::new(),
        }
    }

    pub fn content(&self) -> &text_editor::Content {
        &self.content
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.tracker.set_viewport_height(height);
    }

    /// Applies an editor action, keeping the tracked offset in sync.
    pub fn perform(&mut self, action: text_editor::Action) {
        match action {
            text_editor::Action::Scroll { lines } => {
                self.scroll_lines(lines);
                self.tracker.start_fling(lines);
            }
            other => {
                let old_y = self.tracker.scroll_y();
                let cursor = self.content.cursor_position();
                self.content.perform(other);
                self.tracker.set_line_count(self.content.line_count());

                // The editor scrolls itself to keep a moved cursor visible.
                let (line, column) = self.content.cursor_position();
                if (line, column) != cursor {
                    self.tracker.follow_line(line);
                }
                self.notify_if_moved(old_y);
            }
        }
    }

    pub fn is_flinging(&self) -> bool {
        self.tracker.is_flinging()
    }

    /// Advances an active fling by one frame.
    pub fn tick_fling(&mut self) {
        let step = self.tracker.fling_step();
        if step != 0 {
            self.scroll_lines(step);
        }
    }

    /// Takes queued scroll notifications for routing to listeners.
    pub fn drain_scroll_changes(&mut self) -> Vec<(ListenerId, ScrollChange)> {
        self.listeners.drain()
    }

    fn scroll_lines(&mut self, lines: i32) {
        let old_y = self.tracker.scroll_y();
        let applied = self.tracker.scroll_by(lines);
        if applied == 0 {
            return;
        }
        self.content
            .perform(text_editor::Action::Scroll { lines: applied });
        self.notify_if_moved(old_y);
    }

    fn notify_if_moved(&mut self, old_y: f32) {
        let y = self.tracker.scroll_y();
        if y == old_y {
            return;
        }
        tracing::trace!("Editor scrolled {} -> {}", old_y, y);
        self.listeners.notify(ScrollChange {
            x: 0.0,
            y,
            old_x: 0.0,
            old_y,
        });
    }
}

impl ScrollHost for EditorHost {
    fn add_on_scroll_changed_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.add(id)
    }

    fn scroll_x(&self) -> f32 {
        0.0
    }

    fn scroll_y(&self) -> f32 {
        self.tracker.scroll_y()
    }

    fn layout_height(&self) -> Option<f32> {
        self.tracker.layout_height()
    }

    fn height(&self) -> f32 {
        self.tracker.viewport_height()
    }

    fn line_height(&self) -> f32 {
        self.tracker.line_height()
    }

    fn abort_fling(&mut self) {
        self.tracker.abort_fling();
    }

    fn scroll_to(&mut self, _x: f32, y: f32) {
        let delta = self.tracker.delta_to(y);
        self.scroll_lines(delta);
    }
}
