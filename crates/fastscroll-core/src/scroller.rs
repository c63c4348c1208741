//! The fast scroller widget.
//!
//! ## States
//!
//! ```text
//!            scroll                 2s idle              alpha <= floor
//!  Hidden ───────────▶ Visible ───────────▶ Exiting ─────────────────▶ Hidden
//!                       │   ▲                  │
//!            press on   │   │ release          │ scroll
//!            thumb      ▼   │                  ▼
//!                      Dragging             Visible
//! ```
//!
//! Every transition cancels outstanding timers and requests a redraw.
//! Visible is refused while the content is too short to need a thumb.
//!
//! Drawing is split in two: [`FastScroller::draw`] advances the fade and
//! returns a [`ThumbFrame`], and the UI paints that frame without touching
//! the scroller.

use crate::config::ScrollerConfig;
use crate::geometry;
use crate::host::{ListenerId, ScrollChange, ScrollHost};
use crate::sprite::{Rgba, SpriteCache, SpriteKind, ThumbDrawable};
use crate::timer::{TimerRequest, TimerToken, Timers};

/// Visibility of the thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollerState {
    #[default]
    Hidden,
    Visible,
    Dragging,
    Exiting,
}

/// Pointer input in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Pressed { x: f32, y: f32 },
    Moved { x: f32, y: f32 },
    Released { x: f32, y: f32 },
    /// The gesture was taken away (pointer left the window, touch lost).
    Cancelled,
}

/// What to paint for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbFrame {
    pub sprite: SpriteKind,
    pub top: f32,
    pub alpha: u8,
    /// Sprite cache generation the frame was produced against
    pub generation: u64,
}

/// Host measurements captured by the last `measure` pass.
#[derive(Debug, Clone, Copy, Default)]
struct Measurements {
    view_height: f32,
    scroll_max: f32,
    scroll_y: f32,
    host_height: f32,
    line_height: f32,
}

pub struct FastScroller {
    id: ListenerId,
    config: ScrollerConfig,
    state: ScrollerState,
    linked: bool,
    width: f32,
    height: f32,
    thumb_top: f32,
    thumb_height: u32,
    measurements: Measurements,
    alpha: u8,
    pressed: bool,
    needs_redraw: bool,
    timers: Timers,
    sprites: SpriteCache,
    tint: Rgba,
}

impl FastScroller {
    /// Creates an unlinked, hidden scroller.
    pub fn new(config: ScrollerConfig, tint: Rgba) -> Self {
        let thumb_height = config.thumb_height;
        let sprites = SpriteCache::new(
            ThumbDrawable::normal().with_height(thumb_height),
            ThumbDrawable::pressed().with_height(thumb_height),
        );
        Self {
            id: ListenerId::new(),
            alpha: config.max_alpha,
            config,
            state: ScrollerState::Hidden,
            linked: false,
            width: 0.0,
            height: 0.0,
            thumb_top: 0.0,
            thumb_height,
            measurements: Measurements::default(),
            pressed: false,
            needs_redraw: false,
            timers: Timers::new(),
            sprites,
            tint,
        }
    }

    // ==================== Host wiring ====================

    /// Registers this scroller as a scroll listener on `host`.
    ///
    /// Does nothing if already linked or if there is no host.
    pub fn link<H: ScrollHost>(&mut self, host: Option<&mut H>) -> bool {
        if self.linked {
            return false;
        }
        let Some(host) = host else {
            return false;
        };
        host.add_on_scroll_changed_listener(self.id);
        self.linked = true;
        tracing::debug!("Fast scroller {} linked", self.id);
        true
    }

    /// Host scroll notification.
    pub fn on_scroll_changed<H: ScrollHost>(&mut self, host: &H, change: ScrollChange) {
        if !self.linked || self.state == ScrollerState::Dragging {
            return;
        }
        tracing::trace!("Scroll changed {} -> {}", change.old_y, change.y);
        self.measure(host);
        self.set_state(ScrollerState::Visible);
        if self.state != ScrollerState::Hidden {
            self.schedule_hide(self.config.auto_hide_delay());
        }
    }

    /// Handles pointer input. Returns true if the event was consumed.
    pub fn on_touch<H: ScrollHost>(&mut self, host: &mut H, event: TouchEvent) -> bool {
        if !self.linked || self.state == ScrollerState::Hidden {
            return false;
        }
        self.measure(&*host);

        match event {
            TouchEvent::Pressed { x, y } => {
                if !self.is_point_in_thumb(x, y) {
                    return false;
                }
                host.abort_fling();
                self.set_state(ScrollerState::Dragging);
                self.pressed = true;
                true
            }
            TouchEvent::Moved { y, .. } => {
                if self.state != ScrollerState::Dragging {
                    return false;
                }
                self.pressed = true;
                host.abort_fling();
                self.thumb_top =
                    geometry::drag_thumb_top(y, self.thumb_height, self.measurements.view_height);
                self.scroll_host(host);
                self.invalidate();
                true
            }
            TouchEvent::Released { .. } => {
                self.release();
                false
            }
            TouchEvent::Cancelled => {
                if self.state == ScrollerState::Dragging {
                    self.release();
                }
                false
            }
        }
    }

    /// Delivers an elapsed timer. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) {
        if self.timers.fire(token) {
            self.set_state(ScrollerState::Exiting);
        } else {
            tracing::trace!("Ignoring stale timer {}", token.raw());
        }
    }

    // ==================== State ====================

    /// Moves to `state`, cancelling pending timers and requesting a redraw.
    ///
    /// Visible is refused while the content is shorter than
    /// `min_content_ratio` viewports.
    pub fn set_state(&mut self, state: ScrollerState) {
        if state == ScrollerState::Visible && !self.is_show_justified() {
            tracing::trace!("Content too short, staying {:?}", self.state);
            return;
        }
        self.timers.cancel_all();
        if self.state != state {
            tracing::debug!("Fast scroller {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.invalidate();
    }

    pub fn state(&self) -> ScrollerState {
        self.state
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn thumb_top(&self) -> f32 {
        self.thumb_top
    }

    pub fn thumb_height(&self) -> u32 {
        self.thumb_height
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    // ==================== Layout ====================

    /// Sets the overlay size. A changed size drops the cached sprites.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.sprites.clear();
        self.invalidate();
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Sets the accent color the thumbs are tinted with.
    pub fn set_tint(&mut self, tint: Rgba) {
        if self.tint == tint {
            return;
        }
        self.tint = tint;
        self.sprites.clear();
        self.invalidate();
    }

    // ==================== Drawing ====================

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Runs one draw pass.
    ///
    /// Builds the sprites if needed and advances the fade while exiting.
    /// Returns `None` when nothing should be painted.
    pub fn draw(&mut self) -> Option<ThumbFrame> {
        self.needs_redraw = false;
        if !self.linked || self.state == ScrollerState::Hidden {
            return None;
        }

        // Without sprites nothing is painted, but the fade still runs.
        let width = self.width.round().max(0.0) as u32;
        let paintable = match self.sprites.ensure(width, self.thumb_height, self.tint) {
            Ok(()) => true,
            Err(e) => {
                tracing::trace!("Nothing to paint: {}", e);
                false
            }
        };

        match self.state {
            ScrollerState::Visible => {
                self.alpha = self.config.max_alpha;
                paintable.then(|| self.frame(SpriteKind::Normal))
            }
            ScrollerState::Dragging => {
                self.alpha = self.config.max_alpha;
                paintable.then(|| self.frame(SpriteKind::Dragging))
            }
            ScrollerState::Exiting => {
                if self.alpha > self.config.fade_floor {
                    self.alpha = self.alpha.saturating_sub(self.config.fade_step);
                    self.schedule_hide(self.config.fade_tick());
                    paintable.then(|| self.frame(SpriteKind::Normal))
                } else {
                    self.alpha = 0;
                    self.set_state(ScrollerState::Hidden);
                    None
                }
            }
            ScrollerState::Hidden => None,
        }
    }

    pub fn sprites(&self) -> &SpriteCache {
        &self.sprites
    }

    /// Takes the timers scheduled since the last call, for the UI to arm.
    pub fn take_timer_requests(&mut self) -> Vec<TimerRequest> {
        self.timers.drain_requests()
    }

    // ==================== Internals ====================

    fn frame(&self, sprite: SpriteKind) -> ThumbFrame {
        ThumbFrame {
            sprite,
            top: self.thumb_top,
            alpha: self.alpha,
            generation: self.sprites.generation(),
        }
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Ends a gesture: back to Visible with a fresh auto-hide.
    fn release(&mut self) {
        self.set_state(ScrollerState::Visible);
        self.pressed = false;
        if self.state != ScrollerState::Hidden {
            self.schedule_hide(self.config.auto_hide_delay());
        }
    }

    fn schedule_hide(&mut self, delay: std::time::Duration) {
        self.timers.schedule(delay);
    }

    /// Captures host measurements and recomputes the thumb top. No-op until
    /// the host has a layout.
    fn measure<H: ScrollHost>(&mut self, host: &H) {
        if !self.linked {
            return;
        }
        let Some(layout_height) = host.layout_height() else {
            return;
        };
        self.measurements = Measurements {
            view_height: self.height,
            scroll_max: layout_height,
            scroll_y: host.scroll_y(),
            host_height: host.height(),
            line_height: host.line_height(),
        };
        let m = &self.measurements;
        self.thumb_top = geometry::thumb_top_for_scroll(
            m.view_height,
            self.thumb_height as f32,
            m.scroll_y,
            m.scroll_max,
            m.host_height,
            m.line_height,
        );
    }

    fn scroll_host<H: ScrollHost>(&self, host: &mut H) {
        let m = &self.measurements;
        if let Some(y) = geometry::scroll_target(
            self.thumb_top,
            m.view_height,
            self.thumb_height as f32,
            m.scroll_max,
            m.host_height,
            m.line_height,
        ) {
            let x = host.scroll_x();
            host.scroll_to(x, y);
        }
    }

    fn is_point_in_thumb(&self, x: f32, y: f32) -> bool {
        x >= 0.0
            && x <= self.width
            && y >= self.thumb_top
            && y <= self.thumb_top + self.thumb_height as f32
    }

    fn is_show_justified(&self) -> bool {
        geometry::is_content_long_enough(
            self.measurements.scroll_max,
            self.measurements.host_height,
            self.config.min_content_ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScrollListeners;
    use std::time::Duration;

    const ACCENT: Rgba = Rgba::rgb(0.4, 0.6, 1.0);

    struct MockHost {
        listeners: ScrollListeners,
        scroll_y: f32,
        layout: Option<f32>,
        height: f32,
        line_height: f32,
        fling_aborts: usize,
        scrolled_to: Vec<(f32, f32)>,
    }

    impl MockHost {
        fn new(layout: f32, height: f32) -> Self {
            Self {
                listeners: ScrollListeners::new(),
                scroll_y: 0.0,
                layout: Some(layout),
                height,
                line_height: 20.0,
                fling_aborts: 0,
                scrolled_to: Vec::new(),
            }
        }
    }

    impl ScrollHost for MockHost {
        fn add_on_scroll_changed_listener(&mut self, id: ListenerId) -> bool {
            self.listeners.add(id)
        }

        fn scroll_x(&self) -> f32 {
            0.0
        }

        fn scroll_y(&self) -> f32 {
            self.scroll_y
        }

        fn layout_height(&self) -> Option<f32> {
            self.layout
        }

        fn height(&self) -> f32 {
            self.height
        }

        fn line_height(&self) -> f32 {
            self.line_height
        }

        fn abort_fling(&mut self) {
            self.fling_aborts += 1;
        }

        fn scroll_to(&mut self, x: f32, y: f32) {
            self.scroll_y = y;
            self.scrolled_to.push((x, y));
        }
    }

    /// 1000px of content in a 200px viewport, scroller overlaying all of it.
    fn setup() -> (FastScroller, MockHost) {
        let mut host = MockHost::new(1000.0, 200.0);
        let mut scroller = FastScroller::new(ScrollerConfig::default(), ACCENT);
        scroller.set_bounds(24.0, 200.0);
        assert!(scroller.link(Some(&mut host)));
        (scroller, host)
    }

    fn scroll(scroller: &mut FastScroller, host: &mut MockHost, y: f32) {
        let change = ScrollChange {
            y,
            old_y: host.scroll_y,
            ..Default::default()
        };
        host.scroll_y = y;
        scroller.on_scroll_changed(&*host, change);
    }

    fn last_token(scroller: &mut FastScroller) -> TimerToken {
        scroller
            .take_timer_requests()
            .last()
            .map(|r| r.token)
            .expect("a timer was scheduled")
    }

    #[test]
    fn test_starts_hidden() {
        let mut scroller = FastScroller::new(ScrollerConfig::default(), ACCENT);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert!(!scroller.is_linked());
        assert!(scroller.draw().is_none());
    }

    #[test]
    fn test_link_is_idempotent() {
        let (mut scroller, mut host) = setup();
        assert!(!scroller.link(Some(&mut host)));
        assert!(!scroller.link::<MockHost>(None));
        assert_eq!(host.listeners.len(), 1);

        let mut unlinked = FastScroller::new(ScrollerConfig::default(), ACCENT);
        assert!(!unlinked.link::<MockHost>(None));
        assert!(!unlinked.is_linked());
    }

    #[test]
    fn test_short_content_stays_hidden() {
        let mut host = MockHost::new(100.0, 100.0);
        let mut scroller = FastScroller::new(ScrollerConfig::default(), ACCENT);
        scroller.set_bounds(24.0, 100.0);
        scroller.link(Some(&mut host));

        scroll(&mut scroller, &mut host, 10.0);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert!(scroller.take_timer_requests().is_empty());
    }

    #[test]
    fn test_long_content_becomes_visible() {
        let mut host = MockHost::new(200.0, 100.0);
        let mut scroller = FastScroller::new(ScrollerConfig::default(), ACCENT);
        scroller.set_bounds(24.0, 100.0);
        scroller.link(Some(&mut host));

        scroll(&mut scroller, &mut host, 10.0);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(scroller.needs_redraw());
    }

    #[test]
    fn test_no_layout_is_noop() {
        let (mut scroller, mut host) = setup();
        host.layout = None;
        scroll(&mut scroller, &mut host, 100.0);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert_eq!(scroller.thumb_top(), 0.0);
    }

    #[test]
    fn test_scroll_schedules_auto_hide() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);

        assert_eq!(scroller.thumb_top(), 76.0);
        let requests = scroller.take_timer_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].delay, Duration::from_millis(2000));

        scroller.on_timer(requests[0].token);
        assert_eq!(scroller.state(), ScrollerState::Exiting);
    }

    #[test]
    fn test_rescroll_replaces_pending_hide() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        let first = last_token(&mut scroller);
        scroll(&mut scroller, &mut host, 200.0);
        let second = last_token(&mut scroller);

        scroller.on_timer(first);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        scroller.on_timer(second);
        assert_eq!(scroller.state(), ScrollerState::Exiting);
    }

    #[test]
    fn test_transition_cancels_pending_timer() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        let token = last_token(&mut scroller);

        scroller.set_state(ScrollerState::Dragging);
        scroller.on_timer(token);
        assert_eq!(scroller.state(), ScrollerState::Dragging);
    }

    #[test]
    fn test_fade_sequence() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        let frame = scroller.draw().unwrap();
        assert_eq!(frame.alpha, 225);
        assert_eq!(frame.sprite, SpriteKind::Normal);

        let mut token = last_token(&mut scroller);
        let mut alphas = Vec::new();
        loop {
            scroller.on_timer(token);
            assert_eq!(scroller.state(), ScrollerState::Exiting);
            match scroller.draw() {
                Some(frame) => {
                    alphas.push(frame.alpha);
                    let requests = scroller.take_timer_requests();
                    assert_eq!(requests.len(), 1);
                    assert_eq!(requests[0].delay, Duration::from_millis(17));
                    token = requests[0].token;
                }
                None => break,
            }
        }

        assert_eq!(alphas, vec![200, 175, 150, 125, 100, 75, 50, 25]);
        assert_eq!(scroller.alpha(), 0);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert!(scroller.take_timer_requests().is_empty());
    }

    #[test]
    fn test_hidden_never_reenters_exiting_without_scroll() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        scroller.draw();
        let hide = last_token(&mut scroller);
        scroller.on_timer(hide);

        let mut seen = vec![hide];
        while scroller.draw().is_some() {
            let token = last_token(&mut scroller);
            seen.push(token);
            scroller.on_timer(token);
        }
        assert_eq!(scroller.state(), ScrollerState::Hidden);

        for token in seen {
            scroller.on_timer(token);
            assert_eq!(scroller.state(), ScrollerState::Hidden);
        }

        scroll(&mut scroller, &mut host, 300.0);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert_eq!(scroller.draw().unwrap().alpha, 225);
    }

    #[test]
    fn test_touch_ignored_while_hidden() {
        let (mut scroller, mut host) = setup();
        assert!(!scroller.on_touch(&mut host, TouchEvent::Pressed { x: 12.0, y: 10.0 }));
        assert_eq!(host.fling_aborts, 0);
    }

    #[test]
    fn test_press_outside_thumb_ignored() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);

        assert!(!scroller.on_touch(&mut host, TouchEvent::Pressed { x: 12.0, y: 10.0 }));
        assert!(!scroller.on_touch(&mut host, TouchEvent::Pressed { x: 30.0, y: 80.0 }));
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(!scroller.is_pressed());
    }

    #[test]
    fn test_drag_scrolls_host() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        scroller.take_timer_requests();

        assert!(scroller.on_touch(&mut host, TouchEvent::Pressed { x: 12.0, y: 80.0 }));
        assert_eq!(scroller.state(), ScrollerState::Dragging);
        assert!(scroller.is_pressed());
        assert_eq!(host.fling_aborts, 1);
        assert_eq!(scroller.draw().unwrap().sprite, SpriteKind::Dragging);

        // Past the bottom: clamped to the end of the track, last line reachable
        assert!(scroller.on_touch(&mut host, TouchEvent::Moved { x: 12.0, y: 500.0 }));
        assert_eq!(scroller.thumb_top(), 152.0);
        assert_eq!(host.scrolled_to.last(), Some(&(0.0, 820.0)));

        // Above the top: clamped to zero
        assert!(scroller.on_touch(&mut host, TouchEvent::Moved { x: 12.0, y: -30.0 }));
        assert_eq!(scroller.thumb_top(), 0.0);
        assert_eq!(host.scrolled_to.last(), Some(&(0.0, 0.0)));
        assert_eq!(host.fling_aborts, 3);

        assert!(!scroller.on_touch(&mut host, TouchEvent::Released { x: 12.0, y: -30.0 }));
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(!scroller.is_pressed());
        let requests = scroller.take_timer_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_scroll_ignored_while_dragging() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        scroller.on_touch(&mut host, TouchEvent::Pressed { x: 12.0, y: 80.0 });
        scroller.take_timer_requests();

        scroll(&mut scroller, &mut host, 600.0);
        assert_eq!(scroller.state(), ScrollerState::Dragging);
        assert!(scroller.take_timer_requests().is_empty());
    }

    #[test]
    fn test_move_without_drag_unhandled() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        assert!(!scroller.on_touch(&mut host, TouchEvent::Moved { x: 12.0, y: 90.0 }));
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_cancel_ends_drag() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        scroller.on_touch(&mut host, TouchEvent::Pressed { x: 12.0, y: 80.0 });

        scroller.on_touch(&mut host, TouchEvent::Cancelled);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(!scroller.is_pressed());
    }

    #[test]
    fn test_release_while_exiting_restores_visible() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        let hide = last_token(&mut scroller);
        scroller.on_timer(hide);
        assert_eq!(scroller.state(), ScrollerState::Exiting);

        assert!(!scroller.on_touch(&mut host, TouchEvent::Released { x: 12.0, y: 10.0 }));
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(!scroller.is_pressed());
        let requests = scroller.take_timer_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_release_while_visible_restarts_auto_hide() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        let first = last_token(&mut scroller);

        scroller.on_touch(&mut host, TouchEvent::Released { x: 12.0, y: 10.0 });
        let second = last_token(&mut scroller);
        scroller.on_timer(first);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        scroller.on_timer(second);
        assert_eq!(scroller.state(), ScrollerState::Exiting);
    }

    #[test]
    fn test_cancel_outside_drag_ignored() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 410.0);
        let hide = last_token(&mut scroller);
        scroller.on_timer(hide);

        scroller.on_touch(&mut host, TouchEvent::Cancelled);
        assert_eq!(scroller.state(), ScrollerState::Exiting);
        assert!(scroller.take_timer_requests().is_empty());
    }

    #[test]
    fn test_scroll_during_fade_restores_full_alpha() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        scroller.draw();
        let hide = last_token(&mut scroller);
        scroller.on_timer(hide);

        assert_eq!(scroller.draw().unwrap().alpha, 200);
        let tick = last_token(&mut scroller);
        scroller.on_timer(tick);
        assert_eq!(scroller.draw().unwrap().alpha, 175);
        let stale_tick = last_token(&mut scroller);

        scroll(&mut scroller, &mut host, 300.0);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        let requests = scroller.take_timer_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].delay, Duration::from_millis(2000));

        let frame = scroller.draw().unwrap();
        assert_eq!(frame.alpha, 225);
        assert_eq!(frame.sprite, SpriteKind::Normal);

        scroller.on_timer(stale_tick);
        assert_eq!(scroller.state(), ScrollerState::Visible);
    }

    #[test]
    fn test_fade_completes_without_sprites() {
        let (mut scroller, mut host) = setup();
        scroller.set_bounds(0.0, 200.0);
        scroll(&mut scroller, &mut host, 100.0);
        assert!(scroller.draw().is_none());
        let hide = last_token(&mut scroller);
        scroller.on_timer(hide);

        let mut ticks = 0;
        while scroller.state() == ScrollerState::Exiting {
            assert!(scroller.draw().is_none());
            if let Some(request) = scroller.take_timer_requests().pop() {
                assert_eq!(request.delay, Duration::from_millis(17));
                ticks += 1;
                scroller.on_timer(request.token);
            }
            assert!(ticks <= 8);
        }
        assert_eq!(ticks, 8);
        assert_eq!(scroller.alpha(), 0);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
    }

    #[test]
    fn test_resize_rebuilds_sprites() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        let first = scroller.draw().unwrap();
        assert_eq!(first.generation, 1);

        scroller.set_bounds(24.0, 200.0);
        assert!(!scroller.needs_redraw());

        scroller.set_bounds(32.0, 300.0);
        assert!(scroller.needs_redraw());
        let second = scroller.draw().unwrap();
        assert_eq!(second.generation, 2);
        let sprite = scroller.sprites().get(SpriteKind::Normal).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (32, 48));
    }

    #[test]
    fn test_tint_change_rebuilds_sprites() {
        let (mut scroller, mut host) = setup();
        scroll(&mut scroller, &mut host, 100.0);
        scroller.draw();

        scroller.set_tint(Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(scroller.draw().unwrap().generation, 2);
        let pixel = scroller
            .sprites()
            .get(SpriteKind::Normal)
            .unwrap()
            .pixel(12, 24)
            .unwrap();
        assert_eq!(&pixel[..3], &[255, 0, 0]);
    }
}
