//! The scroller overlay strip.
//!
//! Painting and input are separate layers. [`ThumbImages`] turns the
//! scroller's sprites into image handles for the view to draw.
//! [`InputOverlay`] is an invisible canvas that turns pointer events into
//! [`TouchEvent`]s relative to the strip and reports the strip size.

use fastscroll_core::{SpriteCache, SpriteKind, TouchEvent};
use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, event};
use iced::widget::image;
use iced::{Point, Rectangle, Renderer, Size, Theme};

use crate::app::Message;

/// Image handles for the current sprite generation.
#[derive(Debug, Default)]
pub struct ThumbImages {
    generation: u64,
    normal: Option<image::Handle>,
    dragging: Option<image::Handle>,
}

impl ThumbImages {
    /// Re-uploads the sprites if the cache rebuilt them.
    pub fn sync(&mut self, sprites: &SpriteCache) {
        if self.generation == sprites.generation() && self.normal.is_some() {
            return;
        }
        let handle = |kind| {
            sprites.get(kind).map(|sprite| {
                image::Handle::from_rgba(sprite.width(), sprite.height(), sprite.pixels().to_vec())
            })
        };
        self.normal = handle(SpriteKind::Normal);
        self.dragging = handle(SpriteKind::Dragging);
        self.generation = sprites.generation();
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&image::Handle> {
        match kind {
            SpriteKind::Normal => self.normal.as_ref(),
            SpriteKind::Dragging => self.dragging.as_ref(),
        }
    }
}

/// Invisible input layer over the scroller strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOverlay {
    /// Thumb bounds relative to the strip, if a thumb is painted
    pub thumb: Option<Rectangle>,
}

#[derive(Debug, Default)]
pub struct OverlayState {
    size: Option<Size>,
    pressed: bool,
}

impl InputOverlay {
    pub fn new(thumb: Option<Rectangle>) -> Self {
        Self { thumb }
    }

    fn is_over_thumb(&self, local: Point) -> bool {
        self.thumb.is_some_and(|thumb| thumb.contains(local))
    }
}

/// Converts a canvas event into strip-relative touch input.
///
/// Moves and releases are only reported while a press that started inside
/// the strip is held.
pub fn translate(
    event: &canvas::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    pressed: bool,
) -> Option<TouchEvent> {
    let local = |p: Point| Point::new(p.x - bounds.x, p.y - bounds.y);

    match event {
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
            .position_in(bounds)
            .map(|p| TouchEvent::Pressed { x: p.x, y: p.y }),
        canvas::Event::Mouse(mouse::Event::CursorMoved { position }) if pressed => {
            let p = local(*position);
            Some(TouchEvent::Moved { x: p.x, y: p.y })
        }
        canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if pressed => {
            let p = cursor.position().map(local).unwrap_or(Point::ORIGIN);
            Some(TouchEvent::Released { x: p.x, y: p.y })
        }
        canvas::Event::Mouse(mouse::Event::CursorLeft) if pressed => Some(TouchEvent::Cancelled),
        canvas::Event::Touch(touch::Event::FingerPressed { position, .. })
            if bounds.contains(*position) =>
        {
            let p = local(*position);
            Some(TouchEvent::Pressed { x: p.x, y: p.y })
        }
        canvas::Event::Touch(touch::Event::FingerMoved { position, .. }) if pressed => {
            let p = local(*position);
            Some(TouchEvent::Moved { x: p.x, y: p.y })
        }
        canvas::Event::Touch(touch::Event::FingerLifted { position, .. }) if pressed => {
            let p = local(*position);
            Some(TouchEvent::Released { x: p.x, y: p.y })
        }
        canvas::Event::Touch(touch::Event::FingerLost { .. }) if pressed => {
            Some(TouchEvent::Cancelled)
        }
        _ => None,
    }
}

impl canvas::Program<Message> for InputOverlay {
    type State = OverlayState;

    fn update(
        &self,
        state: &mut OverlayState,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        match translate(&event, bounds, cursor, state.pressed) {
            Some(touch) => {
                let status = match touch {
                    TouchEvent::Pressed { x, y } => {
                        if !self.is_over_thumb(Point::new(x, y)) {
                            // Not ours: let the editor take the click.
                            return (event::Status::Ignored, None);
                        }
                        state.pressed = true;
                        event::Status::Captured
                    }
                    TouchEvent::Moved { .. } => event::Status::Captured,
                    TouchEvent::Released { .. } | TouchEvent::Cancelled => {
                        state.pressed = false;
                        event::Status::Ignored
                    }
                };
                (status, Some(Message::Overlay(touch)))
            }
            None if state.size != Some(bounds.size()) => {
                state.size = Some(bounds.size());
                (event::Status::Ignored, Some(Message::OverlayResized(bounds.size())))
            }
            None => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &OverlayState,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        state: &OverlayState,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.pressed {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(p) if self.is_over_thumb(p) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}
