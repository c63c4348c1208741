use fastscroll_core::{TimerToken, TouchEvent};
use iced::Size;
use iced::time::Instant;
use iced::widget::text_editor;

#[derive(Debug, Clone)]
pub enum Message {
    // Editor
    EditorAction(text_editor::Action),

    // Scroller overlay
    Overlay(TouchEvent),
    OverlayResized(Size),

    // Scheduled scroller callback elapsed
    TimerFired(TimerToken),

    // Window
    WindowResized(Size),

    // Momentum scrolling frame
    FlingTick(Instant),
}
