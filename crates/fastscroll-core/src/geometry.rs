//! Thumb placement math.
//!
//! All values are pixels. The track is the widget height minus the thumb
//! height; the thumb top always stays inside `[0, track]`.

/// Thumb top for the host's current scroll offset.
///
/// The scrollable range is `scroll_max - host_height + line_height`, so the
/// thumb reaches the bottom of the track when the last line sits at the top
/// of the viewport.
pub fn thumb_top_for_scroll(
    view_height: f32,
    thumb_height: f32,
    scroll_y: f32,
    scroll_max: f32,
    host_height: f32,
    line_height: f32,
) -> f32 {
    let track = view_height - thumb_height;
    let range = (scroll_max - host_height) + line_height;
    if track <= 0.0 || range <= 0.0 {
        return 0.0;
    }
    (track * (scroll_y / range)).round().clamp(0.0, track)
}

/// Thumb top while dragging: centered on the pointer, clamped to the track.
pub fn drag_thumb_top(pointer_y: f32, thumb_height: u32, view_height: f32) -> f32 {
    let top = pointer_y.trunc() - (thumb_height / 2) as f32;
    top.min(view_height - thumb_height as f32).max(0.0)
}

/// Host scroll offset matching a dragged thumb top.
///
/// Returns `None` when the track has no length.
pub fn scroll_target(
    thumb_top: f32,
    view_height: f32,
    thumb_height: f32,
    scroll_max: f32,
    host_height: f32,
    line_height: f32,
) -> Option<f32> {
    let track = view_height - thumb_height;
    if track <= 0.0 {
        return None;
    }
    let fraction = thumb_top / track;
    Some((scroll_max * fraction).trunc() - (fraction * (host_height - line_height)).trunc())
}

/// Whether the content is tall enough, relative to the viewport, to justify
/// showing a thumb.
pub fn is_content_long_enough(scroll_max: f32, host_height: f32, min_ratio: f32) -> bool {
    host_height > 0.0 && scroll_max / host_height >= min_ratio
}
