//! Thumb bitmaps.
//!
//! A thumb is described by a [`ThumbDrawable`] (a rounded bar inside the
//! overlay strip) and rasterized once into an RGBA8 [`Sprite`], tinted with
//! the accent color the same way a source-in color filter would: the tint
//! supplies the color, the drawable supplies the alpha.
//!
//! [`SpriteCache`] keeps the normal and dragging sprites until the widget
//! size or tint changes.

use serde::{Deserialize, Serialize};

use crate::{ScrollerError, ScrollerResult};

/// Straight-alpha color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to 8-bit RGBA.
    pub fn to_bytes(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

/// Vector description of a thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbDrawable {
    /// Height the drawable wants to be drawn at
    pub intrinsic_height: u32,
    /// Corner radius of the bar
    pub corner_radius: f32,
    /// Horizontal gap between the strip edges and the bar
    pub inset: f32,
    /// Opacity applied on top of the tint alpha
    pub opacity: f32,
}

impl ThumbDrawable {
    /// The thumb at rest.
    pub fn normal() -> Self {
        Self {
            intrinsic_height: 48,
            corner_radius: 4.0,
            inset: 8.0,
            opacity: 0.7,
        }
    }

    /// The thumb while held.
    pub fn pressed() -> Self {
        Self {
            intrinsic_height: 48,
            corner_radius: 4.0,
            inset: 6.0,
            opacity: 1.0,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.intrinsic_height = height;
        self
    }

    /// Fraction of the pixel centered at `(px, py)` covered by the bar.
    fn coverage(&self, px: f32, py: f32, width: f32, height: f32) -> f32 {
        let inset = self.inset.min((width - 1.0) / 2.0).max(0.0);
        let half_w = width / 2.0 - inset;
        let half_h = height / 2.0;
        let radius = self.corner_radius.min(half_w).min(half_h).max(0.0);

        // Signed distance to a rounded rectangle centered in the sprite
        let qx = (px - width / 2.0).abs() - half_w + radius;
        let qy = (py - height / 2.0).abs() - half_h + radius;
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        let inside = qx.max(qy).min(0.0);
        let distance = outside + inside - radius;

        (0.5 - distance).clamp(0.0, 1.0)
    }
}

/// Which of the two thumb bitmaps to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Normal,
    Dragging,
}

/// A rasterized RGBA8 bitmap, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Sprite {
    /// Rasterizes `drawable` into a `width` x `height` bitmap tinted with `tint`.
    pub fn rasterize(
        drawable: &ThumbDrawable,
        width: u32,
        height: u32,
        tint: Rgba,
    ) -> ScrollerResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScrollerError::InvalidSpriteSize { width, height });
        }

        let [r, g, b, _] = tint.to_bytes();
        let base_alpha = tint.a.clamp(0.0, 1.0) * drawable.opacity.clamp(0.0, 1.0);
        let (w, h) = (width as f32, height as f32);

        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let coverage = drawable.coverage(x as f32 + 0.5, y as f32 + 0.5, w, h);
                let alpha = (base_alpha * coverage * 255.0).round() as u8;
                pixels.extend_from_slice(&[r, g, b, alpha]);
            }
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }
}

/// Lazily built normal/dragging sprites.
#[derive(Debug)]
pub struct SpriteCache {
    normal_drawable: ThumbDrawable,
    dragging_drawable: ThumbDrawable,
    normal: Option<Sprite>,
    dragging: Option<Sprite>,
    generation: u64,
}

impl SpriteCache {
    pub fn new(normal: ThumbDrawable, dragging: ThumbDrawable) -> Self {
        Self {
            normal_drawable: normal,
            dragging_drawable: dragging,
            normal: None,
            dragging: None,
            generation: 0,
        }
    }

    /// Builds whichever sprite is missing. Bumps the generation if anything
    /// was rebuilt.
    pub fn ensure(&mut self, width: u32, height: u32, tint: Rgba) -> ScrollerResult<()> {
        let mut rebuilt = false;
        if self.normal.is_none() {
            self.normal = Some(Sprite::rasterize(&self.normal_drawable, width, height, tint)?);
            rebuilt = true;
        }
        if self.dragging.is_none() {
            self.dragging = Some(Sprite::rasterize(
                &self.dragging_drawable,
                width,
                height,
                tint,
            )?);
            rebuilt = true;
        }
        if rebuilt {
            self.generation += 1;
            tracing::debug!(
                "Rebuilt thumb sprites at {}x{} (generation {})",
                width,
                height,
                self.generation
            );
        }
        Ok(())
    }

    /// Drops both sprites so the next `ensure` rebuilds them.
    pub fn clear(&mut self) {
        self.normal = None;
        self.dragging = None;
    }

    pub fn is_ready(&self) -> bool {
        self.normal.is_some() && self.dragging.is_some()
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Sprite> {
        match kind {
            SpriteKind::Normal => self.normal.as_ref(),
            SpriteKind::Dragging => self.dragging.as_ref(),
        }
    }

    /// Incremented every time the sprites are rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for SpriteCache {
    fn default() -> Self {
        Self::new(ThumbDrawable::normal(), ThumbDrawable::pressed())
    }
}
