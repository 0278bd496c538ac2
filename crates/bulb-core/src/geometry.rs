// File: crates/bulb-core/src/geometry.rs
// Summary: Bulb layout derived from widget bounds and padding.

use skia_safe as skia;

use crate::types::Padding;

/// Fraction of the diameter the reflection is shifted up and left by.
pub const REFLECTION_OFFSET: f32 = 0.15;
/// Reflection diameter relative to the bulb diameter.
pub const REFLECTION_SCALE: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left.saturating_add(width), bottom: top.saturating_add(height) }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn to_rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Pixel count as `i32`, clamped to `i32::MAX`.
#[inline]
fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Derived layout of one bulb. Never stored; recomputed for every paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulbGeometry {
    /// Circle diameter in pixels, at least 1.
    pub diameter: i32,
    /// Square of side `diameter` anchored at the top-left padding corner.
    pub canvas: RectI32,
}

impl BulbGeometry {
    pub fn compute(width: i32, height: i32, padding: &Padding) -> Self {
        let bulb_width = width.saturating_sub(to_i32(padding.hsum()));
        let bulb_height = height.saturating_sub(to_i32(padding.vsum()));
        // One pixel short of the smaller side so the outline is not cut off at the edge.
        let diameter = bulb_width.min(bulb_height).saturating_sub(1).max(1);
        let canvas = RectI32::from_ltwh(to_i32(padding.left), to_i32(padding.top), diameter, diameter);
        Self { diameter, canvas }
    }

    /// Bounding box of the bulb circle.
    pub fn oval(&self) -> skia::Rect {
        self.canvas.to_rect()
    }

    pub fn center(&self) -> skia::Point {
        self.oval().center()
    }

    pub fn radius(&self) -> f32 {
        self.diameter as f32 * 0.5
    }

    /// Bounding box of the glass highlight, shifted toward the top-left corner.
    pub fn reflection_oval(&self) -> skia::Rect {
        let d = self.diameter as f32;
        let offset = d * REFLECTION_OFFSET;
        let size = d * REFLECTION_SCALE;
        skia::Rect::from_xywh(
            self.canvas.left as f32 - offset,
            self.canvas.top as f32 - offset,
            size,
            size,
        )
    }
}
