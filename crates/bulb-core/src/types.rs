// File: crates/bulb-core/src/types.rs
// Summary: Shared types and constants (default widget size, padding).

/// Default widget width in pixels.
pub const WIDTH: i32 = 64;
/// Default widget height in pixels.
pub const HEIGHT: i32 = 64;

/// Space between the widget bounds and the bulb, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Padding {
    /// Create new padding (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same padding on every side.
    pub const fn uniform(all: u32) -> Self {
        Self::new(all, all, all, all)
    }
    /// Total horizontal padding (left + right), saturating at `u32::MAX`.
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical padding (top + bottom), saturating at `u32::MAX`.
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}
