// File: crates/bulb-core/src/color.rs
// Summary: Bulb color set (base + derived shades), fixed layer colors and hex parsing.

use skia_safe as skia;
use thiserror::Error;

use crate::hls;

/// Base color a new bulb starts with (a bright lime green).
pub const DEFAULT_BASE: skia::Color = skia::Color::from_argb(255, 153, 255, 54);
/// Alpha of the residual glow shown while the bulb is off.
pub const OFF_GLOW_ALPHA: u8 = 150;
/// Center color of the glass reflection highlight.
pub const REFLECTION: skia::Color = skia::Color::from_argb(180, 255, 255, 255);
/// Outline drawn around a lit bulb.
pub const OUTLINE: skia::Color = skia::Color::from_argb(85, 0, 0, 0);
/// Outline stroke width in pixels.
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Base color plus its two darker shades.
/// Contract: `dark` and `dark_dark` are always derived from the current `base`;
/// the only way to change them is to build a new `BulbColor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulbColor {
    base: skia::Color,
    dark: skia::Color,
    dark_dark: skia::Color,
}

impl BulbColor {
    pub fn new(base: skia::Color) -> Self {
        Self { base, dark: hls::dark(base), dark_dark: hls::dark_dark(base) }
    }

    pub fn base(&self) -> skia::Color { self.base }
    pub fn dark(&self) -> skia::Color { self.dark }
    pub fn dark_dark(&self) -> skia::Color { self.dark_dark }
}

impl Default for BulbColor {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl From<skia::Color> for BulbColor {
    fn from(base: skia::Color) -> Self {
        Self::new(base)
    }
}

/// Same RGB with alpha replaced.
#[inline]
pub fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
    color.with_a(alpha)
}

/// Same RGB, fully transparent. Used as the outer stop of radial gradients.
#[inline]
pub fn transparent(color: skia::Color) -> skia::Color {
    color.with_a(0)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digit in '{0}'")]
    Digit(String),
}

/// Parse `#RRGGBB` or `#AARRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(s: &str) -> Result<skia::Color, ColorParseError> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 && hex.len() != 8 {
        return Err(ColorParseError::Length(hex.len()));
    }
    // from_str_radix tolerates a leading sign, so check the digits first.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::Digit(hex.to_string()));
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::Digit(hex.to_string()))?;
    Ok(if hex.len() == 6 {
        skia::Color::new(0xFF00_0000 | value)
    } else {
        skia::Color::new(value)
    })
}
