// File: crates/bulb-core/src/hls.rs
// Summary: Integer HLS color model used to derive the darker bulb shades.
// Notes:
// - Hue, luminosity and saturation live in 0..=HLS_MAX (240), the classic Windows
//   HLS scale. Conversions round the same way the system control painter does, so
//   derived shades match what a native indicator would show.

use skia_safe as skia;

/// Upper bound of the hue/luminosity/saturation scale.
pub const HLS_MAX: i32 = 240;
/// Upper bound of an RGB channel.
pub const RGB_MAX: i32 = 255;
/// Hue assigned to achromatic colors (greys).
pub const UNDEFINED_HUE: i32 = HLS_MAX * 2 / 3;

/// Per-mille luminosity adjustment that defines the "zero" end of the darkening ramp.
const SHADOW_ADJ: i32 = -333;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hls {
    pub hue: i32,
    pub luminosity: i32,
    pub saturation: i32,
}

impl Hls {
    /// Convert an RGB color (alpha ignored) into HLS space.
    pub fn from_color(color: skia::Color) -> Self {
        let r = color.r() as i32;
        let g = color.g() as i32;
        let b = color.b() as i32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let luminosity = (sum * HLS_MAX + RGB_MAX) / (2 * RGB_MAX);

        let dif = max - min;
        if dif == 0 {
            return Self { hue: UNDEFINED_HUE, luminosity, saturation: 0 };
        }

        let saturation = if luminosity <= HLS_MAX / 2 {
            (dif * HLS_MAX + sum / 2) / sum
        } else {
            (dif * HLS_MAX + (2 * RGB_MAX - sum) / 2) / (2 * RGB_MAX - sum)
        };

        let delta = |c: i32| ((max - c) * (HLS_MAX / 6) + dif / 2) / dif;
        let (r_delta, g_delta, b_delta) = (delta(r), delta(g), delta(b));

        let mut hue = if r == max {
            b_delta - g_delta
        } else if g == max {
            HLS_MAX / 3 + r_delta - b_delta
        } else {
            (2 * HLS_MAX) / 3 + g_delta - r_delta
        };
        if hue < 0 {
            hue += HLS_MAX;
        }
        if hue > HLS_MAX {
            hue -= HLS_MAX;
        }

        Self { hue, luminosity, saturation }
    }

    /// Convert back to an opaque RGB color.
    pub fn to_color(self) -> skia::Color {
        let Self { hue, luminosity, saturation } = self;
        if saturation == 0 {
            let v = channel(luminosity * RGB_MAX / HLS_MAX);
            return skia::Color::from_argb(255, v, v, v);
        }

        let magic2 = if luminosity <= HLS_MAX / 2 {
            (luminosity * (HLS_MAX + saturation) + HLS_MAX / 2) / HLS_MAX
        } else {
            luminosity + saturation - (luminosity * saturation + HLS_MAX / 2) / HLS_MAX
        };
        let magic1 = 2 * luminosity - magic2;

        let scale = |h: i32| channel((hue_to_rgb(magic1, magic2, h) * RGB_MAX + HLS_MAX / 2) / HLS_MAX);
        skia::Color::from_argb(
            255,
            scale(hue + HLS_MAX / 3),
            scale(hue),
            scale(hue - HLS_MAX / 3),
        )
    }

    /// Luminosity scaled by `n` per mille; negative `n` moves toward black.
    fn scaled_luminosity(&self, n: i32) -> i32 {
        if n == 0 {
            self.luminosity
        } else if n > 0 {
            (self.luminosity * (1000 - n) + (HLS_MAX + 1) * n) / 1000
        } else {
            (self.luminosity * (n + 1000)) / 1000
        }
    }

    /// Darken by `fraction` of the way from the shadow reference down to black.
    /// `0.0` yields the shadow reference itself, `1.0` yields black.
    pub fn darker(self, fraction: f32) -> skia::Color {
        let one_lum = 0;
        let zero_lum = self.scaled_luminosity(SHADOW_ADJ);
        let luminosity = zero_lum - ((zero_lum - one_lum) as f32 * fraction) as i32;
        Hls { luminosity, ..self }.to_color()
    }
}

fn hue_to_rgb(n1: i32, n2: i32, mut hue: i32) -> i32 {
    if hue < 0 {
        hue += HLS_MAX;
    }
    if hue > HLS_MAX {
        hue -= HLS_MAX;
    }

    if hue < HLS_MAX / 6 {
        n1 + ((n2 - n1) * hue + HLS_MAX / 12) / (HLS_MAX / 6)
    } else if hue < HLS_MAX / 2 {
        n2
    } else if hue < (HLS_MAX * 2) / 3 {
        n1 + ((n2 - n1) * ((HLS_MAX * 2) / 3 - hue) + HLS_MAX / 12) / (HLS_MAX / 6)
    } else {
        n1
    }
}

#[inline]
fn channel(v: i32) -> u8 {
    v.clamp(0, RGB_MAX) as u8
}

/// First darkening step of a base color.
pub fn dark(color: skia::Color) -> skia::Color {
    Hls::from_color(color).darker(0.5)
}

/// Deepest darkening step of a base color.
pub fn dark_dark(color: skia::Color) -> skia::Color {
    Hls::from_color(color).darker(1.0)
}
