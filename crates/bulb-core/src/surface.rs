// File: crates/bulb-core/src/surface.rs
// Summary: Scoped offscreen raster surface (acquire, render, read back, release on drop).

use std::io::Cursor;

use skia_safe as skia;

use crate::error::{BulbError, Result};

/// RGBA8 pixels read back from an offscreen surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    /// Bytes per row.
    pub stride: usize,
}

impl Frame {
    /// RGBA of the pixel at (x, y), or `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// CPU raster surface owned for the duration of one paint pass.
pub struct Offscreen {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Offscreen {
    /// Allocate a surface; dimensions below one pixel are raised to one.
    pub fn acquire(width: i32, height: i32) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(BulbError::Surface { width, height })?;
        log::trace!("acquired {width}x{height} offscreen surface");
        Ok(Self { surface, width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Copy the surface into tightly packed RGBA8 with the requested alpha encoding.
    pub fn read_rgba8(&mut self, alpha: skia::AlphaType) -> Result<Frame> {
        let (width, height) = (self.width(), self.height());
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            alpha,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(BulbError::ReadPixels);
        }
        Ok(Frame { pixels, width, height, stride })
    }

    /// Encode the surface contents as PNG (straight alpha).
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let frame = self.read_rgba8(skia::AlphaType::Unpremul)?;
        let img = image::RgbaImage::from_raw(frame.width as u32, frame.height as u32, frame.pixels)
            .ok_or(BulbError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

impl Drop for Offscreen {
    fn drop(&mut self) {
        log::trace!("released {}x{} offscreen surface", self.width, self.height);
    }
}

/// Acquire a surface, hand it to `f`, and release it whatever `f` returns.
pub fn with_offscreen<T>(
    width: i32,
    height: i32,
    f: impl FnOnce(&mut Offscreen) -> Result<T>,
) -> Result<T> {
    let mut offscreen = Offscreen::acquire(width, height)?;
    f(&mut offscreen)
}
