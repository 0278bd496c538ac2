// File: crates/bulb-core/src/render.rs
// Summary: Bulb paint pipeline: layer plan from state + geometry, Skia rasterization, and
// RGBA/PNG output through a scoped offscreen surface.
// Notes:
// - Paint order is significant. Base fill, glow, clip to the circle, reflection, then the
//   clip is reset to the canvas square before the (lit-only) outline.
// - Every paint is anti-aliased; the raster surface is never quantized before read-back.

use skia_safe as skia;

use crate::color::{self, OUTLINE, OUTLINE_WIDTH, REFLECTION};
use crate::error::Result;
use crate::geometry::BulbGeometry;
use crate::state::BulbState;
use crate::surface::with_offscreen;
use crate::types::{Padding, HEIGHT, WIDTH};

pub use crate::surface::Frame;

/// Widget bounds and surface settings for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub padding: Padding,
    /// Surface clear color; transparent lets the host background show through.
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Padding::default(),
            background: skia::Color::TRANSPARENT,
        }
    }
}

impl RenderOptions {
    pub fn geometry(&self) -> BulbGeometry {
        BulbGeometry::compute(self.width, self.height, &self.padding)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(skia::Color),
    /// Gradient from the oval's center out to its edge.
    Radial { center: skia::Color, edge: skia::Color },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layer {
    Fill { oval: skia::Rect, brush: Brush },
    /// Replace the clip with the given circle.
    ClipOval(skia::Rect),
    /// Replace the clip with the given rectangle.
    ClipRect(skia::Rect),
    Stroke { oval: skia::Rect, color: skia::Color, width: f32 },
}

/// Build the paint plan for `state` laid out by `geom`.
pub fn layers(state: &BulbState, geom: &BulbGeometry) -> Vec<Layer> {
    let oval = geom.oval();
    let glow = state.on_glow_color();

    let mut plan = vec![
        Layer::Fill { oval, brush: Brush::Solid(state.off_base_color()) },
        Layer::Fill { oval, brush: Brush::Radial { center: glow, edge: color::transparent(glow) } },
        Layer::ClipOval(oval),
        Layer::Fill {
            oval: geom.reflection_oval(),
            brush: Brush::Radial { center: REFLECTION, edge: color::transparent(REFLECTION) },
        },
        Layer::ClipRect(oval),
    ];
    // Off state keeps a borderless silhouette.
    if state.is_on() {
        plan.push(Layer::Stroke { oval, color: OUTLINE, width: OUTLINE_WIDTH });
    }
    plan
}

/// Draw `plan` onto `canvas`. The canvas clip is restored afterwards.
pub fn paint_layers(canvas: &skia::Canvas, plan: &[Layer]) {
    let base = canvas.save_count();
    for layer in plan {
        match *layer {
            Layer::Fill { oval, brush } => {
                if let Some(paint) = fill_paint(oval, brush) {
                    canvas.draw_oval(oval, &paint);
                }
            }
            Layer::ClipOval(oval) => {
                canvas.restore_to_count(base);
                canvas.save();
                canvas.clip_rrect(skia::RRect::new_oval(oval), skia::ClipOp::Intersect, true);
            }
            Layer::ClipRect(rect) => {
                canvas.restore_to_count(base);
                canvas.save();
                canvas.clip_rect(rect, skia::ClipOp::Intersect, false);
            }
            Layer::Stroke { oval, color, width } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(width);
                paint.set_color(color);
                canvas.draw_oval(oval, &paint);
            }
        }
    }
    canvas.restore_to_count(base);
}

fn fill_paint(oval: skia::Rect, brush: Brush) -> Option<skia::Paint> {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    match brush {
        Brush::Solid(color) => {
            paint.set_color(color);
        }
        Brush::Radial { center, edge } => {
            let colors = [center, edge];
            let radius = oval.width().min(oval.height()) * 0.5;
            let Some(shader) = skia::Shader::radial_gradient(
                oval.center(),
                radius,
                &colors[..],
                None,
                skia::TileMode::Clamp,
                None,
                None,
            ) else {
                log::trace!("skipping degenerate radial gradient: radius={radius}");
                return None;
            };
            paint.set_shader(shader);
        }
    }
    Some(paint)
}

/// Clear the canvas and paint `state` with the bounds in `opts`.
pub fn render_layers(canvas: &skia::Canvas, state: &BulbState, opts: &RenderOptions) {
    canvas.clear(opts.background);
    let geom = opts.geometry();
    log::trace!(
        "render bulb: {}x{} diameter={} on={}",
        opts.width,
        opts.height,
        geom.diameter,
        state.is_on()
    );
    paint_layers(canvas, &layers(state, &geom));
}

/// Rasterize an explicit layer plan (no state involved) into premultiplied RGBA.
pub fn rasterize(plan: &[Layer], opts: &RenderOptions) -> Result<Frame> {
    with_offscreen(opts.width, opts.height, |off| {
        let canvas = off.canvas();
        canvas.clear(opts.background);
        paint_layers(canvas, plan);
        off.read_rgba8(skia::AlphaType::Premul)
    })
}

/// Render into premultiplied RGBA, ready to be composited over the host background.
pub fn render_to_rgba8(state: &BulbState, opts: &RenderOptions) -> Result<Frame> {
    with_offscreen(opts.width, opts.height, |off| {
        render_layers(off.canvas(), state, opts);
        off.read_rgba8(skia::AlphaType::Premul)
    })
}

/// Render and encode as PNG bytes.
pub fn render_to_png_bytes(state: &BulbState, opts: &RenderOptions) -> Result<Vec<u8>> {
    with_offscreen(opts.width, opts.height, |off| {
        render_layers(off.canvas(), state, opts);
        off.encode_png()
    })
}

/// Render to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(
    state: &BulbState,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let data = render_to_png_bytes(state, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, data)?;
    Ok(())
}
