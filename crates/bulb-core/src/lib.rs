// File: crates/bulb-core/src/lib.rs
// Summary: Core library entry point; exports the LED bulb model, blink timer and renderer.

pub mod blink;
pub mod bulb;
pub mod color;
pub mod error;
pub mod geometry;
pub mod hls;
pub mod render;
pub mod state;
pub mod surface;
pub mod ticker;
pub mod types;

pub use blink::{BlinkTimer, TimerState};
pub use bulb::{BulbMsg, LedBulb};
pub use color::{parse_hex_color, BulbColor};
pub use error::{BulbError, Result};
pub use geometry::BulbGeometry;
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, Frame, RenderOptions};
pub use state::BulbState;
pub use ticker::{Ticker, TickerSlot};
pub use types::Padding;

/// Re-export so callers can name colors without a direct skia-safe dependency.
pub use skia_safe::Color;
