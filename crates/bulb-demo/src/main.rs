// File: crates/bulb-demo/src/main.rs
// Summary: Renders each configured color lit and unlit, plus a simulated blink sequence, to PNGs.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bulb_core::{parse_hex_color, render_to_png, BulbMsg, Color, LedBulb, Padding, RenderOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bulb-demo", about = "Render LED bulb PNGs")]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,
    /// Widget width and height in pixels
    #[arg(short, long, default_value_t = 64)]
    size: i32,
    /// Padding on every side in pixels
    #[arg(short, long, default_value_t = 4)]
    padding: u32,
    /// Base colors as #RRGGBB or #AARRGGBB
    #[arg(short, long, value_parser = parse_color, default_values = ["#99FF36", "#FF3030", "#FFB000", "#2090FF"])]
    color: Vec<Color>,
    /// Blink interval for the sequence frames, in milliseconds
    #[arg(long, default_value_t = 500)]
    blink_ms: i32,
    /// Number of blink frames to render
    #[arg(long, default_value_t = 4)]
    frames: u32,
}

fn parse_color(s: &str) -> Result<Color, String> {
    parse_hex_color(s).map_err(|e| e.to_string())
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let opts = RenderOptions {
        width: args.size,
        height: args.size,
        padding: Padding::uniform(args.padding),
        ..RenderOptions::default()
    };

    for color in &args.color {
        let mut bulb = LedBulb::with_color(*color);
        for on in [true, false] {
            bulb.set_on(on);
            let out = out_name(&args.out, *color, if on { "on" } else { "off" });
            render_to_png(bulb.state(), &opts, &out)
                .with_context(|| format!("failed to render '{}'", out.display()))?;
            log::info!("Wrote {}", out.display());
        }
    }

    render_blink_sequence(&args, &opts)?;
    Ok(())
}

/// Drive the blink timer with a simulated clock and write one frame per interval.
fn render_blink_sequence(args: &Args, opts: &RenderOptions) -> Result<()> {
    let Some(&color) = args.color.first() else { return Ok(()) };
    let mut bulb = LedBulb::with_color(color);
    let start = Instant::now();
    bulb.update_at(BulbMsg::Blink(args.blink_ms), start);

    let step = Duration::from_millis(args.blink_ms.max(1) as u64);
    for frame in 0..args.frames {
        let now = start + step * frame;
        bulb.poll_timer(now);
        if !bulb.take_invalidation() && frame > 0 {
            log::warn!("frame {frame}: no tick was due");
        }
        let out = out_name(&args.out, color, &format!("blink_{frame:02}"));
        render_to_png(bulb.state(), opts, &out)
            .with_context(|| format!("failed to render '{}'", out.display()))?;
        log::info!("Wrote {} (on={})", out.display(), bulb.is_on());
    }
    Ok(())
}

/// Produce output file name like target/out/bulb_<rrggbb>_<suffix>.png
fn out_name(dir: &Path, color: Color, suffix: &str) -> PathBuf {
    dir.join(format!("bulb_{:02x}{:02x}{:02x}_{suffix}.png", color.r(), color.g(), color.b()))
}
