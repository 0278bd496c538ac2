// File: crates/window-demo/src/main.rs
// Summary: Windowed host for one LED bulb: renders to RGBA, composites over the window
// background and blits via winit + softbuffer. Click toggles, B blinks, C cycles color.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use bulb_core::{parse_hex_color, Color, Frame, LedBulb, Padding, RenderOptions};
use clap::Parser;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

const PALETTE: [Color; 5] = [
    Color::from_argb(255, 153, 255, 54),
    Color::from_argb(255, 255, 48, 48),
    Color::from_argb(255, 255, 176, 0),
    Color::from_argb(255, 32, 144, 255),
    Color::from_argb(255, 255, 255, 255),
];

#[derive(Parser, Debug)]
#[command(name = "bulb-window-demo", about = "Interactive LED bulb")]
struct Args {
    /// Initial window size in logical pixels
    #[arg(short, long, default_value_t = 160.0)]
    size: f64,
    /// Padding on every side in pixels
    #[arg(short, long, default_value_t = 8)]
    padding: u32,
    /// Initial base color as #RRGGBB or #AARRGGBB
    #[arg(short, long, value_parser = parse_color)]
    color: Option<Color>,
    /// Interval used when blinking is switched on, in milliseconds
    #[arg(short, long, default_value_t = 500)]
    blink_ms: i32,
    /// Window background as #RRGGBB
    #[arg(long, value_parser = parse_color, default_value = "#202024")]
    background: Color,
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

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("LED Bulb")
        .with_inner_size(winit::dpi::LogicalSize::new(args.size, args.size))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut bulb = LedBulb::with_color(args.color.unwrap_or(PALETTE[0]));
    let mut palette_idx = 0usize;
    // Current blink setting, flipped between 0 and `blink_ms` by the B key.
    let mut blink = 0i32;
    let mut size = window.inner_size();
    let padding = Padding::uniform(args.padding);
    let background = args.background;
    log::info!("Click toggles the bulb, B toggles blinking ({} ms), C cycles colors", args.blink_ms);

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    cf.set_exit();
                    return;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    bulb.invalidate();
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    bulb.toggle();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::B => {
                        blink = if blink == 0 { args.blink_ms } else { 0 };
                        bulb.blink(blink);
                        log::info!("blink interval: {blink} ms");
                    }
                    VirtualKeyCode::C => {
                        palette_idx = (palette_idx + 1) % PALETTE.len();
                        bulb.set_color(PALETTE[palette_idx]);
                    }
                    VirtualKeyCode::Escape => {
                        cf.set_exit();
                        return;
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                // Input can wake the loop after a deadline has passed; poll on every pass.
                bulb.poll_timer(Instant::now());
                if bulb.take_invalidation() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let opts = RenderOptions {
                    width: size.width.max(1) as i32,
                    height: size.height.max(1) as i32,
                    padding,
                    ..RenderOptions::default()
                };
                if let Err(e) = present(&mut surface, &bulb, &opts, background) {
                    log::error!("present failed: {e:#}");
                }
            }
            _ => {}
        }

        match bulb.next_deadline() {
            Some(due) => cf.set_wait_until(due),
            None => cf.set_wait(),
        }
    });
}

/// Render the bulb and blit it, composited over `background`, into the window buffer.
fn present(
    surface: &mut softbuffer::Surface,
    bulb: &LedBulb,
    opts: &RenderOptions,
    background: Color,
) -> Result<()> {
    let frame = bulb.render(opts)?;
    let (Some(w), Some(h)) = (NonZeroU32::new(frame.width as u32), NonZeroU32::new(frame.height as u32)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    composite_over(&frame, background, &mut buffer);
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

/// Premultiplied source-over onto an opaque background, packed as 0RGB.
fn composite_over(frame: &Frame, background: Color, out: &mut [u32]) {
    let bg = [background.r() as u32, background.g() as u32, background.b() as u32];
    for (dst, px) in out.iter_mut().zip(frame.pixels.chunks_exact(4)) {
        let inv = 255 - px[3] as u32;
        let c = |i: usize| (px[i] as u32 + (bg[i] * inv + 127) / 255).min(255);
        *dst = (c(0) << 16) | (c(1) << 8) | c(2);
    }
}
