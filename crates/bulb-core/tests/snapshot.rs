// File: crates/bulb-core/tests/snapshot.rs
// Purpose: Golden snapshots of the lit and unlit bulb with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use bulb_core::{render_to_png_bytes, BulbState, Color, Padding, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(on: bool, base: Color) -> Vec<u8> {
    let mut state = BulbState::default();
    state.set_color(base);
    state.set_on(on);
    let opts = RenderOptions { width: 48, height: 48, padding: Padding::uniform(2), ..RenderOptions::default() };
    render_to_png_bytes(&state, &opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_lit_bulb() {
    let bytes = render_bytes(true, bulb_core::color::DEFAULT_BASE);
    write_or_compare(&snapshot_path("lit_default.png"), &bytes);
}

#[test]
fn golden_unlit_bulb() {
    let bytes = render_bytes(false, bulb_core::color::DEFAULT_BASE);
    write_or_compare(&snapshot_path("unlit_default.png"), &bytes);
}

#[test]
fn golden_red_bulb() {
    let bytes = render_bytes(true, Color::from_argb(255, 255, 0, 0));
    write_or_compare(&snapshot_path("lit_red.png"), &bytes);
}
