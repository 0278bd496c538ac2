// File: crates/bulb-core/build.rs
// Summary: Build script to link the Windows system libraries the Skia raster backend needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager queries the registry (RegOpenKeyExW, RegQueryInfoKeyW, ...)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
