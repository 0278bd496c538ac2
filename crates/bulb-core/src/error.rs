// File: crates/bulb-core/src/error.rs
// Summary: Error type for the fallible edges: raster surfaces, encoding, file and thread I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BulbError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read pixels back from raster surface")]
    ReadPixels,
    #[error("PNG encode failed")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to spawn ticker thread")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T, E = BulbError> = std::result::Result<T, E>;
