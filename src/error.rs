//! Error types for the hueforge library.

use thiserror::Error;

/// Result type alias for hueforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by extraction and palette generation.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally. The caller decides whether to re-invoke.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened or its format was not recognized.
    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),

    /// The format was recognized but the pixel data could not be read
    /// (truncated or corrupt frame).
    #[error("image decoded but its pixel data could not be read")]
    PixelRead(#[source] image::ImageError),

    /// Sampling produced zero usable opaque pixels, so no palette could
    /// be derived.
    #[error("no colors could be extracted from the image")]
    NoColorsExtracted,

    /// A hex color string did not match `#rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Theme output could not be written.
    #[error("failed to write theme")]
    Io(#[from] std::io::Error),

    /// Theme serialization failed.
    #[error("failed to serialize theme")]
    Json(#[from] serde_json::Error),
}
