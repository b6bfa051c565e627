//! hueforge turns a logo image into a deterministic light/dark UI theme
//! palette.
//!
//! The pipeline decodes the image to an RGBA buffer, samples it with a
//! fixed stride, drops near-transparent pixels, quantizes the rest into
//! RGB buckets, ranks the buckets by frequency, and derives the two theme
//! variants from the top-ranked colors via HSL lightness adjustments.
//!
//! Each call is independent and side-effect-free; concurrent extractions
//! never share state. Errors are terminal for the call that produced
//! them — retrying is the caller's decision.

pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod theme;

use std::path::Path;

pub use color::Color;
pub use error::{Error, Result};
pub use pipeline::extract::ExtractOptions;
pub use theme::{ColorRole, ThemePalette, VariantColors};

/// Run the full pipeline on an image file: decode, sample, rank, and
/// derive the light/dark palette.
pub fn extract_palette(path: &Path, opts: &ExtractOptions) -> Result<ThemePalette> {
    let dominant = pipeline::extract::extract_dominant(path, opts)?;
    pipeline::generate::generate_palette(&dominant)
}

/// Run the full pipeline on an in-memory image.
pub fn extract_palette_from_bytes(bytes: &[u8], opts: &ExtractOptions) -> Result<ThemePalette> {
    let dominant = pipeline::extract::extract_dominant_from_bytes(bytes, opts)?;
    pipeline::generate::generate_palette(&dominant)
}
