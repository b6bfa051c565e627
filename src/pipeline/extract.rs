use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::color::Color;
use crate::error::{Error, Result};

/// A color surviving quantization, with the number of samples that landed
/// in its bucket.
#[derive(Debug, Clone, Copy)]
pub struct DominantColor {
    pub color: Color,
    pub count: u32,
}

/// Tunable knobs for sampling and quantization. The defaults match the
/// dashboard's logo-extraction behavior; only the ranked-list length is
/// part of the output contract.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Visit every Nth pixel of the decoded buffer.
    pub stride: usize,
    /// Round each RGB channel down to a multiple of this bucket size.
    pub bucket_size: u8,
    /// Skip pixels whose alpha is below this value.
    pub alpha_threshold: u8,
    /// Length of the ranked dominant-color list.
    pub max_colors: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            stride: 4,
            bucket_size: 8,
            alpha_threshold: 128,
            max_colors: 10,
        }
    }
}

/// Decode an image file into an RGBA8 buffer.
///
/// Open and format-detection failures map to [`Error::Decode`]; a
/// recognized format whose frame cannot be read maps to
/// [`Error::PixelRead`].
///
/// The reader is built from the file contents rather than
/// `ImageReader::open`, which seeds the format from the path extension.
/// Format recognition must come from the content signature alone, or a
/// misnamed garbage file would be classed as a pixel-read failure.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let file = File::open(path).map_err(|e| Error::Decode(image::ImageError::IoError(e)))?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| Error::Decode(image::ImageError::IoError(e)))?;
    decode_rgba(reader)
}

/// Decode an in-memory image (e.g. a logo already fetched by the caller)
/// into an RGBA8 buffer.
pub fn load_rgba_from_bytes(bytes: &[u8]) -> Result<RgbaImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| Error::Decode(image::ImageError::IoError(e)))?;
    decode_rgba(reader)
}

fn decode_rgba<R: std::io::BufRead + std::io::Seek>(
    reader: ImageReader<R>,
) -> Result<RgbaImage> {
    let format = reader.format();
    let img = reader.decode().map_err(|e| match format {
        Some(_) => Error::PixelRead(e),
        None => Error::Decode(e),
    })?;
    Ok(img.to_rgba8())
}

/// Sample the buffer with a fixed stride, drop near-transparent pixels,
/// quantize the rest into RGB buckets, and rank buckets by frequency.
///
/// The result is sorted by descending sample count, tie-broken by
/// ascending bucket key so the ordering never depends on hash-map
/// iteration order. Ties aside, index 0 is the most frequent color.
pub fn rank_colors(img: &RgbaImage, opts: &ExtractOptions) -> Vec<DominantColor> {
    let stride = opts.stride.max(1);
    let bucket = opts.bucket_size.max(1);

    let mut histogram: HashMap<[u8; 3], u32> = HashMap::new();
    for pixel in img.pixels().step_by(stride) {
        let [r, g, b, a] = pixel.0;
        if a < opts.alpha_threshold {
            continue;
        }
        let key = [(r / bucket) * bucket, (g / bucket) * bucket, (b / bucket) * bucket];
        *histogram.entry(key).or_insert(0) += 1;
    }

    let mut entries: Vec<([u8; 3], u32)> = histogram.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries.truncate(opts.max_colors);

    entries
        .into_iter()
        .map(|([r, g, b], count)| DominantColor {
            color: Color::new(r, g, b),
            count,
        })
        .collect()
}

/// Load an image from disk and return its ranked dominant colors.
pub fn extract_dominant(path: &Path, opts: &ExtractOptions) -> Result<Vec<Color>> {
    let img = load_rgba(path)?;
    Ok(rank_colors(&img, opts).into_iter().map(|d| d.color).collect())
}

/// Decode an in-memory image and return its ranked dominant colors.
pub fn extract_dominant_from_bytes(bytes: &[u8], opts: &ExtractOptions) -> Result<Vec<Color>> {
    let img = load_rgba_from_bytes(bytes)?;
    Ok(rank_colors(&img, opts).into_iter().map(|d| d.color).collect())
}
