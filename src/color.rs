use palette::{FromColor, Hsl, IntoColor, Srgb};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components and provides conversions to HSL for tonal
/// adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(hex.to_string()));
        }
        let r = u8::from_str_radix(&digits[0..2], 16)
            .map_err(|_| Error::InvalidHex(hex.to_string()))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .map_err(|_| Error::InvalidHex(hex.to_string()))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .map_err(|_| Error::InvalidHex(hex.to_string()))?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to HSL. Achromatic colors come back with hue and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        srgb_f32.into_color()
    }

    /// Create from HSL.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(hsl);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// Raise HSL lightness by `amount`, capped at `ceiling`. Both are
    /// fractions in [0, 1]; a color already above the ceiling is pulled
    /// down to it.
    pub fn lighten(self, amount: f32, ceiling: f32) -> Color {
        let mut hsl = self.to_hsl();
        hsl.lightness = (hsl.lightness + amount).min(ceiling);
        Color::from_hsl(hsl)
    }

    /// Lower HSL lightness by `amount`, floored at `floor`.
    pub fn darken(self, amount: f32, floor: f32) -> Color {
        let mut hsl = self.to_hsl();
        hsl.lightness = (hsl.lightness - amount).max(floor);
        Color::from_hsl(hsl)
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(D::Error::custom)
    }
}
