use crate::color::Color;
use crate::error::{Error, Result};
use crate::theme::{ThemePalette, VariantColors};

/// Upper bound on the dominant colors attached to the final palette.
/// The dashboard renders this many swatches; do not change it lightly.
pub const MAX_DOMINANT: usize = 6;

// Lightness deltas and clamps, as fractions of HSL lightness. UI consumers
// depend on the resulting contrast between the two variants.
const LIGHT_ACCENT_RAISE: f32 = 0.20;
const LIGHT_ACCENT_CEILING: f32 = 0.90;
const DARK_PRIMARY_DROP: f32 = 0.10;
const DARK_PRIMARY_FLOOR: f32 = 0.30;
const DARK_ACCENT_DROP: f32 = 0.05;
const DARK_ACCENT_FLOOR: f32 = 0.35;

// Fixed neutrals shared by every generated theme.
const LIGHT_BACKGROUND: Color = Color::new(0xff, 0xff, 0xff);
const LIGHT_FOREGROUND: Color = Color::new(0x0f, 0x17, 0x2a);
const LIGHT_MUTED: Color = Color::new(0xf1, 0xf5, 0xf9);
const LIGHT_BORDER: Color = Color::new(0xe2, 0xe8, 0xf0);
const DARK_BACKGROUND: Color = Color::new(0x02, 0x08, 0x17);
const DARK_FOREGROUND: Color = Color::new(0xf8, 0xfa, 0xfc);
const DARK_MUTED: Color = Color::new(0x0f, 0x17, 0x2a);
const DARK_BORDER: Color = Color::new(0x1e, 0x29, 0x3b);
const MUTED_FOREGROUND: Color = Color::new(0x64, 0x74, 0x8b);

/// Assemble the light and dark theme variants from a ranked dominant-color
/// list.
///
/// The first dominant color becomes `primary`, the second `secondary`
/// (falling back to `primary`), the third the light accent (falling back
/// to a lightened primary). Dark-variant brand colors are darkened copies
/// of their light counterparts; neutral roles are fixed.
pub fn generate_palette(dominant: &[Color]) -> Result<ThemePalette> {
    let Some(&primary) = dominant.first() else {
        return Err(Error::NoColorsExtracted);
    };
    let secondary = dominant.get(1).copied().unwrap_or(primary);
    let light_accent = dominant
        .get(2)
        .copied()
        .unwrap_or_else(|| primary.lighten(LIGHT_ACCENT_RAISE, LIGHT_ACCENT_CEILING));

    let dark_primary = primary.darken(DARK_PRIMARY_DROP, DARK_PRIMARY_FLOOR);
    let dark_secondary = secondary.darken(DARK_PRIMARY_DROP, DARK_PRIMARY_FLOOR);
    let dark_accent = primary.darken(DARK_ACCENT_DROP, DARK_ACCENT_FLOOR);

    let light = VariantColors {
        primary,
        secondary,
        accent: light_accent,
        background: LIGHT_BACKGROUND,
        foreground: LIGHT_FOREGROUND,
        card: LIGHT_BACKGROUND,
        card_foreground: LIGHT_FOREGROUND,
        popover: LIGHT_BACKGROUND,
        popover_foreground: LIGHT_FOREGROUND,
        muted: LIGHT_MUTED,
        muted_foreground: MUTED_FOREGROUND,
        border: LIGHT_BORDER,
        input: LIGHT_BORDER,
        ring: primary,
    };

    let dark = VariantColors {
        primary: dark_primary,
        secondary: dark_secondary,
        accent: dark_accent,
        background: DARK_BACKGROUND,
        foreground: DARK_FOREGROUND,
        card: DARK_BACKGROUND,
        card_foreground: DARK_FOREGROUND,
        popover: DARK_BACKGROUND,
        popover_foreground: DARK_FOREGROUND,
        muted: DARK_MUTED,
        muted_foreground: MUTED_FOREGROUND,
        border: DARK_BORDER,
        input: DARK_BORDER,
        ring: dark_primary,
    };

    Ok(ThemePalette {
        light,
        dark,
        dominant_colors: dominant.iter().take(MAX_DOMINANT).copied().collect(),
    })
}
