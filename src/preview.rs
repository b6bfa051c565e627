//! Colored terminal preview of a generated palette.

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::theme::{ColorRole, ThemePalette, VariantColors};

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Choose black or white foreground for readable text on the given
/// background.
fn contrast_fg(c: Color) -> TermColor {
    if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

fn labeled_swatch(c: Color) -> String {
    let label = format!(" {} ", c.to_hex());
    label.on(term_color(c)).with(contrast_fg(c)).to_string()
}

fn print_variant(name: &str, variant: &VariantColors) {
    println!("\n{name}:");
    for role in ColorRole::ALL {
        let color = variant.get(role);
        println!("  {} {}", labeled_swatch(color), role.as_str());
    }
}

/// Print dominant-color swatches and both theme variants to stdout.
pub fn print_palette(palette: &ThemePalette) {
    println!("Dominant colors:");
    let row: Vec<String> = palette
        .dominant_colors
        .iter()
        .map(|&c| labeled_swatch(c))
        .collect();
    println!("  {}", row.join(" "));

    print_variant("Light", &palette.light);
    print_variant("Dark", &palette.dark);
}
