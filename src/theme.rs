use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;

/// The closed set of semantic roles a theme variant assigns colors to.
///
/// These mirror the theme object the dashboard stores; [`ColorRole::as_str`]
/// yields the camelCase names the serialized form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Muted,
    MutedForeground,
    Border,
    Input,
    Ring,
}

impl ColorRole {
    pub const ALL: [ColorRole; 14] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Card,
        ColorRole::CardForeground,
        ColorRole::Popover,
        ColorRole::PopoverForeground,
        ColorRole::Muted,
        ColorRole::MutedForeground,
        ColorRole::Border,
        ColorRole::Input,
        ColorRole::Ring,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Background => "background",
            ColorRole::Foreground => "foreground",
            ColorRole::Card => "card",
            ColorRole::CardForeground => "cardForeground",
            ColorRole::Popover => "popover",
            ColorRole::PopoverForeground => "popoverForeground",
            ColorRole::Muted => "muted",
            ColorRole::MutedForeground => "mutedForeground",
            ColorRole::Border => "border",
            ColorRole::Input => "input",
            ColorRole::Ring => "ring",
        }
    }
}

/// One theme variant: a complete role-to-color assignment. The struct is
/// closed; there is no way to attach extra roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VariantColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub card_foreground: Color,
    pub popover: Color,
    pub popover_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub border: Color,
    pub input: Color,
    pub ring: Color,
}

impl VariantColors {
    /// Look up the color assigned to a role.
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Background => self.background,
            ColorRole::Foreground => self.foreground,
            ColorRole::Card => self.card,
            ColorRole::CardForeground => self.card_foreground,
            ColorRole::Popover => self.popover,
            ColorRole::PopoverForeground => self.popover_foreground,
            ColorRole::Muted => self.muted,
            ColorRole::MutedForeground => self.muted_foreground,
            ColorRole::Border => self.border,
            ColorRole::Input => self.input,
            ColorRole::Ring => self.ring,
        }
    }
}

/// The full extraction result: a light and a dark variant plus the short
/// dominant-color list for swatch display. Built once per extraction and
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemePalette {
    pub light: VariantColors,
    pub dark: VariantColors,
    pub dominant_colors: Vec<Color>,
}

impl ThemePalette {
    /// Serialize to the JSON shape the dashboard's theme form consumes.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the theme JSON to an arbitrary path.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut content = self.to_json(true)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_variant() -> VariantColors {
        let c = |hex: &str| Color::from_hex(hex).unwrap();
        VariantColors {
            primary: c("#f80000"),
            secondary: c("#0000f8"),
            accent: c("#00f800"),
            background: c("#ffffff"),
            foreground: c("#0f172a"),
            card: c("#ffffff"),
            card_foreground: c("#0f172a"),
            popover: c("#ffffff"),
            popover_foreground: c("#0f172a"),
            muted: c("#f1f5f9"),
            muted_foreground: c("#64748b"),
            border: c("#e2e8f0"),
            input: c("#e2e8f0"),
            ring: c("#f80000"),
        }
    }

    #[test]
    fn variant_serializes_with_camel_case_roles() {
        let json = serde_json::to_string(&sample_variant()).unwrap();
        for role in ColorRole::ALL {
            assert!(
                json.contains(&format!("\"{}\":", role.as_str())),
                "missing role {} in {json}",
                role.as_str()
            );
        }
    }

    #[test]
    fn variant_has_exactly_fourteen_roles() {
        let json = serde_json::to_string(&sample_variant()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), ColorRole::ALL.len());
    }

    #[test]
    fn get_matches_serialized_field() {
        let variant = sample_variant();
        assert_eq!(variant.get(ColorRole::CardForeground).to_hex(), "#0f172a");
        assert_eq!(variant.get(ColorRole::Ring).to_hex(), "#f80000");
    }

    #[test]
    fn palette_json_round_trip() {
        let palette = ThemePalette {
            light: sample_variant(),
            dark: sample_variant(),
            dominant_colors: vec![Color::new(248, 0, 0)],
        };
        let json = palette.to_json(false).unwrap();
        assert!(json.contains("\"dominantColors\":[\"#f80000\"]"));
        let back: ThemePalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let mut value = serde_json::to_value(sample_variant()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("sidebar".into(), "#000000".into());
        let result: std::result::Result<VariantColors, _> = serde_json::from_value(value);
        assert!(result.is_err(), "extra roles must not deserialize");
    }
}
