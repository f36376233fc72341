use crate::core::constants;
use serde::{Deserialize, Serialize};

#[cfg(feature = "egui")]
use egui::Color32;

/// Serializable color type that can convert to/from egui::Color32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RulerColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Default main color for lines and label text (#263238)
    pub const fn main() -> Self {
        Self::rgb(38, 50, 56)
    }

    /// Default secondary color for halos and marker fills (white)
    pub const fn secondary() -> Self {
        Self::rgb(255, 255, 255)
    }
}

#[cfg(feature = "egui")]
impl From<Color32> for RulerColor {
    fn from(color: Color32) -> Self {
        Self {
            r: color.r(),
            g: color.g(),
            b: color.b(),
            a: color.a(),
        }
    }
}

#[cfg(feature = "egui")]
impl From<RulerColor> for Color32 {
    fn from(color: RulerColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Anchor of a rendered label relative to its point feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Top,
    Bottom,
    Center,
    Left,
    Right,
}

/// Declarative style for the connecting line layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayerStyle {
    /// Line color
    pub color: RulerColor,
    /// Line width in pixels
    pub width: f32,
}

impl Default for LineLayerStyle {
    fn default() -> Self {
        Self {
            color: RulerColor::main(),
            width: constants::DEFAULT_LINE_WIDTH,
        }
    }
}

/// Declarative style for the distance-label symbol layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolLayerStyle {
    /// Font stack for label text
    pub text_font: Vec<String>,
    /// Label font size in points
    pub text_size: f32,
    /// Label text color
    pub text_color: RulerColor,
    /// Halo color drawn behind the text
    pub halo_color: RulerColor,
    /// Halo width in pixels
    pub halo_width: f32,
    /// Label anchor relative to the point
    pub text_anchor: TextAnchor,
    /// Label offset in em units
    pub text_offset: [f32; 2],
}

impl Default for SymbolLayerStyle {
    fn default() -> Self {
        Self {
            text_font: vec![constants::DEFAULT_TEXT_FONT.to_string()],
            text_size: constants::DEFAULT_TEXT_SIZE,
            text_color: RulerColor::main(),
            halo_color: RulerColor::secondary(),
            halo_width: constants::DEFAULT_HALO_WIDTH,
            text_anchor: TextAnchor::Top,
            text_offset: [0.0, 0.8],
        }
    }
}

/// Style for the draggable point markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker fill color
    pub fill_color: RulerColor,
    /// Marker radius in pixels
    pub radius: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill_color: RulerColor::secondary(),
            radius: constants::DEFAULT_MARKER_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let line = LineLayerStyle::default();
        assert_eq!(line.color, RulerColor::rgb(38, 50, 56));
        assert_eq!(line.width, 2.0);

        let symbol = SymbolLayerStyle::default();
        assert_eq!(symbol.text_font, vec!["Roboto Medium".to_string()]);
        assert_eq!(symbol.text_anchor, TextAnchor::Top);
        assert_eq!(symbol.halo_color, RulerColor::rgb(255, 255, 255));
    }

    #[test]
    fn test_anchor_serialization() {
        let json = serde_json::to_string(&TextAnchor::Top).unwrap();
        assert_eq!(json, "\"top\"");
    }

    #[cfg(feature = "egui")]
    #[test]
    fn test_egui_color_roundtrip() {
        let color = RulerColor::rgb(255, 128, 64);
        let egui_color: Color32 = color.into();
        let back: RulerColor = egui_color.into();
        assert_eq!(color, back);
    }
}
