//! Construction-time options for the ruler control.
//!
//! Everything the control renders is parameterized here: the distance unit,
//! the label formatter, fonts and colors, and the id prefix that namespaces
//! the sources and layers the control claims on the host map.

use crate::{
    core::{constants, geo::DistanceUnit},
    measure::format,
    ui::style::{LineLayerStyle, MarkerStyle, RulerColor, SymbolLayerStyle},
};

/// Injectable label formatting capability. Receives a cumulative distance
/// already converted to the configured unit and returns the display string.
pub type LabelFormatter = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Options accepted by [`crate::RulerControl`] at construction
pub struct RulerOptions {
    /// Unit distances are reported in
    pub unit: DistanceUnit,
    /// Prefix for the control's source and layer ids. Two controls on the
    /// same map must use distinct prefixes.
    pub id_prefix: String,
    /// Font stack for distance labels
    pub text_font: Vec<String>,
    /// Label font size in points
    pub text_size: f32,
    /// Label halo width in pixels
    pub halo_width: f32,
    /// Main color for the line and label text
    pub main_color: RulerColor,
    /// Secondary color for halos and marker fills
    pub secondary_color: RulerColor,
    /// Custom label formatter; the default renders `"{:.2} <unit>"`
    pub formatter: Option<LabelFormatter>,
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            id_prefix: constants::DEFAULT_ID_PREFIX.to_string(),
            text_font: vec![constants::DEFAULT_TEXT_FONT.to_string()],
            text_size: constants::DEFAULT_TEXT_SIZE,
            halo_width: constants::DEFAULT_HALO_WIDTH,
            main_color: RulerColor::main(),
            secondary_color: RulerColor::secondary(),
            formatter: None,
        }
    }
}

impl RulerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_text_font(mut self, font: Vec<String>) -> Self {
        self.text_font = font;
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_halo_width(mut self, width: f32) -> Self {
        self.halo_width = width;
        self
    }

    pub fn with_main_color(mut self, color: RulerColor) -> Self {
        self.main_color = color;
        self
    }

    pub fn with_secondary_color(mut self, color: RulerColor) -> Self {
        self.secondary_color = color;
        self
    }

    /// Sets a custom label formatter
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Formats a distance value in the configured unit
    pub fn format(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => format::default_label(value, self.unit),
        }
    }

    /// Line layer style assembled from these options
    pub fn line_style(&self) -> LineLayerStyle {
        LineLayerStyle {
            color: self.main_color,
            ..LineLayerStyle::default()
        }
    }

    /// Symbol layer style assembled from these options
    pub fn symbol_style(&self) -> SymbolLayerStyle {
        SymbolLayerStyle {
            text_font: self.text_font.clone(),
            text_size: self.text_size,
            text_color: self.main_color,
            halo_color: self.secondary_color,
            halo_width: self.halo_width,
            ..SymbolLayerStyle::default()
        }
    }

    /// Marker style assembled from these options
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            fill_color: self.secondary_color,
            ..MarkerStyle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let options = RulerOptions::default();
        assert_eq!(options.format(0.0), "0.00 km");
        assert_eq!(options.format(1.234), "1.23 km");
    }

    #[test]
    fn test_custom_formatter() {
        let options = RulerOptions::new()
            .with_unit(DistanceUnit::Miles)
            .with_formatter(|value| format!("{value:.1} miles"));
        assert_eq!(options.format(2.55), "2.6 miles");
    }

    #[test]
    fn test_builder_chain() {
        let options = RulerOptions::new()
            .with_id_prefix("ruler-b")
            .with_text_size(14.0)
            .with_main_color(RulerColor::rgb(10, 20, 30));

        assert_eq!(options.id_prefix, "ruler-b");
        assert_eq!(options.symbol_style().text_size, 14.0);
        assert_eq!(options.line_style().color, RulerColor::rgb(10, 20, 30));
    }
}
