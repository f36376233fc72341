//! # mapruler
//!
//! An interactive distance-ruler control for embeddable map widgets.
//!
//! The control owns a measuring session: toggling it on switches the cursor
//! to a crosshair and attaches a line source/layer and a symbol source/layer
//! to the host map; each map click drops a draggable marker and extends the
//! line, with a cumulative-distance label rendered at every point. Dragging
//! a marker moves its point in place and refreshes every label. Toggling
//! off tears the whole overlay down again.
//!
//! The host map is abstracted behind the [`MapHost`] capability trait, so
//! the control can drive any renderer that exposes named GeoJSON sources,
//! styled layers and draggable markers.

pub mod control;
pub mod core;
pub mod data;
pub mod input;
pub mod measure;
pub mod traits;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::control::RulerControl;
pub use crate::core::{
    config::{LabelFormatter, RulerOptions},
    geo::{DistanceUnit, LatLng},
};
pub use crate::data::geojson::{
    label_features, line_geometry, GeoJson, GeoJsonFeature, GeoJsonGeometry,
};
pub use crate::input::events::{EventKind, EventManager, MapEvent, RulerNotice, SubscriptionId};
pub use crate::measure::accumulator::{cumulative_distances, cumulative_labels};
pub use crate::traits::{MapHost, MarkerId};
pub use crate::ui::style::{LineLayerStyle, MarkerStyle, RulerColor, SymbolLayerStyle, TextAnchor};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum RulerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Renderer error: {0}")]
    Renderer(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Control error: {0}")]
    Control(String),
}

/// Error type alias for convenience
pub type Error = RulerError;
