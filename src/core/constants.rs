//! Ruler defaults and identifier suffixes, kept in one place so embedders
//! can predict the names the control claims on the host map.

/// Suffix of the line geometry source id (`"<prefix>-line-source"`).
pub const LINE_SOURCE: &str = "line-source";

/// Suffix of the line layer id.
pub const LINE_LAYER: &str = "line-layer";

/// Suffix of the label point source id.
pub const SYMBOL_SOURCE: &str = "symbol-source";

/// Suffix of the label symbol layer id.
pub const SYMBOL_LAYER: &str = "symbol-layer";

/// Default prefix for all source and layer ids claimed by a control.
pub const DEFAULT_ID_PREFIX: &str = "ruler";

/// Cursor affordance shown while a measuring session is active.
pub const MEASURING_CURSOR: &str = "crosshair";

/// Default label font stack.
pub const DEFAULT_TEXT_FONT: &str = "Roboto Medium";

/// Default label font size in points.
pub const DEFAULT_TEXT_SIZE: f32 = 12.0;

/// Default label halo width in pixels.
pub const DEFAULT_HALO_WIDTH: f32 = 1.0;

/// Default line width in pixels.
pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

/// Default marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: f32 = 6.0;
