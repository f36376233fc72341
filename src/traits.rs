//! The capability surface the control needs from its embedding host.
//!
//! Everything the ruler renders goes through [`MapHost`]; the real map
//! widget, its button chrome and its icon assets stay on the embedder's
//! side of this trait.

use crate::{
    core::geo::LatLng,
    data::geojson::GeoJson,
    input::events::{EventKind, RulerNotice, SubscriptionId},
    ui::style::{LineLayerStyle, MarkerStyle, SymbolLayerStyle},
    Result,
};

/// Opaque handle to a renderer-owned draggable marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Host map surface the ruler control drives.
///
/// Contract notes:
/// - `add_source` with an id that already exists replaces the source.
/// - every `remove_*` call tolerates an already-absent target as a no-op,
///   so teardown stays idempotent even when a style reload races it.
/// - markers created through `add_marker` are draggable; while a marker is
///   alive the host reports its drags to the control as
///   [`crate::MapEvent::MarkerDragged`].
pub trait MapHost {
    /// Adds (or replaces) a named vector data source
    fn add_source(&mut self, id: &str, data: GeoJson) -> Result<()>;

    /// Replaces the data of an existing source
    fn set_source_data(&mut self, id: &str, data: GeoJson) -> Result<()>;

    /// Removes a named source; absent ids are a no-op
    fn remove_source(&mut self, id: &str);

    /// Adds a line rendering layer bound to a source
    fn add_line_layer(&mut self, id: &str, source: &str, style: &LineLayerStyle) -> Result<()>;

    /// Adds a symbol rendering layer bound to a source; label text comes
    /// from the [`crate::data::geojson::LABEL_PROPERTY`] feature property
    fn add_symbol_layer(&mut self, id: &str, source: &str, style: &SymbolLayerStyle) -> Result<()>;

    /// Removes a named layer; absent ids are a no-op
    fn remove_layer(&mut self, id: &str);

    /// Creates a draggable marker at the given coordinate
    fn add_marker(&mut self, position: LatLng, style: &MarkerStyle) -> Result<MarkerId>;

    /// Removes a marker; unknown handles are a no-op
    fn remove_marker(&mut self, marker: MarkerId);

    /// Reads the current cursor affordance
    fn cursor(&self) -> String;

    /// Replaces the cursor affordance
    fn set_cursor(&mut self, cursor: &str);

    /// Registers interest in an event class
    fn subscribe(&mut self, event: EventKind) -> SubscriptionId;

    /// Drops one subscription; unknown ids are a no-op
    fn unsubscribe(&mut self, subscription: SubscriptionId);

    /// Marks the toggle chrome active or inactive
    fn set_control_active(&mut self, active: bool);

    /// Fires a ruler notice on the host map object
    fn notify(&mut self, notice: RulerNotice);
}
