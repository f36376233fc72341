//! The ruler control state machine.
//!
//! A control is either idle or measuring. Activation claims the cursor,
//! chrome, sources, layers and event subscriptions; every click appends a
//! measured point; every marker drag rewrites one point in place; style
//! reloads re-attach the overlay without touching the session; deactivation
//! releases everything again.

use crate::{
    core::{config::RulerOptions, constants, geo::LatLng},
    data::geojson,
    input::events::{EventKind, MapEvent, RulerNotice, SubscriptionId},
    measure::accumulator,
    traits::{MapHost, MarkerId},
    Result, RulerError,
};

/// One measured point: its coordinate, the cumulative-distance label shown
/// at it, and the draggable marker the host created for it.
#[derive(Debug, Clone)]
struct SessionPoint {
    coordinate: LatLng,
    label: String,
    marker: MarkerId,
}

/// Everything held between measuring-on and measuring-off
struct MeasureSession {
    entries: Vec<SessionPoint>,
    subscriptions: Vec<SubscriptionId>,
    saved_cursor: String,
}

/// Interactive distance-ruler control
pub struct RulerControl {
    options: RulerOptions,
    session: Option<MeasureSession>,
}

impl RulerControl {
    pub fn new(options: RulerOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }

    pub fn options(&self) -> &RulerOptions {
        &self.options
    }

    /// Whether a measuring session is active
    pub fn is_measuring(&self) -> bool {
        self.session.is_some()
    }

    /// Coordinates of the current session, in click order
    pub fn coordinates(&self) -> Vec<LatLng> {
        self.session
            .as_ref()
            .map(|s| s.entries.iter().map(|e| e.coordinate).collect())
            .unwrap_or_default()
    }

    /// Cumulative-distance labels of the current session
    pub fn labels(&self) -> Vec<String> {
        self.session
            .as_ref()
            .map(|s| s.entries.iter().map(|e| e.label.clone()).collect())
            .unwrap_or_default()
    }

    /// Id of the line geometry source on the host
    pub fn line_source_id(&self) -> String {
        format!("{}-{}", self.options.id_prefix, constants::LINE_SOURCE)
    }

    /// Id of the label point source on the host
    pub fn symbol_source_id(&self) -> String {
        format!("{}-{}", self.options.id_prefix, constants::SYMBOL_SOURCE)
    }

    /// Id of the line layer on the host
    pub fn line_layer_id(&self) -> String {
        format!("{}-{}", self.options.id_prefix, constants::LINE_LAYER)
    }

    /// Id of the label symbol layer on the host
    pub fn symbol_layer_id(&self) -> String {
        format!("{}-{}", self.options.id_prefix, constants::SYMBOL_LAYER)
    }

    /// Starts a measuring session. A no-op while one is already active, so
    /// repeated toggle-on input cannot double-subscribe or wipe points.
    pub fn activate(&mut self, host: &mut dyn MapHost) -> Result<()> {
        if self.session.is_some() {
            log::debug!("activate ignored: measuring already active");
            return Ok(());
        }

        let saved_cursor = host.cursor();
        host.set_cursor(constants::MEASURING_CURSOR);
        host.set_control_active(true);

        self.attach_overlay(host, &[], &[])?;

        let subscriptions = vec![
            host.subscribe(EventKind::Click),
            host.subscribe(EventKind::StyleReload),
        ];
        self.session = Some(MeasureSession {
            entries: Vec::new(),
            subscriptions,
            saved_cursor,
        });

        host.notify(RulerNotice::MeasureStart);
        log::debug!("measuring started");
        Ok(())
    }

    /// Ends the measuring session and releases everything it claimed.
    /// A no-op while idle; all removals tolerate already-absent objects.
    pub fn deactivate(&mut self, host: &mut dyn MapHost) {
        let Some(session) = self.session.take() else {
            return;
        };

        host.remove_layer(&self.symbol_layer_id());
        host.remove_layer(&self.line_layer_id());
        host.remove_source(&self.symbol_source_id());
        host.remove_source(&self.line_source_id());

        for entry in &session.entries {
            host.remove_marker(entry.marker);
        }
        for subscription in session.subscriptions {
            host.unsubscribe(subscription);
        }

        host.set_cursor(&session.saved_cursor);
        host.set_control_active(false);
        host.notify(RulerNotice::MeasureEnd);
        log::debug!("measuring stopped, {} points discarded", session.entries.len());
    }

    /// Flips the measuring state; returns whether measuring is now active
    pub fn toggle(&mut self, host: &mut dyn MapHost) -> Result<bool> {
        if self.is_measuring() {
            self.deactivate(host);
            Ok(false)
        } else {
            self.activate(host)?;
            Ok(true)
        }
    }

    /// Feeds one map event into the state machine. Events arriving while
    /// idle are dropped, which also covers a style reload racing teardown.
    pub fn handle_event(&mut self, host: &mut dyn MapHost, event: &MapEvent) -> Result<()> {
        if self.session.is_none() {
            return Ok(());
        }

        match event {
            MapEvent::Click { lat_lng } => self.add_point(host, *lat_lng),
            MapEvent::MarkerDragged { marker, to } => self.drag_point(host, *marker, *to),
            MapEvent::StyleReload => self.reattach(host),
        }
    }

    /// Removal of the whole control: tear down any active session
    pub fn on_remove(&mut self, host: &mut dyn MapHost) {
        self.deactivate(host);
    }

    fn add_point(&mut self, host: &mut dyn MapHost, coordinate: LatLng) -> Result<()> {
        if !coordinate.is_valid() {
            return Err(RulerError::InvalidCoordinates(format!(
                "({}, {})",
                coordinate.lat, coordinate.lng
            ))
            .into());
        }

        let marker = host.add_marker(coordinate, &self.options.marker_style())?;
        if let Some(session) = self.session.as_mut() {
            session.entries.push(SessionPoint {
                coordinate,
                label: String::new(),
                marker,
            });
        }

        log::debug!("ruler point added at ({}, {})", coordinate.lat, coordinate.lng);
        self.sync(host)
    }

    fn drag_point(&mut self, host: &mut dyn MapHost, marker: MarkerId, to: LatLng) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        match session.entries.iter_mut().find(|e| e.marker == marker) {
            Some(entry) => entry.coordinate = to,
            None => {
                log::warn!("drag for unknown marker {marker:?} dropped");
                return Ok(());
            }
        }

        self.sync(host)
    }

    fn reattach(&mut self, host: &mut dyn MapHost) -> Result<()> {
        let (coordinates, labels) = match &self.session {
            Some(session) => (
                session
                    .entries
                    .iter()
                    .map(|e| e.coordinate)
                    .collect::<Vec<_>>(),
                session.entries.iter().map(|e| e.label.clone()).collect::<Vec<_>>(),
            ),
            None => return Ok(()),
        };

        log::debug!("style reload: re-attaching ruler overlay with {} points", coordinates.len());
        self.attach_overlay(host, &coordinates, &labels)
    }

    /// Recomputes every label from the current coordinates and pushes both
    /// geometries to the host
    fn sync(&mut self, host: &mut dyn MapHost) -> Result<()> {
        let coordinates = self.coordinates();
        let labels = accumulator::cumulative_labels(&coordinates, self.options.unit, &|value| {
            self.options.format(value)
        });

        if let Some(session) = self.session.as_mut() {
            for (entry, label) in session.entries.iter_mut().zip(&labels) {
                entry.label = label.clone();
            }
        }

        host.set_source_data(&self.line_source_id(), geojson::line_geometry(&coordinates))?;
        host.set_source_data(
            &self.symbol_source_id(),
            geojson::label_features(&coordinates, &labels),
        )?;
        Ok(())
    }

    /// Attaches sources and layers for the given session contents
    fn attach_overlay(
        &self,
        host: &mut dyn MapHost,
        coordinates: &[LatLng],
        labels: &[String],
    ) -> Result<()> {
        host.add_source(&self.line_source_id(), geojson::line_geometry(coordinates))?;
        host.add_source(
            &self.symbol_source_id(),
            geojson::label_features(coordinates, labels),
        )?;
        host.add_line_layer(
            &self.line_layer_id(),
            &self.line_source_id(),
            &self.options.line_style(),
        )?;
        host.add_symbol_layer(
            &self.symbol_layer_id(),
            &self.symbol_source_id(),
            &self.options.symbol_style(),
        )?;
        Ok(())
    }
}

impl Default for RulerControl {
    fn default() -> Self {
        Self::new(RulerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_starts_idle() {
        let control = RulerControl::default();
        assert!(!control.is_measuring());
        assert!(control.coordinates().is_empty());
        assert!(control.labels().is_empty());
    }

    #[test]
    fn test_ids_use_prefix() {
        let control = RulerControl::new(RulerOptions::new().with_id_prefix("measure-a"));
        assert_eq!(control.line_source_id(), "measure-a-line-source");
        assert_eq!(control.symbol_layer_id(), "measure-a-symbol-layer");
    }

    #[test]
    fn test_default_ids() {
        let control = RulerControl::default();
        assert_eq!(control.line_layer_id(), "ruler-line-layer");
        assert_eq!(control.symbol_source_id(), "ruler-symbol-source");
    }
}
