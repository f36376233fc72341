//! Minimal embedder showing how a host map wires the ruler control in.
//!
//! The host here is a console stand-in for a real renderer: it stores
//! sources in memory and prints every call the control makes, so the
//! add/click/drag/teardown flow is visible without a GPU or a window.

use mapruler::{
    DistanceUnit, EventKind, EventManager, GeoJson, LatLng, LineLayerStyle, MapEvent, MapHost,
    MarkerId, MarkerStyle, Result, RulerControl, RulerNotice, RulerOptions, SubscriptionId,
    SymbolLayerStyle,
};
use std::collections::HashMap;

struct ConsoleHost {
    sources: HashMap<String, GeoJson>,
    next_marker: u64,
    cursor: String,
    events: EventManager,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            sources: HashMap::new(),
            next_marker: 0,
            cursor: "grab".to_string(),
            events: EventManager::new(),
        }
    }
}

impl MapHost for ConsoleHost {
    fn add_source(&mut self, id: &str, data: GeoJson) -> Result<()> {
        println!("add source {id}");
        self.sources.insert(id.to_string(), data);
        Ok(())
    }

    fn set_source_data(&mut self, id: &str, data: GeoJson) -> Result<()> {
        println!("set data on {id}: {}", serde_json::to_string(&data)?);
        self.sources.insert(id.to_string(), data);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) {
        println!("remove source {id}");
        self.sources.remove(id);
    }

    fn add_line_layer(&mut self, id: &str, source: &str, style: &LineLayerStyle) -> Result<()> {
        println!("add line layer {id} on {source} (width {})", style.width);
        Ok(())
    }

    fn add_symbol_layer(&mut self, id: &str, source: &str, style: &SymbolLayerStyle) -> Result<()> {
        println!(
            "add symbol layer {id} on {source} (font {:?}, size {})",
            style.text_font, style.text_size
        );
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) {
        println!("remove layer {id}");
    }

    fn add_marker(&mut self, position: LatLng, _style: &MarkerStyle) -> Result<MarkerId> {
        self.next_marker += 1;
        println!(
            "add marker #{} at ({:.4}, {:.4})",
            self.next_marker, position.lat, position.lng
        );
        Ok(MarkerId(self.next_marker))
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        println!("remove marker #{}", marker.0);
    }

    fn cursor(&self) -> String {
        self.cursor.clone()
    }

    fn set_cursor(&mut self, cursor: &str) {
        println!("cursor -> {cursor}");
        self.cursor = cursor.to_string();
    }

    fn subscribe(&mut self, event: EventKind) -> SubscriptionId {
        self.events.subscribe(event)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.events.unsubscribe(subscription)
    }

    fn set_control_active(&mut self, active: bool) {
        println!("toggle chrome active: {active}");
    }

    fn notify(&mut self, notice: RulerNotice) {
        self.events.emit(notice);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut host = ConsoleHost::new();
    host.events.on("measure.start", |_| println!("[listener] measuring started"));
    host.events.on("measure.end", |_| println!("[listener] measuring stopped"));

    let mut ruler = RulerControl::new(
        RulerOptions::new().with_unit(DistanceUnit::Kilometers),
    );

    ruler.activate(&mut host)?;
    host.events.process_events();

    // a short leg down the Thames
    let clicks = [
        LatLng::new(51.5074, -0.1278),
        LatLng::new(51.5033, -0.1196),
        LatLng::new(51.5007, -0.1246),
    ];
    for lat_lng in clicks {
        ruler.handle_event(&mut host, &MapEvent::Click { lat_lng })?;
    }
    println!("labels after clicks: {:?}", ruler.labels());

    // the user drags the middle marker
    ruler.handle_event(
        &mut host,
        &MapEvent::MarkerDragged {
            marker: MarkerId(2),
            to: LatLng::new(51.5055, -0.1200),
        },
    )?;
    println!("labels after drag: {:?}", ruler.labels());

    ruler.deactivate(&mut host);
    host.events.process_events();

    Ok(())
}
