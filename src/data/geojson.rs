//! GeoJSON payloads handed to the host renderer's vector sources, plus the
//! two pure builders that turn an ordered point list into renderable
//! geometry. Coordinates serialize in GeoJSON `[lng, lat]` order.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property key the label symbol layer reads its text from
pub const LABEL_PROPERTY: &str = "label";

/// GeoJSON geometry types carried by ruler sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

/// Builds a single LineString feature connecting the points in order.
/// Fewer than 2 points yields a degenerate but valid LineString that
/// renderers accept without erroring.
pub fn line_geometry(points: &[LatLng]) -> GeoJson {
    GeoJson::Feature(GeoJsonFeature {
        geometry: Some(GeoJsonGeometry::LineString {
            coordinates: points.iter().map(|p| [p.lng, p.lat]).collect(),
        }),
        properties: None,
    })
}

/// Builds one Point feature per coordinate, each carrying its label text
/// under [`LABEL_PROPERTY`] for symbol rendering. Extra points or labels
/// beyond the shorter of the two slices are dropped.
pub fn label_features(points: &[LatLng], labels: &[String]) -> GeoJson {
    let features = points
        .iter()
        .zip(labels.iter())
        .map(|(point, label)| {
            let mut properties = HashMap::new();
            properties.insert(
                LABEL_PROPERTY.to_string(),
                serde_json::Value::String(label.clone()),
            );
            GeoJsonFeature {
                geometry: Some(GeoJsonGeometry::Point {
                    coordinates: [point.lng, point.lat],
                }),
                properties: Some(properties),
            }
        })
        .collect();

    GeoJson::FeatureCollection { features }
}
