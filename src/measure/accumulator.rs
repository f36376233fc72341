//! Cumulative-distance computation along an ordered point list.
//!
//! Recomputation is full rather than incremental on every mutation; a user
//! places at most a handful of points, so the O(n) walk is negligible next
//! to the render push it feeds.

use crate::core::geo::{DistanceUnit, LatLng};

/// Walks the ordered point list and returns the running total at each
/// point, converted to `unit`. Element 0 is always 0.0.
pub fn cumulative_distances(points: &[LatLng], unit: DistanceUnit) -> Vec<f64> {
    let mut totals = Vec::with_capacity(points.len());
    let mut total_meters = 0.0;

    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total_meters += points[i - 1].distance_to(point);
        }
        totals.push(unit.from_meters(total_meters));
    }

    totals
}

/// Maps the cumulative distances through an opaque formatter, yielding one
/// label per point.
pub fn cumulative_labels(
    points: &[LatLng],
    unit: DistanceUnit,
    format: &dyn Fn(f64) -> String,
) -> Vec<String> {
    cumulative_distances(points, unit)
        .into_iter()
        .map(format)
        .collect()
}
