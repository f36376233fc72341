use crate::core::geo::DistanceUnit;

/// Default label rendering: two decimal places plus the unit suffix
pub fn default_label(value: f64, unit: DistanceUnit) -> String {
    format!("{:.2} {}", value, unit.abbreviation())
}
