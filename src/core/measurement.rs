//! Abstandsberechnung zwischen Markern und Formatierung für die Anzeige.

use glam::Vec3;

/// Umrechnungsfaktor Weltmeter → Zentimeter (fester Maßstab).
pub const CENTIMETERS_PER_METER: f32 = 100.0;

/// Einheit hinter dem Messwert im Anzeige-Text.
pub const MEASUREMENT_UNIT: &str = "centimetros";

/// Anzeige-Text, solange noch keine Messung vorliegt.
pub const DEFAULT_MEASUREMENT_TEXT: &str = "0 centimetros";

/// Ergebnis einer Messung zwischen zwei Markern. Wird nicht gespeichert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementResult {
    /// Nicht-negativer Abstand in Zentimetern
    pub distance_cm: f32,
}

impl MeasurementResult {
    /// Misst den Abstand zwischen zwei Weltpositionen.
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self {
            distance_cm: distance_cm(from, to),
        }
    }

    /// Formatiert den Messwert mit fester Nachkommastellen-Anzahl.
    pub fn format(&self, decimals: usize) -> String {
        format_measurement(self.distance_cm, decimals)
    }
}

/// Euklidischer Abstand zweier Weltpositionen (Meter), skaliert auf Zentimeter.
///
/// Quadrieren und Wurzel laufen in f64, damit große Koordinaten nicht vorzeitig
/// nach `inf` überlaufen.
pub fn distance_cm(a: Vec3, b: Vec3) -> f32 {
    let meters = a.as_dvec3().distance(b.as_dvec3());
    (meters * f64::from(CENTIMETERS_PER_METER)) as f32
}

/// Baut den Anzeige-Text `"<wert> centimetros"`.
pub fn format_measurement(distance_cm: f32, decimals: usize) -> String {
    format!("{:.*} {}", decimals, distance_cm, MEASUREMENT_UNIT)
}
