//! Core-Domänentypen: Marker, Marker-Puffer und Abstandsberechnung.

pub mod marker;
pub mod marker_buffer;
pub mod measurement;

pub use marker::{Marker, MarkerId};
pub use marker_buffer::{BufferEvent, MarkerBuffer};
pub use measurement::{
    distance_cm, format_measurement, MeasurementResult, CENTIMETERS_PER_METER,
    DEFAULT_MEASUREMENT_TEXT, MEASUREMENT_UNIT,
};
