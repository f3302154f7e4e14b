//! Mess-Engine: setzt Marker aus aufgelösten Hit-Positionen und misst
//! den Abstand zum jeweils vorherigen Marker.
//!
//! Die Engine erzeugt reine Daten (`PlacementOutcome`); das Weiterreichen an
//! Renderer und Label erfolgt zentral über die Handler.

mod placement;
mod state;

pub use placement::PlacementOutcome;
pub use state::{MeasurementEngine, MeasurementPhase};
