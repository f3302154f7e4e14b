//! Handler für Punkt-Platzierung und Zurücksetzen der Messung.

use crate::app::ports::SceneUpdate;
use crate::app::AppState;
use crate::core::DEFAULT_MEASUREMENT_TEXT;

/// Setzt einen Marker und legt Render-/Label-Anweisungen ab.
///
/// Reihenfolge: erst verdrängte Marker entfernen, dann neuen Marker zeichnen,
/// zuletzt den Label-Text setzen (nur wenn gemessen wurde).
pub fn place_point(state: &mut AppState, world_pos: glam::Vec3) {
    let outcome = state.engine.place_point(world_pos);
    let style = state.options.marker_style();

    for marker in &outcome.to_remove {
        state.queue(SceneUpdate::RemoveMarker { id: marker.id });
    }
    for marker in outcome.to_render {
        state.queue(SceneUpdate::AddMarker { marker, style });
    }

    if let Some(measurement) = outcome.measurement {
        let text = measurement.format(state.options.display_decimals);
        log::info!("Messung: {}", text);
        state.measurement_text = text.clone();
        state.queue(SceneUpdate::SetMeasurementText { text });
    }
}

/// Verwirft alle Marker der Session und setzt das Label zurück.
pub fn reset(state: &mut AppState) {
    let discarded = state.engine.reset();
    if !discarded.is_empty() {
        log::info!("{} Marker verworfen", discarded.len());
    }
    for marker in discarded {
        state.queue(SceneUpdate::RemoveMarker { id: marker.id });
    }

    state.measurement_text = DEFAULT_MEASUREMENT_TEXT.to_string();
    state.queue(SceneUpdate::SetMeasurementText {
        text: DEFAULT_MEASUREMENT_TEXT.to_string(),
    });
}
