//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        markers: state.engine.markers().to_vec(),
        marker_style: state.options.marker_style(),
        measurement_text: state.measurement_text.clone(),
        session_status: state.session.clone(),
    }
}
