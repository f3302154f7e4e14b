//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::RulerOptions;

/// Übernimmt neue Optionen. Bereits gezeichnete Marker behalten ihren Stil.
pub fn apply(state: &mut AppState, options: RulerOptions) {
    state.options = options.sanitized();
    log::info!("Optionen übernommen");
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) {
    state.options = RulerOptions::default();
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}

/// Speichert die aktuellen Optionen als TOML-Datei.
pub fn save(state: &AppState, path: &std::path::Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
