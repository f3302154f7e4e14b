//! Ausgehende Schnittstellen zu Renderer und Label.
//!
//! Handler legen `SceneUpdate`s im `AppState` ab; der Host reicht sie per
//! [`flush`] an seine Implementierungen von [`MarkerRenderer`] und
//! [`MeasurementLabel`] weiter. Der Renderer bleibt so rein reaktiv.

use crate::app::AppState;
use crate::core::{Marker, MarkerId};
use crate::shared::MarkerStyle;

/// Zeichnet und entfernt Marker-Kugeln in der 3D-Szene.
pub trait MarkerRenderer {
    /// Fügt eine Kugel für `marker` im angegebenen Stil hinzu.
    fn add_marker(&mut self, marker: &Marker, style: &MarkerStyle);
    /// Entfernt die Kugel des Markers mit `id`.
    fn remove_marker(&mut self, id: MarkerId);
}

/// Zeigt den Messwert an.
pub trait MeasurementLabel {
    /// Setzt den Text des Mess-Labels.
    fn set_measurement_text(&mut self, text: &str);
}

/// Einzelne Anweisung an Renderer oder Label.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneUpdate {
    /// Marker-Kugel hinzufügen
    AddMarker {
        /// Neuer Marker
        marker: Marker,
        /// Darstellungs-Stil
        style: MarkerStyle,
    },
    /// Marker-Kugel entfernen
    RemoveMarker {
        /// Kennung des zu entfernenden Markers
        id: MarkerId,
    },
    /// Label-Text setzen
    SetMeasurementText {
        /// Formatierter Anzeige-Text
        text: String,
    },
}

/// Liefert alle ausstehenden Anweisungen in Reihenfolge aus.
///
/// Gibt die Anzahl ausgelieferter Anweisungen zurück.
pub fn flush(
    state: &mut AppState,
    renderer: &mut dyn MarkerRenderer,
    label: &mut dyn MeasurementLabel,
) -> usize {
    let updates = state.take_scene_updates();
    let count = updates.len();
    for update in updates {
        match update {
            SceneUpdate::AddMarker { marker, style } => renderer.add_marker(&marker, &style),
            SceneUpdate::RemoveMarker { id } => renderer.remove_marker(id),
            SceneUpdate::SetMeasurementText { text } => label.set_measurement_text(&text),
        }
    }
    count
}
