use super::SessionStatus;
use crate::app::engine::MeasurementEngine;
use crate::app::ports::SceneUpdate;
use crate::core::DEFAULT_MEASUREMENT_TEXT;
use crate::shared::RulerOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Mess-Engine mit dem Marker-Puffer der aktuellen Session
    pub engine: MeasurementEngine,
    /// Aktueller Text des Mess-Labels
    pub measurement_text: String,
    /// Zustand der Tracking-Session
    pub session: SessionStatus,
    /// Laufzeit-Optionen (Marker-Stil, Anzeige)
    pub options: RulerOptions,
    /// Noch nicht ausgelieferte Anweisungen an Renderer und Label
    pub(crate) scene_updates: Vec<SceneUpdate>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            engine: MeasurementEngine::new(),
            measurement_text: DEFAULT_MEASUREMENT_TEXT.to_string(),
            session: SessionStatus::default(),
            options: RulerOptions::default(),
            scene_updates: Vec::new(),
        }
    }

    /// Erstellt einen App-State mit vorgegebenen Optionen.
    pub fn with_options(options: RulerOptions) -> Self {
        Self {
            options,
            ..Self::new()
        }
    }

    /// Gibt die Anzahl der sichtbaren Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.engine.markers().len()
    }

    /// Nimmt alle ausstehenden Szenen-Anweisungen in Reihenfolge heraus.
    pub fn take_scene_updates(&mut self) -> Vec<SceneUpdate> {
        std::mem::take(&mut self.scene_updates)
    }

    /// Gibt die ausstehenden Szenen-Anweisungen zurück, ohne sie zu entnehmen.
    pub fn pending_scene_updates(&self) -> &[SceneUpdate] {
        &self.scene_updates
    }

    pub(crate) fn queue(&mut self, update: SceneUpdate) {
        self.scene_updates.push(update);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
