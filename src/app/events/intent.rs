use crate::shared::RulerOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus Tracking/UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Hit-Test eines Taps hat eine Weltposition gefunden
    HitResolved { world_pos: glam::Vec3 },
    /// Hit-Test eines Taps ohne Treffer
    HitTestFailed,

    /// Tracking-Session gestartet (View erscheint)
    SessionStarted,
    /// Tracking-Session pausiert (View verschwindet)
    SessionPaused,
    /// Tracking-Session mit Fehler abgebrochen
    SessionFailed { message: String },
    /// Tracking-Session unterbrochen (z.B. App im Hintergrund)
    SessionInterrupted,
    /// Unterbrechung der Tracking-Session beendet
    SessionInterruptionEnded,

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: RulerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Aktuelle Optionen als TOML-Datei speichern
    SaveOptionsRequested { path: std::path::PathBuf },
}
