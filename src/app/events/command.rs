use crate::app::SessionStatus;
use crate::shared::RulerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Marker an Weltposition setzen und messen
    PlacePoint { world_pos: glam::Vec3 },
    /// Alle Marker verwerfen, Label zurücksetzen
    ResetMeasurement,
    /// Session-Zustand setzen
    SetSessionStatus { status: SessionStatus },
    /// Optionen anwenden
    ApplyOptions { options: RulerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen in Datei speichern
    SaveOptions { path: std::path::PathBuf },
}
