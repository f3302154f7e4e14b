/// Zustand der externen Tracking-Session, wie vom Tracking gemeldet.
///
/// Rein informativ: der Mess-Zustand hängt nicht davon ab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Noch nicht gestartet
    #[default]
    Idle,
    /// Tracking läuft
    Running,
    /// Tracking pausiert (View nicht sichtbar)
    Paused,
    /// Tracking unterbrochen, Fortsetzung erwartet
    Interrupted,
    /// Tracking mit Fehler abgebrochen
    Failed {
        /// Fehlermeldung des Trackings
        message: String,
    },
}

impl SessionStatus {
    /// Gibt `true` zurück, wenn das Tracking aktiv läuft.
    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }
}
