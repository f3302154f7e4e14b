//! Handler für Statusmeldungen der Tracking-Session.

use crate::app::{AppState, SessionStatus};

/// Übernimmt den gemeldeten Session-Zustand.
///
/// Fehler und Unterbrechungen werden nur protokolliert; der Mess-Zustand
/// bleibt unberührt.
pub fn set_status(state: &mut AppState, status: SessionStatus) {
    match &status {
        SessionStatus::Failed { message } => {
            log::warn!("Tracking-Session fehlgeschlagen: {}", message)
        }
        SessionStatus::Interrupted => log::warn!("Tracking-Session unterbrochen"),
        other => log::info!("Tracking-Session: {:?}", other),
    }
    state.session = status;
}
