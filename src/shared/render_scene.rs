//! Render-Szene als expliziter Übergabevertrag zwischen App und Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use super::MarkerStyle;
use crate::app::SessionStatus;
use crate::core::Marker;

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktuell sichtbare Marker (älteste zuerst)
    pub markers: Vec<Marker>,
    /// Stil aller Marker-Kugeln
    pub marker_style: MarkerStyle,
    /// Text des Mess-Labels
    pub measurement_text: String,
    /// Zustand der Tracking-Session
    pub session_status: SessionStatus,
}

impl RenderScene {
    /// Gibt zurück, ob Marker zu zeichnen sind.
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}
