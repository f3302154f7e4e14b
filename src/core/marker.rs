//! Gesetzte Messpunkte im Weltkoordinatensystem.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Fortlaufende Kennung eines Markers innerhalb einer Mess-Session.
///
/// Dient dem Renderer als Referenz beim Entfernen (`remove_marker`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein platzierter Messpunkt. Nach dem Erstellen unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Kennung in Einfügereihenfolge
    pub id: MarkerId,
    /// Weltposition in Metern
    pub position: Vec3,
}

impl Marker {
    /// Erstellt einen neuen Marker an der angegebenen Weltposition.
    pub fn new(id: MarkerId, position: Vec3) -> Self {
        Self { id, position }
    }
}
