//! Darstellungs-Stil der Marker-Kugeln, wie er an den Renderer übergeben wird.

use serde::{Deserialize, Serialize};

/// Beleuchtungsmodell des Marker-Materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Glatt, spiegelnd (Blinn-Phong)
    #[default]
    Blinn,
    /// Glatt, diffus (Lambert)
    Lambert,
    /// Unbeleuchtet, reine Grundfarbe
    Constant,
}

/// Kugel-Stil für einen Marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Kugel-Radius in Szenen-Einheiten (Meter)
    pub radius: f32,
    /// Grundfarbe (RGBA)
    pub color: [f32; 4],
    /// Beleuchtungsmodell
    pub shading: Shading,
}
