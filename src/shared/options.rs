//! Zentrale Konfiguration für das AR-Lineal.
//!
//! `RulerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::{MarkerStyle, Shading};
use serde::{Deserialize, Serialize};

// ── Marker-Rendering ───────────────────────────────────────────────

/// Kugel-Radius der Marker in Szenen-Einheiten (1 cm).
pub const MARKER_RADIUS: f32 = 0.01;
/// Füllfarbe der Marker (RGBA: Orange).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.5, 0.0, 1.0];

// ── Anzeige ─────────────────────────────────────────────────────────

/// Nachkommastellen des angezeigten Messwerts.
pub const DISPLAY_DECIMALS: usize = 2;
/// Obergrenze für `display_decimals` (f32 trägt keine weiteren Stellen).
pub const MAX_DISPLAY_DECIMALS: usize = 6;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `ar_ruler.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Kugel-Radius in Szenen-Einheiten
    pub marker_radius: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Beleuchtungsmodell des Marker-Materials
    pub marker_shading: Shading,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Nachkommastellen im Mess-Label
    pub display_decimals: usize,
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            marker_radius: MARKER_RADIUS,
            marker_color: MARKER_COLOR,
            marker_shading: Shading::Blinn,
            display_decimals: DISPLAY_DECIMALS,
        }
    }
}

impl RulerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ar_ruler"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ar_ruler.toml")
    }

    /// Begrenzt Werte, die aus Datei oder UI kommen, auf gültige Bereiche.
    pub fn sanitized(mut self) -> Self {
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            log::warn!(
                "display_decimals = {} zu groß, begrenze auf {}",
                self.display_decimals,
                MAX_DISPLAY_DECIMALS
            );
            self.display_decimals = MAX_DISPLAY_DECIMALS;
        }
        self
    }

    /// Baut den Marker-Stil für den Renderer.
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            radius: self.marker_radius,
            color: self.marker_color,
            shading: self.marker_shading,
        }
    }
}
