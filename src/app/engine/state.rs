//! State-Definitionen und Konstruktor der Mess-Engine.

use crate::core::{Marker, MarkerBuffer, MarkerId};

/// Phase des Mess-Ablaufs, abgeleitet aus der Puffer-Belegung.
///
/// `Empty → OnePoint → TwoPoints → OnePoint (nach Reset) → TwoPoints → …`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementPhase {
    /// Noch kein Marker gesetzt
    Empty,
    /// Ein Marker gesetzt, nächster Tap erzeugt eine Messung
    OnePoint,
    /// Zwei Marker gesetzt, Messung liegt vor
    TwoPoints,
}

/// Besitzt den Marker-Puffer einer Mess-Session.
#[derive(Debug, Clone)]
pub struct MeasurementEngine {
    pub(crate) buffer: MarkerBuffer,
    /// Nächste zu vergebende Marker-ID
    pub(crate) next_id: u64,
}

impl MeasurementEngine {
    /// Erstellt eine Engine mit leerem Puffer.
    pub fn new() -> Self {
        Self {
            buffer: MarkerBuffer::new(),
            next_id: 1,
        }
    }

    /// Aktuelle Phase des Mess-Ablaufs.
    pub fn phase(&self) -> MeasurementPhase {
        match self.buffer.len() {
            0 => MeasurementPhase::Empty,
            1 => MeasurementPhase::OnePoint,
            _ => MeasurementPhase::TwoPoints,
        }
    }

    /// Aktuell gehaltene Marker (älteste zuerst).
    pub fn markers(&self) -> &[Marker] {
        self.buffer.current()
    }

    /// Anzahl der seit Session-Start gesetzten Marker.
    pub fn placed_count(&self) -> u64 {
        self.next_id - 1
    }

    /// Verwirft alle Marker und beginnt die ID-Vergabe neu.
    ///
    /// Gibt die verworfenen Marker zurück, damit der Renderer sie entfernen kann.
    pub fn reset(&mut self) -> Vec<Marker> {
        self.next_id = 1;
        self.buffer.clear()
    }

    pub(crate) fn allocate_id(&mut self) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for MeasurementEngine {
    fn default() -> Self {
        Self::new()
    }
}
