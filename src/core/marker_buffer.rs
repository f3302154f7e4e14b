//! Begrenzter Puffer der zuletzt gesetzten Marker.
//!
//! Der Puffer hält höchstens zwei Marker. Der dritte Marker löst ein
//! Zurücksetzen aus: alle bisherigen Marker werden verworfen und der Puffer
//! enthält danach nur noch den neuen Marker. Der folgende Marker bildet
//! wieder ein vollständiges Paar.

use super::Marker;

/// Ergebnis eines `insert`-Aufrufs.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferEvent {
    /// Der eingefügte Marker
    pub inserted: Marker,
    /// Verdrängte Marker (älteste zuerst), leer solange die Kapazität reicht
    pub evicted: Vec<Marker>,
}

/// Geordnete Marker-Folge mit fester Kapazität (älteste zuerst).
#[derive(Debug, Clone, Default)]
pub struct MarkerBuffer {
    markers: Vec<Marker>,
}

impl MarkerBuffer {
    /// Maximale Anzahl gleichzeitig gehaltener Marker.
    pub const CAPACITY: usize = 2;

    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self {
            markers: Vec::with_capacity(Self::CAPACITY + 1),
        }
    }

    /// Hängt einen Marker an.
    ///
    /// Überschreitet die Länge danach `CAPACITY`, werden alle vorher
    /// gehaltenen Marker als verdrängt gemeldet und nur `marker` bleibt übrig.
    pub fn insert(&mut self, marker: Marker) -> BufferEvent {
        self.markers.push(marker);

        if self.markers.len() <= Self::CAPACITY {
            return BufferEvent {
                inserted: marker,
                evicted: Vec::new(),
            };
        }

        let mut evicted = std::mem::take(&mut self.markers);
        evicted.pop();
        self.markers.push(marker);

        BufferEvent {
            inserted: marker,
            evicted,
        }
    }

    /// Read-only Sicht auf die gehaltenen Marker (0–2 Elemente).
    pub fn current(&self) -> &[Marker] {
        &self.markers
    }

    /// Gibt den direkten Vorgänger von `marker` zurück.
    ///
    /// `None`, wenn `marker` das einzige Element ist oder nicht im Puffer liegt.
    pub fn previous_of(&self, marker: &Marker) -> Option<Marker> {
        let index = self.markers.iter().position(|m| m.id == marker.id)?;
        index.checked_sub(1).map(|prev| self.markers[prev])
    }

    /// Anzahl gehaltener Marker.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker gehalten werden.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Leert den Puffer und gibt die verworfenen Marker zurück.
    pub fn clear(&mut self) -> Vec<Marker> {
        std::mem::take(&mut self.markers)
    }
}
