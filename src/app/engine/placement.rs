//! Punkt-Platzierung (`place_point`) der Mess-Engine.

use super::state::MeasurementEngine;
use crate::core::{Marker, MeasurementResult};
use glam::Vec3;

/// Ergebnis eines `place_point`-Aufrufs — reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOutcome {
    /// Messung zum vorherigen Marker (nur wenn ein Vorgänger existiert)
    pub measurement: Option<MeasurementResult>,
    /// Neu zu zeichnende Marker
    pub to_render: Vec<Marker>,
    /// Zu entfernende Marker (verdrängt durch den Puffer)
    pub to_remove: Vec<Marker>,
}

impl MeasurementEngine {
    /// Setzt einen Marker an einer bereits aufgelösten Weltposition.
    ///
    /// Fehlgeschlagene Hit-Tests erreichen diese Methode nie.
    pub fn place_point(&mut self, world_pos: Vec3) -> PlacementOutcome {
        let marker = Marker::new(self.allocate_id(), world_pos);
        let event = self.buffer.insert(marker);

        let measurement = self
            .buffer
            .previous_of(&event.inserted)
            .map(|previous| MeasurementResult::between(previous.position, marker.position));

        log::debug!(
            "Marker {} bei {:?} gesetzt ({} verdrängt, Messung: {:?})",
            marker.id,
            world_pos,
            event.evicted.len(),
            measurement.map(|m| m.distance_cm)
        );

        PlacementOutcome {
            measurement,
            to_render: vec![marker],
            to_remove: event.evicted,
        }
    }
}
