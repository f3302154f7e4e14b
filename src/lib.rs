//! AR-Lineal Library.
//! Mess-Kern als Library exportiert für Tests und Wiederverwendung.
//!
//! Tracking, Hit-Test, 3D-Rendering und UI sind externe Kollaborateure:
//! der Host liefert aufgelöste Weltpositionen als [`AppIntent`] und erhält
//! Marker- und Label-Anweisungen über [`MarkerRenderer`] / [`MeasurementLabel`].

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    flush, AppCommand, AppController, AppIntent, AppState, MarkerRenderer, MeasurementEngine,
    MeasurementLabel, MeasurementPhase, PlacementOutcome, SceneUpdate, SessionStatus,
};
pub use core::{
    BufferEvent, Marker, MarkerBuffer, MarkerId, MeasurementResult, DEFAULT_MEASUREMENT_TEXT,
};
pub use shared::{MarkerStyle, RenderScene, RulerOptions, Shading};
