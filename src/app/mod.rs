//! Application-Layer: Controller, State, Events, Engine und Handler.

pub mod controller;
pub mod engine;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod ports;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Engine, Label, Session).
pub mod state;

pub use controller::AppController;
pub use engine::{MeasurementEngine, MeasurementPhase, PlacementOutcome};
pub use events::{AppCommand, AppIntent};
pub use ports::{flush, MarkerRenderer, MeasurementLabel, SceneUpdate};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SessionStatus};
