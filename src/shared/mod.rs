//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod marker_style;
pub mod options;
mod render_scene;

pub use marker_style::{MarkerStyle, Shading};
pub use options::RulerOptions;
pub use render_scene::RenderScene;
