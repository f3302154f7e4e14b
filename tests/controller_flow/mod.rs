use ar_ruler::{flush, AppIntent, Marker, MarkerId, MarkerRenderer, MarkerStyle, MeasurementLabel};
use std::collections::BTreeMap;

mod measuring;
mod options;
mod session;

/// Renderer-Attrappe: hält die aktuell gezeichneten Marker.
#[derive(Default)]
pub struct FakeScene {
    pub visible: BTreeMap<MarkerId, Marker>,
    pub added: usize,
    pub removed: usize,
}

impl MarkerRenderer for FakeScene {
    fn add_marker(&mut self, marker: &Marker, _style: &MarkerStyle) {
        self.visible.insert(marker.id, *marker);
        self.added += 1;
    }

    fn remove_marker(&mut self, id: MarkerId) {
        assert!(
            self.visible.remove(&id).is_some(),
            "Marker {id} war nicht gezeichnet"
        );
        self.removed += 1;
    }
}

/// Label-Attrappe: merkt sich alle gesetzten Texte.
#[derive(Default)]
pub struct FakeLabel {
    pub texts: Vec<String>,
}

impl MeasurementLabel for FakeLabel {
    fn set_measurement_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }
}

/// Host-Attrappe aus State, Controller, Renderer und Label.
#[derive(Default)]
pub struct Harness {
    pub state: ar_ruler::AppState,
    pub controller: ar_ruler::AppController,
    pub scene: FakeScene,
    pub label: FakeLabel,
}

impl Harness {
    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
        flush(&mut self.state, &mut self.scene, &mut self.label);
    }

    pub fn tap(&mut self, x: f32, y: f32, z: f32) {
        self.send(AppIntent::HitResolved {
            world_pos: glam::Vec3::new(x, y, z),
        });
    }

    pub fn visible_ids(&self) -> Vec<u64> {
        self.scene.visible.keys().map(|id| id.0).collect()
    }
}
