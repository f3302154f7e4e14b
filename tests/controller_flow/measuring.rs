use super::Harness;
use ar_ruler::{AppIntent, MeasurementPhase, DEFAULT_MEASUREMENT_TEXT};

#[test]
fn test_label_shows_default_before_any_measurement() {
    let mut h = Harness::default();
    assert_eq!(h.state.measurement_text, DEFAULT_MEASUREMENT_TEXT);

    h.tap(0.0, 0.0, 0.0);

    assert_eq!(h.state.measurement_text, "0 centimetros");
    assert!(h.label.texts.is_empty());
    assert_eq!(h.visible_ids(), vec![1]);
}

#[test]
fn test_two_taps_measure_five_centimeters() {
    let mut h = Harness::default();
    h.tap(0.0, 0.0, 0.0);
    h.tap(0.05, 0.0, 0.0);

    assert_eq!(h.label.texts, vec!["5.00 centimetros"]);
    assert_eq!(h.visible_ids(), vec![1, 2]);
    assert_eq!(h.scene.removed, 0);
    assert_eq!(h.state.engine.phase(), MeasurementPhase::TwoPoints);
}

#[test]
fn test_third_tap_clears_pair_and_keeps_label() {
    let mut h = Harness::default();
    h.tap(0.0, 0.0, 0.0);
    h.tap(0.05, 0.0, 0.0);
    h.tap(1.0, 0.0, 0.0);

    assert_eq!(h.visible_ids(), vec![3]);
    assert_eq!(h.scene.removed, 2);
    assert_eq!(h.state.marker_count(), 1);
    // keine neue Messung → Label bleibt
    assert_eq!(h.state.measurement_text, "5.00 centimetros");
    assert_eq!(h.label.texts.len(), 1);
}

#[test]
fn test_fourth_tap_measures_against_third() {
    let mut h = Harness::default();
    h.tap(0.0, 0.0, 0.0);
    h.tap(0.05, 0.0, 0.0);
    h.tap(1.0, 0.0, 0.0);
    h.tap(1.1, 0.0, 0.0);

    assert_eq!(h.state.measurement_text, "10.00 centimetros");
    assert_eq!(h.visible_ids(), vec![3, 4]);
    assert_eq!(h.scene.added, 4);
}

#[test]
fn test_failed_hit_test_changes_nothing() {
    let mut h = Harness::default();
    h.tap(0.0, 0.0, 0.0);

    h.controller
        .handle_intent(&mut h.state, AppIntent::HitTestFailed)
        .expect("HitTestFailed sollte ohne Fehler durchlaufen");

    assert!(h.state.pending_scene_updates().is_empty());
    assert_eq!(h.state.marker_count(), 1);
    assert_eq!(h.scene.added, 1);
}

#[test]
fn test_display_decimals_follow_options() {
    let mut h = Harness::default();
    let mut options = h.state.options.clone();
    options.display_decimals = 1;
    h.send(AppIntent::OptionsChanged { options });

    h.tap(0.0, 0.0, 0.0);
    h.tap(0.0, 0.123, 0.0);

    assert_eq!(h.state.measurement_text, "12.3 centimetros");
    assert_eq!(h.label.texts, vec!["12.3 centimetros"]);
}

#[test]
fn test_render_scene_matches_visible_markers() {
    let mut h = Harness::default();
    h.tap(0.0, 0.0, 0.0);
    h.tap(0.0, 0.0, 0.2);
    h.tap(0.3, 0.0, 0.0);

    let scene = h.controller.build_render_scene(&h.state);
    let scene_ids: Vec<u64> = scene.markers.iter().map(|m| m.id.0).collect();
    assert_eq!(scene_ids, h.visible_ids());
    assert_eq!(scene.marker_style.radius, 0.01);
}
