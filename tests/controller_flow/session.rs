use super::Harness;
use ar_ruler::{AppIntent, MeasurementPhase, SessionStatus, DEFAULT_MEASUREMENT_TEXT};

#[test]
fn test_session_start_resets_previous_markers() {
    let mut h = Harness::default();
    h.send(AppIntent::SessionStarted);
    h.tap(0.0, 0.0, 0.0);
    h.tap(0.05, 0.0, 0.0);
    assert_eq!(h.visible_ids(), vec![1, 2]);

    h.send(AppIntent::SessionStarted);

    assert!(h.scene.visible.is_empty());
    assert_eq!(h.state.engine.phase(), MeasurementPhase::Empty);
    assert_eq!(h.state.measurement_text, DEFAULT_MEASUREMENT_TEXT);
    assert_eq!(h.label.texts.last().map(String::as_str), Some("0 centimetros"));
    assert!(h.state.session.is_running());
}

#[test]
fn test_session_pause_discards_buffer() {
    let mut h = Harness::default();
    h.send(AppIntent::SessionStarted);
    h.tap(0.0, 0.0, 0.0);

    h.send(AppIntent::SessionPaused);

    assert_eq!(h.state.session, SessionStatus::Paused);
    assert_eq!(h.state.marker_count(), 0);
    assert!(h.scene.visible.is_empty());

    // nach Neustart beginnt die Zählung wieder bei 1, erster Tap misst nicht
    h.send(AppIntent::SessionStarted);
    h.tap(0.2, 0.0, 0.0);
    assert_eq!(h.visible_ids(), vec![1]);
    assert_eq!(h.state.measurement_text, DEFAULT_MEASUREMENT_TEXT);
}

#[test]
fn test_session_failure_keeps_measurement_state() {
    let mut h = Harness::default();
    h.send(AppIntent::SessionStarted);
    h.tap(0.0, 0.0, 0.0);
    h.tap(0.05, 0.0, 0.0);

    h.send(AppIntent::SessionFailed {
        message: "Sensor nicht verfügbar".to_string(),
    });

    assert_eq!(
        h.state.session,
        SessionStatus::Failed {
            message: "Sensor nicht verfügbar".to_string()
        }
    );
    assert_eq!(h.visible_ids(), vec![1, 2]);
    assert_eq!(h.state.measurement_text, "5.00 centimetros");
}

#[test]
fn test_interruption_roundtrip_keeps_markers() {
    let mut h = Harness::default();
    h.send(AppIntent::SessionStarted);
    h.tap(0.0, 0.0, 0.0);

    h.send(AppIntent::SessionInterrupted);
    assert_eq!(h.state.session, SessionStatus::Interrupted);

    h.send(AppIntent::SessionInterruptionEnded);
    assert!(h.state.session.is_running());

    h.tap(0.0, 0.1, 0.0);
    assert_eq!(h.state.measurement_text, "10.00 centimetros");

    let last = h
        .state
        .engine
        .markers()
        .last()
        .expect("Es sollte ein Marker gesetzt sein");
    assert_eq!(last.position.y, 0.1);
    assert_eq!(h.visible_ids(), vec![1, 2]);
}
