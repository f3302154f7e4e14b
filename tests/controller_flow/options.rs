use super::Harness;
use ar_ruler::{AppIntent, RulerOptions};

#[test]
fn test_options_changed_clamps_display_decimals() {
    let mut h = Harness::default();
    let options = RulerOptions {
        display_decimals: usize::MAX,
        ..RulerOptions::default()
    };
    h.send(AppIntent::OptionsChanged { options });

    assert_eq!(h.state.options.display_decimals, 6);

    h.tap(0.0, 0.0, 0.0);
    h.tap(0.05, 0.0, 0.0);
    assert!(h.state.measurement_text.len() < 32);
    assert!(h.state.measurement_text.ends_with(" centimetros"));
}

#[test]
fn test_save_options_writes_current_options() {
    let path = std::env::temp_dir().join(format!(
        "ar_ruler_controller_save_{}.toml",
        std::process::id()
    ));
    let mut h = Harness::default();
    let mut options = h.state.options.clone();
    options.display_decimals = 3;
    h.send(AppIntent::OptionsChanged { options });

    h.send(AppIntent::SaveOptionsRequested { path: path.clone() });

    let loaded = RulerOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, h.state.options);
    assert_eq!(loaded.display_decimals, 3);
}

#[test]
fn test_save_options_into_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("ar_ruler_missing_dir_7c1e")
        .join("ar_ruler.toml");
    let mut h = Harness::default();

    let result = h
        .controller
        .handle_intent(&mut h.state, AppIntent::SaveOptionsRequested { path });

    assert!(result.is_err());
}
