//! AR-Lineal (Demo-Host).
//!
//! Ersetzt Tracking, Renderer und UI durch eine Zeilen-Schnittstelle auf stdin:
//!
//! - `x y z` — Tap mit aufgelöster Weltposition (Meter)
//! - `miss` — Tap ohne Feature-Punkt
//! - `start` / `pause` / `interrupt` / `resume` — Session-Lebenszyklus
//! - `fail <meldung>` — Session-Fehler
//! - `decimals <n>` — Nachkommastellen des Labels ändern
//! - `save` — aktuelle Optionen nach `ar_ruler.toml` schreiben
//!
//! Renderer- und Label-Aufrufe werden auf stdout ausgegeben.

use ar_ruler::{
    flush, AppController, AppIntent, AppState, Marker, MarkerId, MarkerRenderer, MarkerStyle,
    MeasurementLabel, RulerOptions,
};
use std::io::BufRead;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("AR-Lineal v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = RulerOptions::config_path();
        let options = RulerOptions::load_from_file(&config_path);

        let mut app = RulerApp::new(options);
        app.handle(AppIntent::SessionStarted);

        let stdin = std::io::stdin();
        for (line_no, line) in stdin.lock().lines().enumerate() {
            let line = line?;
            match parse_line(&line, &app.state.options, &config_path) {
                Ok(Some(intent)) => app.handle(intent),
                Ok(None) => {}
                Err(e) => log::warn!("Zeile {}: {:#}", line_no + 1, e),
            }
        }

        app.handle(AppIntent::SessionPaused);
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct RulerApp {
    state: AppState,
    controller: AppController,
    scene: ConsoleScene,
    label: ConsoleLabel,
}

impl RulerApp {
    fn new(options: RulerOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            scene: ConsoleScene,
            label: ConsoleLabel,
        }
    }

    fn handle(&mut self, intent: AppIntent) {
        if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
        flush(&mut self.state, &mut self.scene, &mut self.label);
    }
}

/// Übersetzt eine Eingabezeile in einen Intent. Leerzeilen und `#`-Kommentare → `None`.
///
/// `options` und `config_path` werden für `decimals` und `save` benötigt.
fn parse_line(
    line: &str,
    options: &RulerOptions,
    config_path: &Path,
) -> anyhow::Result<Option<AppIntent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(k, r)| (k, r.trim()));

    let intent = match (keyword, rest) {
        ("miss", "") => AppIntent::HitTestFailed,
        ("start", "") => AppIntent::SessionStarted,
        ("pause", "") => AppIntent::SessionPaused,
        ("interrupt", "") => AppIntent::SessionInterrupted,
        ("resume", "") => AppIntent::SessionInterruptionEnded,
        ("save", "") => AppIntent::SaveOptionsRequested {
            path: config_path.to_path_buf(),
        },
        ("fail", message) => AppIntent::SessionFailed {
            message: message.to_string(),
        },
        ("decimals", value) => AppIntent::OptionsChanged {
            options: RulerOptions {
                display_decimals: value.parse()?,
                ..options.clone()
            },
        },
        _ => {
            let coords = line
                .split_whitespace()
                .map(str::parse::<f32>)
                .collect::<Result<Vec<_>, _>>()?;
            let [x, y, z] = coords[..] else {
                anyhow::bail!("erwartet 3 Koordinaten, erhalten {}", coords.len());
            };
            AppIntent::HitResolved {
                world_pos: glam::Vec3::new(x, y, z),
            }
        }
    };
    Ok(Some(intent))
}

struct ConsoleScene;

impl MarkerRenderer for ConsoleScene {
    fn add_marker(&mut self, marker: &Marker, style: &MarkerStyle) {
        println!(
            "+ Marker {} bei ({:.3}, {:.3}, {:.3}) r={} {:?}",
            marker.id,
            marker.position.x,
            marker.position.y,
            marker.position.z,
            style.radius,
            style.shading
        );
    }

    fn remove_marker(&mut self, id: MarkerId) {
        println!("- Marker {}", id);
    }
}

struct ConsoleLabel;

impl MeasurementLabel for ConsoleLabel {
    fn set_measurement_text(&mut self, text: &str) {
        println!("= {}", text);
    }
}
