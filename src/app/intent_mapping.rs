//! Mapping von Tracking-/UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, SessionStatus};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::HitResolved { world_pos } => {
            if world_pos.is_finite() {
                vec![AppCommand::PlacePoint { world_pos }]
            } else {
                log::warn!("Hit-Position ungültig ({:?}), Tap verworfen", world_pos);
                vec![]
            }
        }
        AppIntent::HitTestFailed => {
            log::debug!("Kein Feature-Punkt getroffen, Tap verworfen");
            vec![]
        }
        AppIntent::SessionStarted => vec![
            AppCommand::ResetMeasurement,
            AppCommand::SetSessionStatus {
                status: SessionStatus::Running,
            },
        ],
        AppIntent::SessionPaused => vec![
            AppCommand::ResetMeasurement,
            AppCommand::SetSessionStatus {
                status: SessionStatus::Paused,
            },
        ],
        AppIntent::SessionFailed { message } => vec![AppCommand::SetSessionStatus {
            status: SessionStatus::Failed { message },
        }],
        AppIntent::SessionInterrupted => vec![AppCommand::SetSessionStatus {
            status: SessionStatus::Interrupted,
        }],
        AppIntent::SessionInterruptionEnded => vec![AppCommand::SetSessionStatus {
            status: SessionStatus::Running,
        }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}
