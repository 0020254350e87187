//! App runners for one-shot commands

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::sync::mpsc;

use crate::application::ports::{ConfigStore, EngineEvent, PreferenceStore};
use crate::application::{PlaybackConfig, PlaybackController, RecordingStore};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::playback::{AudioMode, ContainerHint, PlaybackState};
use crate::domain::recording::Recording;
use crate::infrastructure::{
    create_rodio_backend, default_recordings_dir, InMemoryPreferenceStore, RodioAudioEngine,
    RodioAudioSession, XdgConfigStore,
};

use super::args::RunOptions;
use super::observer::CliObserver;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Controller wired to the rodio backend and terminal observer
pub type CliController =
    PlaybackController<RodioAudioSession, RodioAudioEngine, Box<dyn PreferenceStore>, CliObserver>;

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    XdgConfigStore::defaults().merge(file_config).merge(cli_config)
}

/// Resolve run options from the merged config and the non-persistent mode flag
pub fn resolve_run_options(
    config: &AppConfig,
    mode: Option<&str>,
) -> Result<RunOptions, ConfigError> {
    let mode_override = mode
        .map(|m| {
            AudioMode::parse_name_or_index(m)
                .map(|mode| mode.index())
                .map_err(|e| ConfigError::ValidationError {
                    key: "mode".to_string(),
                    message: e.to_string(),
                })
        })
        .transpose()?;

    let hint = match config.format.as_deref() {
        Some(format) => format
            .parse::<ContainerHint>()
            .map_err(|e| ConfigError::ValidationError {
                key: "format".to_string(),
                message: e.to_string(),
            })?,
        None => ContainerHint::default(),
    };

    Ok(RunOptions {
        dir: config
            .recordings_path()
            .unwrap_or_else(default_recordings_dir),
        mode_override,
        hint,
    })
}

/// Build the playback controller for a run
pub fn build_controller(
    options: &RunOptions,
    observer: CliObserver,
) -> (CliController, mpsc::UnboundedReceiver<EngineEvent>) {
    let preferences: Box<dyn PreferenceStore> = match options.mode_override {
        Some(index) => Box::new(InMemoryPreferenceStore::new(index)),
        None => Box::new(XdgConfigStore::new()),
    };
    let (session, engine) = create_rodio_backend();
    PlaybackController::new(
        session,
        engine,
        preferences,
        observer,
        PlaybackConfig::new(options.hint),
    )
}

async fn load_store(dir: PathBuf, presenter: &Presenter) -> Option<RecordingStore> {
    let mut store = RecordingStore::new(dir);
    if let Err(e) = store.load().await {
        presenter.error(&e.to_string());
        return None;
    }
    Some(store)
}

fn recording_at(store: &RecordingStore, index: usize, presenter: &Presenter) -> Option<Recording> {
    let recording = store.get(index).cloned();
    if recording.is_none() {
        presenter.error(&format!(
            "No recording at index {} ({} available)",
            index,
            store.len()
        ));
    }
    recording
}

/// List recordings
pub async fn run_list(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let Some(store) = load_store(options.dir, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };

    presenter.recording_list(store.recordings(), None);
    ExitCode::from(EXIT_SUCCESS)
}

/// Delete the recording at `index`
pub async fn run_delete(options: RunOptions, index: usize) -> ExitCode {
    let presenter = Presenter::new();
    let Some(mut store) = load_store(options.dir, &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };
    if recording_at(&store, index, &presenter).is_none() {
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    match store.delete(index).await {
        Ok(removed) => {
            presenter.success(&format!("Deleted {}", removed.name()));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Play the recording at `index` until it ends or Ctrl+C
pub async fn run_play(options: RunOptions, index: usize) -> ExitCode {
    let presenter = Presenter::new();
    let Some(store) = load_store(options.dir.clone(), &presenter).await else {
        return ExitCode::from(EXIT_ERROR);
    };
    let Some(recording) = recording_at(&store, index, &presenter) else {
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let (mut controller, mut events) = build_controller(&options, CliObserver::with_spinner());

    if let Err(e) = controller.play(&recording).await {
        controller
            .observer_mut()
            .presenter_mut()
            .spinner_fail(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }
    controller
        .observer_mut()
        .presenter_mut()
        .update_spinner(&format!("Playing {}", recording.name()));

    let interrupted = wait_for_end(&mut controller, &mut events).await;

    if interrupted {
        presenter.warn(&format!("Stopped {}", recording.name()));
    } else {
        presenter.success(&format!("Finished {}", recording.name()));
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Drive engine events until playback ends. Returns true if interrupted.
async fn wait_for_end(
    controller: &mut CliController,
    events: &mut mpsc::UnboundedReceiver<EngineEvent>,
) -> bool {
    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    return false;
                };
                controller.handle_engine_event(event).await;
                if controller.state() == PlaybackState::Idle {
                    return false;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                controller.stop().await;
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_config_values() {
        let config = AppConfig {
            recordings_dir: Some("/srv/memos".to_string()),
            format: Some("flac".to_string()),
            ..Default::default()
        };

        let options = resolve_run_options(&config, None).unwrap();
        assert_eq!(options.dir, PathBuf::from("/srv/memos"));
        assert_eq!(options.hint, ContainerHint::Flac);
        assert!(options.mode_override.is_none());
    }

    #[test]
    fn resolve_falls_back_to_platform_dir() {
        let options = resolve_run_options(&AppConfig::empty(), None).unwrap();
        assert_eq!(options.dir, default_recordings_dir());
        assert_eq!(options.hint, ContainerHint::Wav);
    }

    #[test]
    fn resolve_mode_override_by_name() {
        let options = resolve_run_options(&AppConfig::empty(), Some("measurement")).unwrap();
        assert_eq!(options.mode_override, Some(4));
    }

    #[test]
    fn resolve_rejects_unknown_mode() {
        let err = resolve_run_options(&AppConfig::empty(), Some("stadium")).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn resolve_rejects_unknown_format() {
        let config = AppConfig {
            format: Some("caf".to_string()),
            ..Default::default()
        };
        assert!(resolve_run_options(&config, None).is_err());
    }

    #[tokio::test]
    async fn load_store_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let presenter = Presenter::new();
        assert!(load_store(dir.path().join("missing"), &presenter).await.is_none());
    }
}
