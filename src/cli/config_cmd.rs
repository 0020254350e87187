//! Config command handler

use crate::application::ports::{ConfigStore, PreferenceStore};
use crate::domain::error::ConfigError;
use crate::domain::playback::{AudioMode, ContainerHint, ALL_MODES};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore + PreferenceStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore + PreferenceStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    // The mode slot belongs to the preference port
    if key == "audio_mode" {
        let mode = parse_mode(key, value)?;
        store.set_audio_mode_index(mode.index()).await?;
        presenter.success(&format!("{} = {}", key, describe_mode(mode.index())));
        return Ok(());
    }

    let mut config = store.load().await?;

    let shown = match key {
        "recordings_dir" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Directory must not be empty".to_string(),
                });
            }
            config.recordings_dir = Some(value.to_string());
            value.to_string()
        }
        "format" => {
            let hint = value
                .parse::<ContainerHint>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
            config.format = Some(hint.to_string());
            hint.to_string()
        }
        _ => unreachable!(), // Already validated
    };

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "recordings_dir" => config.recordings_dir,
        "audio_mode" => config.audio_mode.map(describe_mode),
        "format" => config.format,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "recordings_dir",
        config.recordings_dir.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value(
        "audio_mode",
        &config
            .audio_mode
            .map(describe_mode)
            .unwrap_or_else(|| NOT_SET.to_string()),
    );
    presenter.key_value("format", config.format.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn parse_mode(key: &str, value: &str) -> Result<AudioMode, ConfigError> {
    AudioMode::parse_name_or_index(value).map_err(|e| ConfigError::ValidationError {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Render a mode index as "index (Title)"
fn describe_mode(index: usize) -> String {
    match ALL_MODES.get(index) {
        Some(mode) => format!("{} ({})", index, mode.title()),
        None => format!("{} (unknown)", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn describe_known_mode() {
        assert_eq!(describe_mode(1), "1 (Voice Chat)");
    }

    #[test]
    fn describe_unknown_mode() {
        assert_eq!(describe_mode(40), "40 (unknown)");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = validate_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
    }

    #[test]
    fn parse_mode_by_name_and_index() {
        assert_eq!(parse_mode("audio_mode", "spoken-audio").unwrap(), AudioMode::SpokenAudio);
        assert_eq!(parse_mode("audio_mode", "4").unwrap(), AudioMode::Measurement);
        assert!(parse_mode("audio_mode", "loud").is_err());
    }

    #[tokio::test]
    async fn set_audio_mode_by_name_stores_index() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "audio_mode", "game-chat")
            .await
            .unwrap();

        assert_eq!(store.audio_mode_index().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn set_audio_mode_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "format", "flac").await.unwrap();
        handle_set(&store, &presenter, "audio_mode", "3").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.audio_mode, Some(3));
        assert_eq!(config.format.as_deref(), Some("flac"));
    }

    #[tokio::test]
    async fn invalid_audio_mode_is_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        assert!(handle_set(&store, &presenter, "audio_mode", "99").await.is_err());
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn set_invalid_format_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let err = handle_set(&store, &presenter, "format", "caf")
            .await
            .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(!store.exists());
    }
}
