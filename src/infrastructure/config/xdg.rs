//! Settings file under the XDG config directory
//!
//! `$XDG_CONFIG_HOME/voice-memos/config.toml` on Linux, the platform
//! equivalent elsewhere. The same file backs the audio mode preference, so
//! `config set audio_mode` and the playback controller share one slot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{ConfigStore, PreferenceStore};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "voice-memos";
const FILE_NAME: &str = "config.toml";

const STARTER_HEADER: &str = "\
# voice-memos settings
#
# recordings_dir  directory listed by `voice-memos list`
# audio_mode      index of the audio mode used for playback (0 = default)
# format          expected recording format: auto, wav, flac or ogg

";

/// Directory listed when neither the settings file nor `--dir` name one
pub fn default_recordings_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join("recordings"))
        .unwrap_or_else(|| PathBuf::from("recordings"))
}

/// TOML settings file
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Store at the platform config location
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(FILE_NAME))
    }

    /// Store at an explicit file location
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Built-in settings, including the platform recordings directory
    pub fn defaults() -> AppConfig {
        AppConfig {
            recordings_dir: Some(default_recordings_dir().to_string_lossy().into_owned()),
            ..AppConfig::defaults()
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn decode(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn encode(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Replace the file through a sibling temp file so readers never see half a write
    async fn write_file(&self, content: String) -> Result<(), ConfigError> {
        let write_error = |e: std::io::Error| ConfigError::WriteError(e.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        let staging = staging_path(&self.path);
        fs::write(&staging, content).await.map_err(write_error)?;
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(write_error(e));
        }
        log::debug!("Wrote settings to {}", self.path.display());
        Ok(())
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::decode(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.write_file(Self::encode(config)?).await
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().into_owned(),
            ));
        }
        let body = Self::encode(&Self::defaults())?;
        self.write_file(format!("{}{}", STARTER_HEADER, body)).await
    }
}

#[async_trait]
impl PreferenceStore for XdgConfigStore {
    async fn audio_mode_index(&self) -> Result<usize, ConfigError> {
        Ok(self.load().await?.audio_mode_or_default())
    }

    async fn set_audio_mode_index(&self, index: usize) -> Result<(), ConfigError> {
        let mut config = self.load().await?;
        config.audio_mode = Some(index);
        self.save(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> XdgConfigStore {
        XdgConfigStore::with_path(dir.path().join("voice-memos").join("config.toml"))
    }

    #[test]
    fn default_location_is_app_scoped() {
        let path = XdgConfigStore::new().path();
        assert!(path.ends_with("voice-memos/config.toml"));
    }

    #[test]
    fn defaults_name_a_recordings_dir() {
        let defaults = XdgConfigStore::defaults();
        assert_eq!(
            defaults.recordings_path(),
            Some(default_recordings_dir())
        );
        assert_eq!(defaults.audio_mode, Some(0));
    }

    #[test]
    fn staging_file_sits_next_to_target() {
        assert_eq!(
            staging_path(Path::new("/etc/voice-memos/config.toml")),
            PathBuf::from("/etc/voice-memos/config.toml.tmp")
        );
    }

    #[test]
    fn decode_reads_every_key() {
        let config = XdgConfigStore::decode(
            "recordings_dir = \"/home/me/memos\"\naudio_mode = 3\nformat = \"flac\"\n",
        )
        .unwrap();
        assert_eq!(config.recordings_dir.as_deref(), Some("/home/me/memos"));
        assert_eq!(config.audio_mode, Some(3));
        assert_eq!(config.format.as_deref(), Some("flac"));
    }

    #[test]
    fn decode_rejects_non_numeric_mode() {
        let err = XdgConfigStore::decode("audio_mode = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = store_in(&dir).load().await.unwrap();
        assert!(config.audio_mode.is_none());
        assert!(config.recordings_dir.is_none());
    }

    #[tokio::test]
    async fn save_creates_parent_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let config = AppConfig {
            audio_mode: Some(2),
            format: Some("ogg".to_string()),
            ..Default::default()
        };
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.audio_mode, Some(2));
        assert_eq!(loaded.format.as_deref(), Some("ogg"));
        assert!(!staging_path(&store.path()).exists());
    }

    #[tokio::test]
    async fn init_writes_commented_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.init().await.unwrap();
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("# voice-memos settings"));
        assert!(store.load().await.unwrap().recordings_dir.is_some());

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn unset_preference_is_first_mode() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).audio_mode_index().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn preference_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set_audio_mode_index(5).await.unwrap();
        assert_eq!(store_in(&dir).audio_mode_index().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn preference_write_keeps_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&AppConfig {
                format: Some("flac".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        store.set_audio_mode_index(1).await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.format.as_deref(), Some("flac"));
        assert_eq!(config.audio_mode, Some(1));
    }
}
