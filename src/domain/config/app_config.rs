//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::playback::ContainerHint;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub recordings_dir: Option<String>,
    pub audio_mode: Option<usize>,
    pub format: Option<String>,
}

impl AppConfig {
    /// Create config with default values.
    ///
    /// The recordings directory is platform specific and left unset here;
    /// the config store supplies it.
    pub fn defaults() -> Self {
        Self {
            recordings_dir: None,
            audio_mode: Some(0),
            format: Some(ContainerHint::default().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            recordings_dir: other.recordings_dir.or(self.recordings_dir),
            audio_mode: other.audio_mode.or(self.audio_mode),
            format: other.format.or(self.format),
        }
    }

    /// Configured recordings directory, if any
    pub fn recordings_path(&self) -> Option<PathBuf> {
        self.recordings_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Get the audio mode index, or 0 if not set
    pub fn audio_mode_or_default(&self) -> usize {
        self.audio_mode.unwrap_or(0)
    }

    /// Get format as parsed ContainerHint, or default if not set/invalid
    pub fn format_or_default(&self) -> ContainerHint {
        self.format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.audio_mode, Some(0));
        assert_eq!(config.format, Some("wav".to_string()));
        assert!(config.recordings_dir.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.recordings_dir.is_none());
        assert!(config.audio_mode.is_none());
        assert!(config.format.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            recordings_dir: Some("/base".to_string()),
            audio_mode: Some(2),
            format: Some("flac".to_string()),
        };

        let other = AppConfig {
            recordings_dir: Some("/other".to_string()),
            audio_mode: None, // Should not override
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.recordings_dir, Some("/other".to_string()));
        assert_eq!(merged.audio_mode, Some(2));
        assert_eq!(merged.format, Some("flac".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            audio_mode: Some(4),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.audio_mode, Some(4));
    }

    #[test]
    fn audio_mode_defaults_to_zero() {
        assert_eq!(AppConfig::empty().audio_mode_or_default(), 0);
    }

    #[test]
    fn format_or_default_parses() {
        let config = AppConfig {
            format: Some("ogg".to_string()),
            ..Default::default()
        };
        assert_eq!(config.format_or_default(), ContainerHint::Ogg);
    }

    #[test]
    fn format_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            format: Some("caf".to_string()),
            ..Default::default()
        };
        assert_eq!(config.format_or_default(), ContainerHint::Wav);
    }

    #[test]
    fn recordings_path_uses_configured() {
        let config = AppConfig {
            recordings_dir: Some("/srv/memos".to_string()),
            ..Default::default()
        };
        assert_eq!(config.recordings_path(), Some(PathBuf::from("/srv/memos")));
    }

    #[test]
    fn blank_recordings_dir_is_unset() {
        let config = AppConfig {
            recordings_dir: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.recordings_path().is_none());
        assert!(AppConfig::empty().recordings_path().is_none());
    }
}
