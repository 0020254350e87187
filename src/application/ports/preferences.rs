//! Preference store port
//!
//! Holds the single persisted playback preference: the index of the
//! selected audio mode among the modes the audio session offers.

use async_trait::async_trait;

use crate::domain::error::ConfigError;

/// Read/write accessor for the selected audio mode
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Index of the selected audio mode (0 when never set)
    async fn audio_mode_index(&self) -> Result<usize, ConfigError>;

    /// Persist a new audio mode index
    async fn set_audio_mode_index(&self, index: usize) -> Result<(), ConfigError>;
}

#[async_trait]
impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    async fn audio_mode_index(&self) -> Result<usize, ConfigError> {
        (**self).audio_mode_index().await
    }

    async fn set_audio_mode_index(&self, index: usize) -> Result<(), ConfigError> {
        (**self).set_audio_mode_index(index).await
    }
}
