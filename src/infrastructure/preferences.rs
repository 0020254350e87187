//! Process-local audio mode preference

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::PreferenceStore;
use crate::domain::error::ConfigError;

/// Preference held in memory for one run (the `--mode` flag).
///
/// The persisted preference is the settings file itself, see
/// [`XdgConfigStore`](super::XdgConfigStore).
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    index: AtomicUsize,
}

impl InMemoryPreferenceStore {
    pub fn new(index: usize) -> Self {
        Self {
            index: AtomicUsize::new(index),
        }
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn audio_mode_index(&self) -> Result<usize, ConfigError> {
        Ok(self.index.load(Ordering::SeqCst))
    }

    async fn set_audio_mode_index(&self, index: usize) -> Result<(), ConfigError> {
        self.index.store(index, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn holds_the_override() {
        let prefs = InMemoryPreferenceStore::new(2);
        assert_eq!(prefs.audio_mode_index().await.unwrap(), 2);
        prefs.set_audio_mode_index(7).await.unwrap();
        assert_eq!(prefs.audio_mode_index().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn default_is_first_mode() {
        let prefs = InMemoryPreferenceStore::default();
        assert_eq!(prefs.audio_mode_index().await.unwrap(), 0);
    }
}
