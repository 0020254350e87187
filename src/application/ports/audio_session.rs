//! Audio session port
//!
//! The shared output resource that must be configured and activated
//! before an engine instance can produce sound.

use async_trait::async_trait;

use crate::domain::error::PlaybackError;
use crate::domain::playback::{AudioMode, SessionOptions};

/// Port for the platform audio session
#[async_trait]
pub trait AudioSession: Send + Sync {
    /// Modes this session can be configured with, in index order
    fn available_modes(&self) -> Vec<AudioMode>;

    /// Name of the device audio is currently routed to, if known
    fn output_route(&self) -> Option<String> {
        None
    }

    /// Configure the session for simultaneous record and playback
    async fn configure(&self, mode: AudioMode, options: SessionOptions) -> Result<(), PlaybackError>;

    /// Activate the session. Must be called after `configure`.
    async fn activate(&self) -> Result<(), PlaybackError>;

    /// Deactivate the session so other processes may resume audio.
    /// Deactivating an inactive session is not an error.
    async fn deactivate(&self) -> Result<(), PlaybackError>;
}
