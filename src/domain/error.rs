//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error when an unknown audio mode name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid audio mode: \"{input}\". Valid modes are: default, voice-chat, video-chat, video-recording, measurement, movie-playback, spoken-audio, voice-prompt, game-chat")]
pub struct InvalidAudioModeError {
    pub input: String,
}

/// Error when an unknown container hint is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid format: \"{input}\". Valid formats are: auto, wav, flac, ogg")]
pub struct InvalidContainerHintError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Errors raised by the recording store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The recordings directory could not be listed
    #[error("Failed to list recordings in {}: {message}", path.display())]
    Enumeration { path: PathBuf, message: String },

    /// A recording file could not be removed
    #[error("Failed to delete {}: {message}", path.display())]
    Deletion { path: PathBuf, message: String },

    #[error("No recording at index {index} (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while starting or stopping playback
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    /// The platform rejected the audio session configuration
    #[error("Audio session configuration failed: {0}")]
    SessionConfiguration(String),

    /// The recording could not be read from disk
    #[error("Failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// The recording bytes are not playable audio
    #[error("Failed to decode audio: {0}")]
    Decode(String),

    /// No output is available to bind an engine instance to
    #[error("Audio engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The audio session refused to deactivate
    #[error("Audio session teardown failed: {0}")]
    SessionTeardown(String),
}
