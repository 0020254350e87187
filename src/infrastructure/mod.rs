//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio output, the filesystem and the config file.

pub mod audio;
pub mod config;
pub mod preferences;

// Re-export adapters
pub use audio::{create_rodio_backend, RodioAudioEngine, RodioAudioSession};
pub use config::{default_recordings_dir, XdgConfigStore};
pub use preferences::InMemoryPreferenceStore;
