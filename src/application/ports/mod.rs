//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_engine;
pub mod audio_session;
pub mod config;
pub mod observer;
pub mod preferences;

// Re-export common types
pub use audio_engine::{
    AudioEngine, EngineEvent, EngineEventKind, EngineEventSender, EngineInstance, SessionId,
};
pub use audio_session::AudioSession;
pub use config::ConfigStore;
pub use observer::PlaybackObserver;
pub use preferences::PreferenceStore;
