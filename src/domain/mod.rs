//! Domain layer - Core values and state
//!
//! Contains value objects, playback state and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod playback;
pub mod recording;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use playback::{AudioMode, ContainerHint, PlaybackState, SessionOptions};
pub use recording::Recording;
