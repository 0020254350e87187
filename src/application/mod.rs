//! Application layer - Use cases and port interfaces
//!
//! Contains the recording store and playback controller, and the trait
//! definitions for the systems they drive.

pub mod playback;
pub mod ports;
pub mod recordings;

// Re-export use cases
pub use playback::{PlaybackConfig, PlaybackController, FULL_VOLUME};
pub use recordings::RecordingStore;
