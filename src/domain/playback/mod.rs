//! Playback domain module

mod hint;
mod mode;
mod state;

pub use hint::ContainerHint;
pub use mode::{resolve_mode, AudioMode, SessionOptions, ALL_MODES};
pub use state::PlaybackState;
