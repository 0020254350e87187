//! Playback observer port

/// Receives playback lifecycle notifications from the controller
pub trait PlaybackObserver: Send {
    /// Called before the engine is acquired for a new playback
    fn on_playback_starting(&mut self);

    /// Called at the start of every stop sequence
    fn on_playback_finished(&mut self);
}
