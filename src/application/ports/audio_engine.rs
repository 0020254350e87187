//! Audio engine port
//!
//! An engine turns a recording's bytes into a playable instance. Instances
//! report completion asynchronously by posting [`EngineEvent`]s on a channel
//! drained by the controller's owner, never by touching controller state.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::error::PlaybackError;
use crate::domain::playback::ContainerHint;

/// Identifies one opened engine instance
pub type SessionId = u64;

/// What happened to an engine instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEventKind {
    /// Playback reached the end of the media (or was cut short)
    Finished { successfully: bool },
    /// The engine failed to decode the media while playing
    DecodeError(String),
}

/// Message posted by an engine instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvent {
    pub session: SessionId,
    pub kind: EngineEventKind,
}

/// Sending half handed to one engine instance
#[derive(Debug, Clone)]
pub struct EngineEventSender {
    session: SessionId,
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EngineEventSender {
    pub fn new(session: SessionId, tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        Self { session, tx }
    }

    /// Session this sender reports for
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Report end of playback
    pub fn finished(&self, successfully: bool) {
        self.send(EngineEventKind::Finished { successfully });
    }

    /// Report a decode failure during playback
    pub fn decode_error(&self, message: impl Into<String>) {
        self.send(EngineEventKind::DecodeError(message.into()));
    }

    fn send(&self, kind: EngineEventKind) {
        // Receiver gone means the host loop has exited; nothing left to notify.
        let _ = self.tx.send(EngineEvent {
            session: self.session,
            kind,
        });
    }
}

/// A playable engine instance bound to one decoded recording
pub trait EngineInstance: Send {
    /// Set output volume, 0.0 to 1.0
    fn set_volume(&mut self, volume: f32);

    /// Start or resume output
    fn play(&mut self);

    /// Halt output
    fn pause(&mut self);

    /// Whether the instance is currently producing audio
    fn is_playing(&self) -> bool;
}

/// Port for constructing engine instances
#[async_trait]
pub trait AudioEngine: Send + Sync {
    /// Decode `data` using `hint` and return a paused instance.
    ///
    /// The instance posts its completion through `events`.
    async fn open(
        &self,
        data: Vec<u8>,
        hint: ContainerHint,
        events: EngineEventSender,
    ) -> Result<Box<dyn EngineInstance>, PlaybackError>;
}
