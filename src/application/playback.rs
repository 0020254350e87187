//! Playback controller use case
//!
//! Serializes playback so that at most one recording plays at a time.
//!
//! State machine:
//!   IDLE -> PLAYING (play)
//!   PLAYING -> IDLE (stop, engine finished, engine decode error)
//!
//! Engine completion arrives as [`EngineEvent`] messages. The owner of the
//! controller drains the receiver returned by [`PlaybackController::new`] and
//! feeds each event to [`PlaybackController::handle_engine_event`] on the same
//! task that issues `play`/`stop`.

use tokio::fs;
use tokio::sync::mpsc;

use crate::domain::error::PlaybackError;
use crate::domain::playback::{resolve_mode, AudioMode, ContainerHint, PlaybackState, SessionOptions};
use crate::domain::recording::Recording;

use super::ports::{
    AudioEngine, AudioSession, EngineEvent, EngineEventKind, EngineEventSender, EngineInstance,
    PlaybackObserver, PreferenceStore, SessionId,
};

/// Output volume applied to every new playback (full scale)
pub const FULL_VOLUME: f32 = 1.0;

/// Options fixed for the lifetime of a controller
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackConfig {
    /// Container hint passed to the engine
    pub hint: ContainerHint,
    /// Routing options applied on every session configuration
    pub options: SessionOptions,
}

impl PlaybackConfig {
    pub fn new(hint: ContainerHint) -> Self {
        Self {
            hint,
            options: SessionOptions::desired(),
        }
    }
}

struct ActivePlayback {
    id: SessionId,
    recording: Recording,
    instance: Box<dyn EngineInstance>,
}

/// Playback controller
pub struct PlaybackController<S, E, P, O>
where
    S: AudioSession,
    E: AudioEngine,
    P: PreferenceStore,
    O: PlaybackObserver,
{
    session: S,
    engine: E,
    preferences: P,
    observer: O,
    config: PlaybackConfig,
    active: Option<ActivePlayback>,
    next_id: SessionId,
    events: mpsc::UnboundedSender<EngineEvent>,
}

impl<S, E, P, O> PlaybackController<S, E, P, O>
where
    S: AudioSession,
    E: AudioEngine,
    P: PreferenceStore,
    O: PlaybackObserver,
{
    /// Create a new controller in idle state.
    ///
    /// Returns the controller and the receiver its engine instances post to.
    pub fn new(
        session: S,
        engine: E,
        preferences: P,
        observer: O,
        config: PlaybackConfig,
    ) -> (Self, mpsc::UnboundedReceiver<EngineEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            session,
            engine,
            preferences,
            observer,
            config,
            active: None,
            next_id: 1,
            events: tx,
        };
        (controller, rx)
    }

    /// Get the current state
    pub fn state(&self) -> PlaybackState {
        if self.active.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    /// Recording held by the active session, if any
    pub fn current(&self) -> Option<&Recording> {
        self.active.as_ref().map(|a| &a.recording)
    }

    /// Id of the active session, if any
    pub fn active_session(&self) -> Option<SessionId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// True iff an engine instance exists and is producing audio
    pub fn is_playing(&self) -> bool {
        self.active
            .as_ref()
            .map(|a| a.instance.is_playing())
            .unwrap_or(false)
    }

    /// Device playback would be routed to
    pub fn output_route(&self) -> Option<String> {
        self.session.output_route()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Start playing `recording`, stopping any current playback first.
    ///
    /// The starting notification fires before the session and engine are
    /// acquired and is not retracted if acquisition fails.
    pub async fn play(&mut self, recording: &Recording) -> Result<(), PlaybackError> {
        if self.active.is_some() {
            self.stop().await;
        }

        self.observer.on_playback_starting();

        let mode = self.preferred_mode().await;
        if let Err(e) = self.activate_session(mode).await {
            log::error!("{}", e);
            return Err(e);
        }

        let id = self.next_id;
        self.next_id += 1;

        let mut instance = match self.open_instance(id, recording).await {
            Ok(instance) => instance,
            Err(e) => {
                log::error!("{}", e);
                self.release_session().await;
                return Err(e);
            }
        };

        instance.set_volume(FULL_VOLUME);
        instance.play();
        log::debug!("Playing {} (session {}, mode {})", recording.name(), id, mode);

        self.active = Some(ActivePlayback {
            id,
            recording: recording.clone(),
            instance,
        });
        Ok(())
    }

    /// Stop playback and release the audio session.
    ///
    /// Safe to call while idle: the finished notification still fires and
    /// the session is still deactivated. A teardown failure is logged and
    /// does not undo the transition to idle.
    pub async fn stop(&mut self) {
        self.observer.on_playback_finished();

        if let Some(mut active) = self.active.take() {
            active.instance.pause();
            log::debug!("Stopped {} (session {})", active.recording.name(), active.id);
        }

        self.release_session().await;
    }

    /// Apply an event posted by an engine instance.
    ///
    /// Events from sessions that are no longer active are ignored.
    pub async fn handle_engine_event(&mut self, event: EngineEvent) {
        if self.active_session() != Some(event.session) {
            log::debug!("Ignoring stale engine event {:?}", event);
            return;
        }

        match event.kind {
            EngineEventKind::Finished { successfully } => {
                log::debug!(
                    "Session {} finished (successfully: {})",
                    event.session,
                    successfully
                );
            }
            EngineEventKind::DecodeError(message) => {
                log::error!("{}", PlaybackError::Decode(message));
            }
        }

        self.stop().await;
    }

    async fn preferred_mode(&self) -> AudioMode {
        let available = self.session.available_modes();
        let index = match self.preferences.audio_mode_index().await {
            Ok(index) => index,
            Err(e) => {
                log::warn!("Failed to read audio mode preference, using default: {}", e);
                0
            }
        };
        if index >= available.len() {
            log::warn!(
                "Audio mode index {} out of range ({} modes available), using default",
                index,
                available.len()
            );
        }
        resolve_mode(&available, index)
    }

    async fn activate_session(&self, mode: AudioMode) -> Result<(), PlaybackError> {
        self.session.configure(mode, self.config.options).await?;
        self.session.activate().await
    }

    async fn open_instance(
        &self,
        id: SessionId,
        recording: &Recording,
    ) -> Result<Box<dyn EngineInstance>, PlaybackError> {
        let data = fs::read(recording.location())
            .await
            .map_err(|e| PlaybackError::Read {
                path: recording.location().to_path_buf(),
                message: e.to_string(),
            })?;

        let events = EngineEventSender::new(id, self.events.clone());
        self.engine.open(data, self.config.hint, events).await
    }

    async fn release_session(&self) {
        if let Err(e) = self.session.deactivate().await {
            log::error!("{}", e);
        }
    }
}
