//! Rodio-based audio session and engine
//!
//! The session owns the default output device. Rodio's output stream cannot
//! leave the thread that opened it, so activation parks it on a dedicated
//! thread and hands back the sendable stream handle; deactivation wakes that
//! thread so it drops the stream.

use std::io::Cursor;
use std::sync::mpsc as std_mpsc;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use async_trait::async_trait;
use rodio::cpal::traits::{DeviceTrait, HostTrait};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::application::ports::{AudioEngine, AudioSession, EngineEventSender, EngineInstance};
use crate::domain::error::PlaybackError;
use crate::domain::playback::{AudioMode, ContainerHint, SessionOptions, ALL_MODES};

/// An open output device
struct OutputDevice {
    handle: OutputStreamHandle,
    shutdown: std_mpsc::Sender<()>,
    thread: JoinHandle<()>,
}

#[derive(Default)]
struct SharedOutput {
    device: Mutex<Option<OutputDevice>>,
    configuration: Mutex<Option<(AudioMode, SessionOptions)>>,
}

impl SharedOutput {
    fn device(&self) -> MutexGuard<'_, Option<OutputDevice>> {
        self.device.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn handle(&self) -> Option<OutputStreamHandle> {
        self.device().as_ref().map(|d| d.handle.clone())
    }
}

/// Create a session and an engine that share one output device
pub fn create_rodio_backend() -> (RodioAudioSession, RodioAudioEngine) {
    let output = Arc::new(SharedOutput::default());
    (
        RodioAudioSession {
            output: Arc::clone(&output),
        },
        RodioAudioEngine { output },
    )
}

/// Audio session backed by the default output device
pub struct RodioAudioSession {
    output: Arc<SharedOutput>,
}

impl RodioAudioSession {
    /// Whether an output device is currently open
    pub fn is_active(&self) -> bool {
        self.output.device().is_some()
    }
}

#[async_trait]
impl AudioSession for RodioAudioSession {
    fn available_modes(&self) -> Vec<AudioMode> {
        ALL_MODES.to_vec()
    }

    fn output_route(&self) -> Option<String> {
        rodio::cpal::default_host()
            .default_output_device()
            .and_then(|device| device.name().ok())
    }

    async fn configure(&self, mode: AudioMode, options: SessionOptions) -> Result<(), PlaybackError> {
        // Desktop outputs have no routing categories; the values are kept for diagnostics.
        log::debug!("Audio session configured: mode={}, options={:?}", mode, options);
        *self
            .output
            .configuration
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some((mode, options));
        Ok(())
    }

    async fn activate(&self) -> Result<(), PlaybackError> {
        if self.is_active() {
            return Ok(());
        }

        let device = tokio::task::spawn_blocking(open_device)
            .await
            .map_err(|e| PlaybackError::SessionConfiguration(format!("Task join error: {}", e)))??;

        *self.output.device() = Some(device);
        log::debug!("Audio session activated");
        Ok(())
    }

    async fn deactivate(&self) -> Result<(), PlaybackError> {
        let Some(device) = self.output.device().take() else {
            return Ok(());
        };

        tokio::task::spawn_blocking(move || close_device(device))
            .await
            .map_err(|e| PlaybackError::SessionTeardown(format!("Task join error: {}", e)))??;

        log::debug!("Audio session deactivated");
        Ok(())
    }
}

/// Open the default output device on its own thread
fn open_device() -> Result<OutputDevice, PlaybackError> {
    let (ready_tx, ready_rx) = std_mpsc::sync_channel(1);
    let (shutdown_tx, shutdown_rx) = std_mpsc::channel::<()>();

    let thread = thread::Builder::new()
        .name("voice-memos-output".to_string())
        .spawn(move || match OutputStream::try_default() {
            Ok((_stream, handle)) => {
                let _ = ready_tx.send(Ok(handle));
                // Keep the stream alive until the session is deactivated
                let _ = shutdown_rx.recv();
            }
            Err(e) => {
                let _ = ready_tx.send(Err(e.to_string()));
            }
        })
        .map_err(|e| PlaybackError::SessionConfiguration(e.to_string()))?;

    match ready_rx.recv() {
        Ok(Ok(handle)) => Ok(OutputDevice {
            handle,
            shutdown: shutdown_tx,
            thread,
        }),
        Ok(Err(message)) => {
            let _ = thread.join();
            Err(PlaybackError::SessionConfiguration(message))
        }
        Err(_) => Err(PlaybackError::SessionConfiguration(
            "output thread exited before opening a device".to_string(),
        )),
    }
}

fn close_device(device: OutputDevice) -> Result<(), PlaybackError> {
    let _ = device.shutdown.send(());
    device
        .thread
        .join()
        .map_err(|_| PlaybackError::SessionTeardown("output thread panicked".to_string()))
}

/// Engine that decodes recordings in memory and plays them through a sink
pub struct RodioAudioEngine {
    output: Arc<SharedOutput>,
}

#[async_trait]
impl AudioEngine for RodioAudioEngine {
    async fn open(
        &self,
        data: Vec<u8>,
        hint: ContainerHint,
        events: EngineEventSender,
    ) -> Result<Box<dyn EngineInstance>, PlaybackError> {
        let handle = self.output.handle().ok_or_else(|| {
            PlaybackError::EngineUnavailable("audio session is not active".to_string())
        })?;

        // Decoding probes the whole header, keep it off the async runtime
        let instance = tokio::task::spawn_blocking(move || open_sink(&handle, data, hint, events))
            .await
            .map_err(|e| PlaybackError::EngineUnavailable(format!("Task join error: {}", e)))??;

        Ok(Box::new(instance))
    }
}

fn open_sink(
    handle: &OutputStreamHandle,
    data: Vec<u8>,
    hint: ContainerHint,
    events: EngineEventSender,
) -> Result<RodioInstance, PlaybackError> {
    let cursor = Cursor::new(data);
    let source = match hint {
        ContainerHint::Auto => Decoder::new(cursor),
        ContainerHint::Wav => Decoder::new_wav(cursor),
        ContainerHint::Flac => Decoder::new_flac(cursor),
        ContainerHint::Ogg => Decoder::new_vorbis(cursor),
    }
    .map_err(|e| PlaybackError::Decode(e.to_string()))?;

    let sink = Sink::try_new(handle).map_err(|e| PlaybackError::EngineUnavailable(e.to_string()))?;
    sink.pause();
    sink.append(source);
    let sink = Arc::new(sink);

    let watched = Arc::clone(&sink);
    thread::Builder::new()
        .name(format!("voice-memos-playback-{}", events.session()))
        .spawn(move || {
            watched.sleep_until_end();
            events.finished(true);
        })
        .map_err(|e| PlaybackError::EngineUnavailable(e.to_string()))?;

    Ok(RodioInstance { sink })
}

/// One decoded recording queued on a sink
struct RodioInstance {
    sink: Arc<Sink>,
}

impl EngineInstance for RodioInstance {
    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn is_playing(&self) -> bool {
        !self.sink.is_paused() && !self.sink.empty()
    }
}

impl Drop for RodioInstance {
    fn drop(&mut self) {
        // Releases the watcher thread, whose late event the controller ignores
        self.sink.stop();
    }
}
