//! Audio output adapters

mod rodio_backend;

pub use rodio_backend::{create_rodio_backend, RodioAudioEngine, RodioAudioSession};
