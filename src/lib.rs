//! Voice Memos - browse, play back and delete recorded audio memos
//!
//! This crate lists the recordings in a directory, plays one at a time
//! through the default audio output, and deletes recordings on request.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Recordings, playback state, audio modes, config and errors
//! - **Application**: Recording store, playback controller and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio output, config file)
//! - **CLI**: Command-line interface, interactive shell and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
