//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::playback::ContainerHint;

/// Voice Memos - browse, play back and delete recorded memos
#[derive(Parser, Debug)]
#[command(name = "voice-memos")]
#[command(version)]
#[command(about = "Browse, play back and delete recorded voice memos")]
#[command(long_about = None)]
pub struct Cli {
    /// Directory holding the recordings
    #[arg(short = 'd', long, value_name = "DIR", env = "VOICE_MEMOS_DIR")]
    pub dir: Option<PathBuf>,

    /// Audio mode for this run only, by name or index (not saved)
    #[arg(short = 'm', long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Expected recording format (auto, wav, flac, ogg)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Show debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Subcommand (defaults to the interactive shell)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recordings, newest first
    #[command(visible_alias = "ls")]
    List,
    /// Play the recording at INDEX and wait until it ends
    Play {
        /// Position in the list
        index: usize,
    },
    /// Delete the recording at INDEX
    #[command(visible_alias = "rm")]
    Delete {
        /// Position in the list
        index: usize,
    },
    /// Interactive session: list, play, stop and delete recordings
    Shell,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved options for commands that touch recordings
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the recording store enumerates
    pub dir: PathBuf,
    /// Non-persistent audio mode index, overriding the saved preference
    pub mode_override: Option<usize>,
    /// Container hint handed to the engine
    pub hint: ContainerHint,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["recordings_dir", "audio_mode", "format"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
