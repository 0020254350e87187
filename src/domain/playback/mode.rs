//! Audio session mode and routing options

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidAudioModeError;

/// All audio modes, in the order their persisted index refers to
pub const ALL_MODES: &[AudioMode] = &[
    AudioMode::Default,
    AudioMode::VoiceChat,
    AudioMode::VideoChat,
    AudioMode::VideoRecording,
    AudioMode::Measurement,
    AudioMode::MoviePlayback,
    AudioMode::SpokenAudio,
    AudioMode::VoicePrompt,
    AudioMode::GameChat,
];

/// Audio session mode used when configuring playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioMode {
    #[default]
    Default,
    VoiceChat,
    VideoChat,
    VideoRecording,
    Measurement,
    MoviePlayback,
    SpokenAudio,
    VoicePrompt,
    GameChat,
}

impl AudioMode {
    /// Get the human-readable title for this mode
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::VoiceChat => "Voice Chat",
            Self::VideoChat => "Video Chat",
            Self::VideoRecording => "Video Recording",
            Self::Measurement => "Measurement",
            Self::MoviePlayback => "Movie Playback",
            Self::SpokenAudio => "Spoken Audio",
            Self::VoicePrompt => "Voice Prompt",
            Self::GameChat => "Game Chat",
        }
    }

    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::VoiceChat => "voice-chat",
            Self::VideoChat => "video-chat",
            Self::VideoRecording => "video-recording",
            Self::Measurement => "measurement",
            Self::MoviePlayback => "movie-playback",
            Self::SpokenAudio => "spoken-audio",
            Self::VoicePrompt => "voice-prompt",
            Self::GameChat => "game-chat",
        }
    }

    /// Position of this mode in [`ALL_MODES`]
    pub fn index(&self) -> usize {
        ALL_MODES.iter().position(|m| m == self).unwrap_or(0)
    }

    /// Parse either a mode name or its index in [`ALL_MODES`]
    pub fn parse_name_or_index(s: &str) -> Result<Self, InvalidAudioModeError> {
        if let Ok(index) = s.trim().parse::<usize>() {
            return ALL_MODES
                .get(index)
                .copied()
                .ok_or_else(|| InvalidAudioModeError { input: s.to_string() });
        }
        s.parse()
    }
}

impl FromStr for AudioMode {
    type Err = InvalidAudioModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        ALL_MODES
            .iter()
            .find(|m| m.as_str() == normalized)
            .copied()
            .ok_or_else(|| InvalidAudioModeError { input: s.to_string() })
    }
}

impl fmt::Display for AudioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve a persisted mode index against the modes a session offers.
///
/// Falls back to the first available mode when the index is out of range.
pub fn resolve_mode(available: &[AudioMode], index: usize) -> AudioMode {
    available
        .get(index)
        .or_else(|| available.first())
        .copied()
        .unwrap_or_default()
}

/// Routing options applied when the session is configured for playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    pub mix_with_others: bool,
    pub allow_bluetooth: bool,
    pub allow_bluetooth_a2dp: bool,
    pub default_to_speaker: bool,
}

impl SessionOptions {
    /// The fixed option set used for record-and-playback sessions
    pub const fn desired() -> Self {
        Self {
            mix_with_others: true,
            allow_bluetooth: true,
            allow_bluetooth_a2dp: true,
            default_to_speaker: true,
        }
    }
}
