//! Container format hint passed to the audio engine

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidContainerHintError;

/// Expected container of recording files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerHint {
    /// Let the engine probe the data
    Auto,
    #[default]
    Wav,
    Flac,
    Ogg,
}

impl ContainerHint {
    /// Get the string identifier for this hint
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
        }
    }
}

impl FromStr for ContainerHint {
    type Err = InvalidContainerHintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "wav" | "wave" => Ok(Self::Wav),
            "flac" => Ok(Self::Flac),
            "ogg" | "vorbis" => Ok(Self::Ogg),
            _ => Err(InvalidContainerHintError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for ContainerHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("WAVE".parse::<ContainerHint>().unwrap(), ContainerHint::Wav);
        assert_eq!("vorbis".parse::<ContainerHint>().unwrap(), ContainerHint::Ogg);
        assert_eq!(" flac ".parse::<ContainerHint>().unwrap(), ContainerHint::Flac);
    }

    #[test]
    fn parse_invalid() {
        assert!("caf".parse::<ContainerHint>().is_err());
    }

    #[test]
    fn default_is_wav() {
        assert_eq!(ContainerHint::default(), ContainerHint::Wav);
    }
}
