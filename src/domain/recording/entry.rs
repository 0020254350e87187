//! Recording value object

use std::fmt;
use std::path::{Path, PathBuf};

/// One audio file in the recordings directory.
///
/// The display name is always the last path component of the location,
/// so two recordings with the same location are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recording {
    name: String,
    location: PathBuf,
}

impl Recording {
    /// Build a recording from its file location.
    ///
    /// Returns `None` when the location has no final component (e.g. `/` or `..`).
    pub fn from_location(location: impl Into<PathBuf>) -> Option<Self> {
        let location = location.into();
        let name = location.file_name()?.to_string_lossy().into_owned();
        if name.is_empty() {
            return None;
        }
        Some(Self { name, location })
    }

    /// Display name (file name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full location of the backing file
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Location rendered as a string, the sort key of a recording list
    pub fn location_key(&self) -> String {
        self.location.to_string_lossy().into_owned()
    }
}

impl fmt::Display for Recording {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
