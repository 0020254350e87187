//! Settings file port
//!
//! The settings file holds where recordings live, the preferred audio
//! mode index and the expected recording format. Command-line flags are
//! merged over it by the caller and never written back.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Where the settings live, whether or not the file exists yet
    fn path(&self) -> PathBuf;

    /// Stored settings; a missing file reads as [`AppConfig::empty`]
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored settings
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Write a starter file. Refuses with [`ConfigError::AlreadyExists`].
    async fn init(&self) -> Result<(), ConfigError>;
}
