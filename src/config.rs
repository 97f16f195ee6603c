//! Application configuration.
//!
//! A small optional `config.toml` holding default SDK and AVD roots.
//! Command-line flags and the `ANDROID_SDK_ROOT`/`ANDROID_HOME`
//! environment variables take precedence over it.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Persisted defaults for this installation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the installed Android SDK.
    pub sdk_root: Option<PathBuf>,
    /// Directory holding AVD configurations.
    pub avd_root: Option<PathBuf>,
}

impl AppConfig {
    /// Location of the configuration file, when a config directory
    /// exists on this platform.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("avdkit").join("config.toml"))
    }

    /// Loads the configuration, writing a default file on first run.
    pub async fn load_or_create() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            debug!("no platform config directory; using defaults");
            return Ok(Self::default());
        };

        if path.exists() {
            debug!("loading configuration from {:?}", path);
            let content = tokio::fs::read_to_string(&path).await?;
            Ok(toml::from_str(&content)?)
        } else {
            info!("creating default configuration at {:?}", path);
            let config = Self::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, toml::to_string_pretty(&config)?).await?;
            Ok(config)
        }
    }
}

/// Fallback AVD root: `~/.android/avd`.
pub fn default_avd_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".android").join("avd"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            sdk_root: Some(PathBuf::from("/opt/android-sdk")),
            avd_root: None,
        };
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.sdk_root, config.sdk_root);
        assert_eq!(parsed.avd_root, None);
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert!(parsed.sdk_root.is_none());
        assert!(parsed.avd_root.is_none());
    }
}
