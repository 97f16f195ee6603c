//! Android property file reading.
//!
//! `build.prop` and `source.properties` are plain `key=value` lines;
//! configparser exposes sectionless keys under its default section.

use std::path::Path;

use configparser::ini::Ini;

use crate::repository::SdkError;

/// Release version of a platform, e.g. `0.0`.
pub const PROP_VERSION_RELEASE: &str = "ro.build.version.release";
/// API level of a platform.
pub const PROP_VERSION_SDK: &str = "ro.build.version.sdk";
/// Codename of a platform; `REL` for release builds.
pub const PROP_VERSION_CODENAME: &str = "ro.build.version.codename";
/// Package revision in `source.properties`.
pub const PROP_PKG_REVISION: &str = "Pkg.Revision";
/// ABI of a system image in `source.properties`.
pub const PROP_SYS_IMG_ABI: &str = "SystemImage.Abi";

/// A parsed property file.
#[derive(Debug)]
pub struct PropertyFile {
    ini: Ini,
}

impl PropertyFile {
    /// Reads and parses the file at `path`.
    pub async fn load(path: &Path) -> Result<Self, SdkError> {
        let content = tokio::fs::read_to_string(path).await?;
        let mut ini = Ini::new();
        ini.read(content).map_err(SdkError::Parse)?;
        Ok(Self { ini })
    }

    /// Value for `key`, if present. Lookup is case-insensitive.
    pub fn get(&self, key: &str) -> Option<String> {
        self.ini.get("default", key)
    }

    /// Value for `key` parsed as an integer.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}
