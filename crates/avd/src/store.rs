//! Device configuration store.
//!
//! One directory per device under the AVD root, `<name>.avd`, holding
//! a `config.ini` with the resolved target, tag/ABI and skin. The
//! root path is constructor-injected so tests can point the store at
//! a temporary directory.

use std::path::{Path, PathBuf};

use avdkit_sdk::PropertyFile;
use tracing::{debug, warn};

use crate::error::AvdError;

/// Suffix of a device directory.
pub const AVD_DIR_SUFFIX: &str = ".avd";
/// Metadata file inside a device directory.
pub const FN_CONFIG_INI: &str = "config.ini";

const KEY_TARGET: &str = "target";
const KEY_TAG: &str = "tag.id";
const KEY_ABI: &str = "abi.type";
const KEY_SKIN: &str = "skin.name";

/// A persisted device configuration. A snapshot by value; targets may
/// change between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvdRecord {
    pub name: String,
    pub path: PathBuf,
    /// Target id, e.g. `android-0`.
    pub target: String,
    pub tag: String,
    pub abi: String,
    pub skin: Option<String>,
}

impl AvdRecord {
    /// The `tag/abi` rendering used by listings.
    pub fn tag_abi(&self) -> String {
        format!("{}/{}", self.tag, self.abi)
    }
}

/// Creates and enumerates device configurations under one root.
pub struct DeviceConfigStore {
    avd_root: PathBuf,
}

impl DeviceConfigStore {
    pub fn new(avd_root: impl Into<PathBuf>) -> Self {
        Self {
            avd_root: avd_root.into(),
        }
    }

    pub fn avd_root(&self) -> &Path {
        &self.avd_root
    }

    /// Directory a device with `name` lives in.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.avd_root.join(format!("{name}{AVD_DIR_SUFFIX}"))
    }

    /// All existing configurations, sorted by name ascending.
    pub async fn list(&self) -> Result<Vec<AvdRecord>, AvdError> {
        let mut records = Vec::new();
        if !self.avd_root.is_dir() {
            return Ok(records);
        }

        let mut entries = tokio::fs::read_dir(&self.avd_root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let Some(name) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(AVD_DIR_SUFFIX))
            else {
                continue;
            };
            if !path.is_dir() {
                continue;
            }

            match Self::read_record(name, &path).await {
                Ok(record) => records.push(record),
                Err(err) => warn!("skipping unreadable AVD {:?}: {}", path, err),
            }
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    /// Whether a device with `name` exists. Names compare
    /// case-insensitively.
    pub async fn exists(&self, name: &str) -> Result<bool, AvdError> {
        if !self.avd_root.is_dir() {
            return Ok(false);
        }

        let wanted = format!("{name}{AVD_DIR_SUFFIX}");
        let mut entries = tokio::fs::read_dir(&self.avd_root).await?;
        while let Some(entry) = entries.next_entry().await? {
            if let Some(existing) = entry.file_name().to_str() {
                if existing.eq_ignore_ascii_case(&wanted) && entry.path().is_dir() {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Persists `record`. The device directory and its metadata are
    /// written whole or not at all.
    pub async fn create(&self, record: &AvdRecord) -> Result<(), AvdError> {
        if self.exists(&record.name).await? {
            return Err(AvdError::DuplicateName(record.name.clone()));
        }

        let dir = self.path_for(&record.name);
        tokio::fs::create_dir_all(&dir).await?;

        if let Err(err) = Self::write_config(&dir, record).await {
            // Roll back the half-created directory.
            let _ = tokio::fs::remove_dir_all(&dir).await;
            return Err(err);
        }

        debug!("created AVD {:?} at {:?}", record.name, dir);
        Ok(())
    }

    async fn write_config(dir: &Path, record: &AvdRecord) -> Result<(), AvdError> {
        let mut content = String::new();
        content.push_str(&format!("{KEY_TARGET}={}\n", record.target));
        content.push_str(&format!("{KEY_TAG}={}\n", record.tag));
        content.push_str(&format!("{KEY_ABI}={}\n", record.abi));
        if let Some(skin) = &record.skin {
            content.push_str(&format!("{KEY_SKIN}={skin}\n"));
        }
        tokio::fs::write(dir.join(FN_CONFIG_INI), content).await?;
        Ok(())
    }

    async fn read_record(name: &str, dir: &Path) -> Result<AvdRecord, AvdError> {
        let config = PropertyFile::load(&dir.join(FN_CONFIG_INI)).await?;
        Ok(AvdRecord {
            name: name.to_string(),
            path: dir.to_path_buf(),
            target: config.get(KEY_TARGET).unwrap_or_default(),
            tag: config.get(KEY_TAG).unwrap_or_default(),
            abi: config.get(KEY_ABI).unwrap_or_default(),
            skin: config.get(KEY_SKIN),
        })
    }
}
