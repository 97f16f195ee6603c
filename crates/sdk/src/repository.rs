//! SDK repository scanning.
//!
//! Builds the read-only view of an installed SDK from its directory
//! layout:
//!
//! - `platforms/<dir>/build.prop` identifies a target; its
//!   `skins/<name>/` subdirectories are target-level skins and a
//!   legacy `images/` directory is one system image under the
//!   `default` tag.
//! - `system-images/android-<api>/<tag>/<abi>/` adds one variant per
//!   leaf directory; `skins/<name>/` under the leaf are variant-level
//!   skins.
//!
//! Directory entries are visited in lexicographic order so listings
//! are deterministic.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::properties::{
    PropertyFile, PROP_PKG_REVISION, PROP_SYS_IMG_ABI, PROP_VERSION_CODENAME, PROP_VERSION_RELEASE,
    PROP_VERSION_SDK,
};
use crate::target::{TagAbiVariant, Target, DEFAULT_TAG};

/// Platforms directory under the SDK root.
pub const FD_PLATFORMS: &str = "platforms";
/// System images directory under the SDK root.
pub const FD_SYSTEM_IMAGES: &str = "system-images";
/// Skins directory under a target or image location.
pub const FD_SKINS: &str = "skins";
/// Legacy images directory under a target.
pub const FD_IMAGES: &str = "images";

const FN_BUILD_PROP: &str = "build.prop";
const FN_SOURCE_PROPS: &str = "source.properties";

/// SDK scanning errors.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("SDK directory not found: {0}")]
    SdkNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Read-only provider of installed targets.
pub trait TargetProvider {
    /// All targets, in listing order.
    fn targets(&self) -> &[Target];

    /// Looks up a target by numeric index or string id (`android-<api>`).
    fn find_target(&self, id: &str) -> Option<&Target> {
        if let Ok(index) = id.parse::<usize>() {
            return self.targets().iter().find(|t| t.index == index);
        }
        self.targets().iter().find(|t| t.id() == id)
    }
}

/// A scanned SDK installation.
pub struct SdkRepository {
    sdk_root: PathBuf,
    targets: Vec<Target>,
}

impl TargetProvider for SdkRepository {
    fn targets(&self) -> &[Target] {
        &self.targets
    }
}

impl SdkRepository {
    /// Scans the SDK at `sdk_root`.
    pub async fn scan(sdk_root: impl Into<PathBuf>) -> Result<Self, SdkError> {
        let sdk_root = sdk_root.into();
        if !sdk_root.is_dir() {
            return Err(SdkError::SdkNotFound(sdk_root));
        }

        let mut targets = Vec::new();
        for platform_dir in sorted_subdirs(&sdk_root.join(FD_PLATFORMS)).await? {
            match Self::scan_platform(&sdk_root, &platform_dir).await {
                Ok(Some(target)) => targets.push(target),
                Ok(None) => debug!("skipping non-platform directory {:?}", platform_dir),
                Err(err) => warn!("failed to read platform {:?}: {}", platform_dir, err),
            }
        }

        targets.sort_by_key(|t| t.api_level);
        for (i, target) in targets.iter_mut().enumerate() {
            target.index = i + 1;
        }

        debug!("scanned {} target(s) under {:?}", targets.len(), sdk_root);
        Ok(Self { sdk_root, targets })
    }

    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    /// Reads one `platforms/<dir>` entry. Returns `None` when the
    /// directory does not look like a platform.
    async fn scan_platform(
        sdk_root: &Path,
        platform_dir: &Path,
    ) -> Result<Option<Target>, SdkError> {
        let build_prop = platform_dir.join(FN_BUILD_PROP);
        if !build_prop.is_file() {
            return Ok(None);
        }

        let props = PropertyFile::load(&build_prop).await?;
        let Some(api_level) = props.get_u32(PROP_VERSION_SDK) else {
            return Ok(None);
        };
        let version = props
            .get(PROP_VERSION_RELEASE)
            .unwrap_or_else(|| api_level.to_string());
        let codename = props
            .get(PROP_VERSION_CODENAME)
            .filter(|c| c != "REL");

        let revision = match PropertyFile::load(&platform_dir.join(FN_SOURCE_PROPS)).await {
            Ok(source) => source.get_u32(PROP_PKG_REVISION).unwrap_or(1),
            Err(_) => 1,
        };

        let skins = skin_names(&platform_dir.join(FD_SKINS)).await?;

        let mut target = Target {
            index: 0,
            api_level,
            version,
            codename,
            revision,
            skins,
            variants: Vec::new(),
        };

        Self::scan_legacy_image(platform_dir, &mut target).await?;
        Self::scan_system_images(sdk_root, &mut target).await?;

        Ok(Some(target))
    }

    /// Legacy layout: a single image under `<platform>/images` whose
    /// ABI comes from `source.properties`, filed under the `default`
    /// tag.
    async fn scan_legacy_image(platform_dir: &Path, target: &mut Target) -> Result<(), SdkError> {
        let images_dir = platform_dir.join(FD_IMAGES);
        let source_props = images_dir.join(FN_SOURCE_PROPS);
        if !source_props.is_file() {
            return Ok(());
        }

        let props = PropertyFile::load(&source_props).await?;
        let Some(abi) = props.get(PROP_SYS_IMG_ABI) else {
            return Ok(());
        };

        let skins = skin_names(&images_dir.join(FD_SKINS)).await?;
        target.variants.push(TagAbiVariant {
            tag: DEFAULT_TAG.to_string(),
            abi,
            location: images_dir,
            skins,
        });
        Ok(())
    }

    /// New layout: `system-images/<target-id>/<tag>/<abi>/`. Directory
    /// names are authoritative for the tag and ABI.
    async fn scan_system_images(sdk_root: &Path, target: &mut Target) -> Result<(), SdkError> {
        let target_dir = sdk_root.join(FD_SYSTEM_IMAGES).join(target.id());

        for tag_dir in sorted_subdirs(&target_dir).await? {
            let Some(tag) = dir_name(&tag_dir) else {
                continue;
            };

            for abi_dir in sorted_subdirs(&tag_dir).await? {
                let Some(abi) = dir_name(&abi_dir) else {
                    continue;
                };
                if target.find_variant(&tag, &abi).is_some() {
                    warn!("duplicate system image {}/{} for {}", tag, abi, target.id());
                    continue;
                }

                let skins = skin_names(&abi_dir.join(FD_SKINS)).await?;
                target.variants.push(TagAbiVariant {
                    tag: tag.clone(),
                    abi,
                    location: abi_dir,
                    skins,
                });
            }
        }
        Ok(())
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

/// Subdirectories of `dir` in lexicographic order; empty when `dir`
/// does not exist.
async fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>, SdkError> {
    let mut dirs = Vec::new();
    if !dir.is_dir() {
        return Ok(dirs);
    }

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

/// Names of the skin subdirectories under `skins_dir`.
async fn skin_names(skins_dir: &Path) -> Result<Vec<String>, SdkError> {
    let mut names = Vec::new();
    for dir in sorted_subdirs(skins_dir).await? {
        if let Some(name) = dir_name(&dir) {
            names.push(name);
        }
    }
    Ok(names)
}
