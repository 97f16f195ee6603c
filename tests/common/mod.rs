//! Test fixture: a fake SDK directory tree.
//!
//! One API-0 platform with an HVGA target skin and a legacy
//! default/armeabi image, plus tag-1 armeabi/x86 system images
//! carrying one skin each.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct FakeSdk {
    // Held for its Drop; the temp tree lives as long as the fixture.
    _dir: TempDir,
    sdk_root: PathBuf,
    avd_root: PathBuf,
}

impl FakeSdk {
    /// The full multi-tag scenario.
    pub async fn new() -> Self {
        let fixture = Self::basic().await;
        fixture
            .add_system_image("android-0", "tag-1", "x86", Some("Tag1X86Skin"))
            .await;
        fixture
            .add_system_image("android-0", "tag-1", "armeabi", Some("Tag1ArmSkin"))
            .await;
        fixture
    }

    /// Only the API-0 platform with its legacy default/armeabi image.
    pub async fn basic() -> Self {
        Self::platform(true).await
    }

    /// Like [`FakeSdk::basic`], but the platform ships no skins.
    pub async fn skinless() -> Self {
        Self::platform(false).await
    }

    async fn platform(with_skin: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let sdk_root = dir.path().join("sdk");
        let avd_root = dir.path().join("avd");

        let platform = sdk_root.join("platforms").join("v0_0");
        write_file(
            &platform.join("build.prop"),
            "ro.build.version.release=0.0\n\
             ro.build.version.sdk=0\n\
             ro.build.version.codename=REL\n",
        )
        .await;
        if with_skin {
            tokio::fs::create_dir_all(platform.join("skins").join("HVGA"))
                .await
                .unwrap();
        }

        let images = platform.join("images");
        write_file(
            &images.join("source.properties"),
            "AndroidVersion.ApiLevel=0\nSystemImage.Abi=armeabi\n",
        )
        .await;
        write_file(&images.join("userdata.img"), "").await;

        Self {
            _dir: dir,
            sdk_root,
            avd_root,
        }
    }

    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    pub fn avd_root(&self) -> &Path {
        &self.avd_root
    }

    /// Adds a `system-images/<target>/<tag>/<abi>` image, optionally
    /// with one skin.
    pub async fn add_system_image(&self, target: &str, tag: &str, abi: &str, skin: Option<&str>) {
        let image = self
            .sdk_root
            .join("system-images")
            .join(target)
            .join(tag)
            .join(abi);
        write_file(
            &image.join("source.properties"),
            &format!("AndroidVersion.ApiLevel=0\nSystemImage.Abi={abi}\n"),
        )
        .await;
        write_file(&image.join("userdata.img"), "").await;
        if let Some(skin) = skin {
            tokio::fs::create_dir_all(image.join("skins").join(skin))
                .await
                .unwrap();
        }
    }
}

async fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.unwrap();
    }
    tokio::fs::write(path, content).await.unwrap();
}
