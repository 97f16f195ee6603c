//! Platform target model.
//!
//! A [`Target`] is one installed platform; its system images are
//! [`TagAbiVariant`]s keyed by a `(tag, abi)` pair. A target always
//! has the implicit `default` tag for legacy images that declare no
//! tag of their own.

use std::path::PathBuf;

/// Tag assumed for system images that do not declare one.
pub const DEFAULT_TAG: &str = "default";

/// Skin that sorts first when present.
pub const DEFAULT_SKIN_NAME: &str = "HVGA";

/// One system image of a target: a `(tag, abi)` pair plus the image
/// location and the skins discovered there.
#[derive(Debug, Clone)]
pub struct TagAbiVariant {
    pub tag: String,
    pub abi: String,
    /// Directory holding the image files.
    pub location: PathBuf,
    /// Skins found under the image location.
    pub skins: Vec<String>,
}

impl TagAbiVariant {
    pub fn is_default_tag(&self) -> bool {
        self.tag == DEFAULT_TAG
    }

    /// The `tag/abi` rendering used by listings and configs.
    pub fn pair(&self) -> String {
        format!("{}/{}", self.tag, self.abi)
    }
}

/// An installed platform target. Immutable once scanned.
#[derive(Debug, Clone)]
pub struct Target {
    /// 1-based position in listing order.
    pub index: usize,
    pub api_level: u32,
    /// Release version, e.g. `0.0` for the name `Android 0.0`.
    pub version: String,
    /// Preview codename; `None` for release builds.
    pub codename: Option<String>,
    pub revision: u32,
    /// Skins declared at target level.
    pub skins: Vec<String>,
    /// Tag/ABI pairs are unique within one target.
    pub variants: Vec<TagAbiVariant>,
}

impl Target {
    /// String id, e.g. `android-0`.
    pub fn id(&self) -> String {
        format!("android-{}", self.api_level)
    }

    /// Display name, e.g. `Android 0.0`.
    pub fn name(&self) -> String {
        format!("Android {}", self.version)
    }

    /// Distinct tags, `default` first, others in scan order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for variant in &self.variants {
            if !tags.contains(&variant.tag.as_str()) {
                tags.push(&variant.tag);
            }
        }
        if let Some(pos) = tags.iter().position(|t| *t == DEFAULT_TAG) {
            if pos > 0 {
                let default = tags.remove(pos);
                tags.insert(0, default);
            }
        }
        tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.variants.iter().any(|v| v.tag == tag)
    }

    pub fn variants_with_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a TagAbiVariant> {
        self.variants.iter().filter(move |v| v.tag == tag)
    }

    pub fn find_variant(&self, tag: &str, abi: &str) -> Option<&TagAbiVariant> {
        self.variants.iter().find(|v| v.tag == tag && v.abi == abi)
    }

    /// Every `tag/abi` pair: default-tag entries first, other tags in
    /// scan order, ABIs lexicographic within a tag.
    pub fn tag_abi_pairs(&self) -> Vec<String> {
        let mut pairs = Vec::new();
        for tag in self.tags() {
            let mut abis: Vec<&str> = self.variants_with_tag(tag).map(|v| v.abi.as_str()).collect();
            abis.sort_unstable();
            for abi in abis {
                pairs.push(format!("{tag}/{abi}"));
            }
        }
        pairs
    }
}

/// An ordered, deduplicated set of skin names. The default skin sorts
/// first when present; the rest is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinSet {
    names: Vec<String>,
}

impl SkinSet {
    /// Builds the set from any number of skin name sources.
    pub fn collect<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in sources {
            let name = name.as_ref();
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names.sort();
        if let Some(pos) = names.iter().position(|n| n == DEFAULT_SKIN_NAME) {
            let default = names.remove(pos);
            names.insert(0, default);
        }
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The skin a new device gets when none is chosen explicitly.
    pub fn default_skin(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Display name for a tag id: `-`/`_` separated segments, each
/// capitalized. `tag-1` becomes `Tag 1`.
pub fn tag_display(tag: &str) -> String {
    tag.split(['-', '_'])
        .filter(|seg| !seg.is_empty())
        .map(|seg| {
            let mut chars = seg.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name for an ABI family.
pub fn abi_display(abi: &str) -> String {
    match abi {
        "armeabi" | "armeabi-v7a" => "ARM".to_string(),
        "arm64-v8a" => "ARM 64".to_string(),
        "x86" => "Intel x86".to_string(),
        "x86_64" => "Intel x86 64".to_string(),
        "mips" => "MIPS".to_string(),
        "mips64" => "MIPS 64".to_string(),
        other => other.to_string(),
    }
}

/// Human-readable processor descriptor for creation messages. The
/// default tag is omitted; other tags prefix their display name.
pub fn processor_display(tag: &str, abi: &str) -> String {
    if tag == DEFAULT_TAG {
        format!("{} ({})", abi_display(abi), abi)
    } else {
        format!("{} {} ({})", tag_display(tag), abi_display(abi), abi)
    }
}
