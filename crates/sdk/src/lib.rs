//! AvdKit SDK repository view
//!
//! Read-only access to a locally installed Android SDK: platform
//! targets, their system images (tag/ABI variants) and skins.

pub mod logger;
pub mod properties;
pub mod repository;
pub mod target;

pub use logger::{ConsoleLogger, Logger, MockLog};
pub use properties::PropertyFile;
pub use repository::{SdkError, SdkRepository, TargetProvider};
pub use target::{
    processor_display, tag_display, SkinSet, TagAbiVariant, Target, DEFAULT_SKIN_NAME, DEFAULT_TAG,
};
