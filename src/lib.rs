//! AvdKit - Android SDK target and virtual device manager
//!
//! A command-line manager for a locally installed Android SDK:
//! lists platform targets with their tag/ABI variants and skins,
//! lists existing Android Virtual Devices, and creates new ones.
//!
//! ## Architecture
//!
//! AvdKit is organized into two library crates plus this CLI layer:
//!
//! - `avdkit-sdk`: read-only SDK repository scanning (targets,
//!   system images, skins) and the output sink.
//! - `avdkit-avd`: tag/ABI selection, skin aggregation, the device
//!   configuration store and the creation workflow.

pub mod commands;
pub mod config;

// Re-export crates for library usage
pub use avdkit_avd as avd;
pub use avdkit_sdk as sdk;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "AvdKit";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::{CreateAvdCommand, ListAvdCommand, ListTargetsCommand};
    pub use crate::config::AppConfig;
    pub use avdkit_avd::{CreateAvdRequest, DeviceConfigStore, DeviceCreationWorkflow};
    pub use avdkit_sdk::{ConsoleLogger, Logger, SdkRepository, TargetProvider};
}
