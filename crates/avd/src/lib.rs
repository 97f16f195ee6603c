//! AvdKit virtual device management
//!
//! Resolves tag/ABI expressions against installed targets, aggregates
//! skins, and creates and enumerates AVD configurations on disk.

pub mod error;
pub mod selector;
pub mod skins;
pub mod store;
pub mod workflow;

pub use error::AvdError;
pub use selector::select_variant;
pub use skins::{target_skins, variant_skins};
pub use store::{AvdRecord, DeviceConfigStore};
pub use workflow::{
    CreateAvdRequest, DeviceCreationWorkflow, ScriptedInput, StdinInput, UserInput,
};
