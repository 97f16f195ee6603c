//! Device creation workflow.
//!
//! Validates the request, resolves the tag/ABI variant and skin,
//! asks the one interactive question, then persists the new device.
//! Any failure aborts the invocation; nothing is retried and nothing
//! is written before validation passes.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Mutex;

use avdkit_sdk::{processor_display, Logger, TargetProvider};
use tracing::debug;

use crate::error::AvdError;
use crate::selector::select_variant;
use crate::skins::variant_skins;
use crate::store::{AvdRecord, DeviceConfigStore};

/// One blocking read of a user reply. Injected so tests can answer
/// deterministically instead of blocking on stdin.
pub trait UserInput: Send + Sync {
    fn read_line(&self) -> std::io::Result<String>;
}

/// Reads replies from standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl UserInput for StdinInput {
    fn read_line(&self) -> std::io::Result<String> {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Replays canned replies; an exhausted script fails the read.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
        }
    }
}

impl UserInput for ScriptedInput {
    fn read_line(&self) -> std::io::Result<String> {
        self.replies.lock().unwrap().pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no scripted reply left")
        })
    }
}

/// Parameters of a `create avd` invocation. `target` and `name` are
/// optional here because their absence is a workflow error with a
/// defined message, not a parse error.
#[derive(Debug, Clone, Default)]
pub struct CreateAvdRequest {
    pub target: Option<String>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub abi: Option<String>,
}

/// Orchestrates selector, skin resolution, confirmation and store.
pub struct DeviceCreationWorkflow<'a> {
    targets: &'a dyn TargetProvider,
    store: &'a DeviceConfigStore,
    logger: &'a dyn Logger,
    input: &'a dyn UserInput,
}

impl<'a> DeviceCreationWorkflow<'a> {
    pub fn new(
        targets: &'a dyn TargetProvider,
        store: &'a DeviceConfigStore,
        logger: &'a dyn Logger,
        input: &'a dyn UserInput,
    ) -> Self {
        Self {
            targets,
            store,
            logger,
            input,
        }
    }

    /// Runs the workflow to completion and returns the created record.
    pub async fn run(&self, request: &CreateAvdRequest) -> Result<AvdRecord, AvdError> {
        let target_id = request
            .target
            .as_deref()
            .ok_or(AvdError::MissingParameter("target"))?;
        let name = request
            .name
            .as_deref()
            .ok_or(AvdError::MissingParameter("name"))?;

        let target = self
            .targets
            .find_target(target_id)
            .ok_or_else(|| AvdError::UnknownTarget(target_id.to_string()))?;

        let variant = select_variant(target, request.tag.as_deref(), request.abi.as_deref())?;

        if self.store.exists(name).await? {
            return Err(AvdError::DuplicateName(name.to_string()));
        }

        let skins = variant_skins(target, variant);

        if self.confirm_custom_hardware(&target.name())? {
            // Custom hardware profiles are not supported; the device
            // keeps the default profile.
            debug!("custom hardware profile requested for {:?}; using defaults", name);
        }

        let record = AvdRecord {
            name: name.to_string(),
            path: self.store.path_for(name),
            target: target.id(),
            tag: variant.tag.clone(),
            abi: variant.abi.clone(),
            skin: skins.default_skin().map(str::to_string),
        };
        self.store.create(&record).await?;

        self.logger.info(&format!(
            "Created AVD '{}' based on {}, {} processor",
            record.name,
            target.name(),
            processor_display(&record.tag, &record.abi),
        ));
        Ok(record)
    }

    /// Describes the platform, asks the custom-hardware question and
    /// performs one blocking read. An empty reply means no.
    fn confirm_custom_hardware(&self, target_name: &str) -> Result<bool, AvdError> {
        self.logger
            .info(&format!("{target_name} is a basic Android platform."));
        self.logger
            .info("Do you wish to create a custom hardware profile [no]");

        let reply = self.input.read_line()?;
        Ok(matches!(
            reply.trim().to_ascii_lowercase().as_str(),
            "yes" | "y"
        ))
    }
}
