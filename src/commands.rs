//! CLI commands for AvdKit
//!
//! Command structs that render listings and drive the creation
//! workflow. All user-facing output goes through the injected
//! [`Logger`] so tests can assert on the exact lines.

use avdkit_avd::{
    target_skins, AvdError, CreateAvdRequest, DeviceConfigStore, DeviceCreationWorkflow, UserInput,
};
use avdkit_sdk::{Logger, TargetProvider};

/// List installed platform targets.
pub struct ListTargetsCommand {
    pub compact: bool,
}

impl ListTargetsCommand {
    /// Renders the target listing.
    pub fn execute(&self, targets: &dyn TargetProvider, logger: &dyn Logger) {
        if self.compact {
            for target in targets.targets() {
                logger.info(&target.id());
            }
            return;
        }

        logger.info("Available Android targets:");
        for target in targets.targets() {
            logger.info("----------");
            logger.info(&format!("id: {} or \"{}\"", target.index, target.id()));
            logger.info(&format!("     Name: {}", target.name()));
            logger.info("     Type: Platform");
            logger.info(&format!("     API level: {}", target.api_level));
            logger.info(&format!("     Revision: {}", target.revision));

            let skins = target_skins(target);
            if !skins.is_empty() {
                let rendered: Vec<String> = skins
                    .names()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        if i == 0 {
                            format!("{name} (default)")
                        } else {
                            name.clone()
                        }
                    })
                    .collect();
                logger.info(&format!("     Skins: {}", rendered.join(", ")));
            }

            let pairs = target.tag_abi_pairs();
            if !pairs.is_empty() {
                logger.info(&format!(" Tag/ABIs : {}", pairs.join(", ")));
            }
        }
    }
}

/// List existing virtual devices.
pub struct ListAvdCommand {
    pub compact: bool,
}

impl ListAvdCommand {
    /// Renders the device listing.
    pub async fn execute(
        &self,
        targets: &dyn TargetProvider,
        store: &DeviceConfigStore,
        logger: &dyn Logger,
    ) -> Result<(), AvdError> {
        let records = store.list().await?;

        if self.compact {
            for record in &records {
                logger.info(&record.name);
            }
            return Ok(());
        }

        logger.info("Available Android Virtual Devices:");
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                logger.info("---------");
            }
            logger.info(&format!("    Name: {}", record.name));
            logger.info(&format!("    Path: {}", record.path.display()));

            // The target line falls back to the raw id when the
            // target is no longer installed.
            let target_line = match targets.find_target(&record.target) {
                Some(target) => format!("{} (API level {})", target.name(), target.api_level),
                None => record.target.clone(),
            };
            logger.info(&format!("  Target: {target_line}"));
            logger.info(&format!(" Tag/ABI: {}", record.tag_abi()));
            if let Some(skin) = &record.skin {
                logger.info(&format!("    Skin: {skin}"));
            }
        }
        Ok(())
    }
}

/// Create a new virtual device.
pub struct CreateAvdCommand {
    pub request: CreateAvdRequest,
}

impl CreateAvdCommand {
    /// Runs the creation workflow.
    pub async fn execute(
        &self,
        targets: &dyn TargetProvider,
        store: &DeviceConfigStore,
        logger: &dyn Logger,
        input: &dyn UserInput,
    ) -> Result<(), AvdError> {
        DeviceCreationWorkflow::new(targets, store, logger, input)
            .run(&self.request)
            .await?;
        Ok(())
    }
}
