//! AvdKit - Android SDK target and virtual device manager
//!
//! Command-line entry point: parses arguments, resolves the SDK and
//! AVD roots, and dispatches to the command layer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use avdkit::commands::{CreateAvdCommand, ListAvdCommand, ListTargetsCommand};
use avdkit::config::{default_avd_root, AppConfig};
use avdkit_avd::{CreateAvdRequest, DeviceConfigStore, StdinInput};
use avdkit_sdk::{ConsoleLogger, Logger, SdkRepository};

#[derive(Parser)]
#[command(name = "avdkit", version, about = "Android SDK target and virtual device manager")]
struct Cli {
    /// Root of the installed Android SDK
    #[arg(long, global = true, value_name = "DIR")]
    sdk_root: Option<PathBuf>,

    /// Directory holding AVD configurations
    #[arg(long, global = true, value_name = "DIR")]
    avd_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List installed targets or virtual devices
    #[command(subcommand)]
    List(ListWhat),
    /// Create a new virtual device
    #[command(subcommand)]
    Create(CreateWhat),
}

#[derive(Subcommand)]
enum ListWhat {
    /// List installed platform targets
    Targets {
        /// One id per line, nothing else
        #[arg(long)]
        compact: bool,
    },
    /// List existing virtual devices
    Avd {
        /// One name per line, nothing else
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Subcommand)]
enum CreateWhat {
    /// Create a virtual device
    Avd(CreateAvdArgs),
}

#[derive(Args)]
struct CreateAvdArgs {
    /// Target id (index or android-<api>)
    #[arg(long)]
    target: Option<String>,

    /// Name of the new device
    #[arg(long)]
    name: Option<String>,

    /// System image tag
    #[arg(long)]
    tag: Option<String>,

    /// ABI, as 'abi' or 'tag/abi'
    #[arg(long)]
    abi: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();
    debug!("{} v{}", avdkit::APP_NAME, avdkit::VERSION);

    let logger = ConsoleLogger;
    if let Err(err) = run(cli, &logger).await {
        logger.error(&err.to_string());
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, logger: &dyn Logger) -> Result<()> {
    let config = AppConfig::load_or_create().await.unwrap_or_else(|err| {
        debug!("could not load configuration: {}; using defaults", err);
        AppConfig::default()
    });

    let sdk_root = resolve_sdk_root(&cli, &config)?;
    let avd_root = resolve_avd_root(&cli, &config)?;
    debug!("sdk root {:?}, avd root {:?}", sdk_root, avd_root);

    let repo = SdkRepository::scan(sdk_root).await?;
    let store = DeviceConfigStore::new(avd_root);

    match cli.command {
        Command::List(ListWhat::Targets { compact }) => {
            ListTargetsCommand { compact }.execute(&repo, logger);
        }
        Command::List(ListWhat::Avd { compact }) => {
            ListAvdCommand { compact }
                .execute(&repo, &store, logger)
                .await?;
        }
        Command::Create(CreateWhat::Avd(args)) => {
            let request = CreateAvdRequest {
                target: args.target,
                name: args.name,
                tag: args.tag,
                abi: args.abi,
            };
            CreateAvdCommand { request }
                .execute(&repo, &store, logger, &StdinInput)
                .await?;
        }
    }

    Ok(())
}

fn resolve_sdk_root(cli: &Cli, config: &AppConfig) -> Result<PathBuf> {
    cli.sdk_root
        .clone()
        .or_else(|| std::env::var_os("ANDROID_SDK_ROOT").map(PathBuf::from))
        .or_else(|| std::env::var_os("ANDROID_HOME").map(PathBuf::from))
        .or_else(|| config.sdk_root.clone())
        .context("Android SDK root not set; pass --sdk-root or set ANDROID_SDK_ROOT")
}

fn resolve_avd_root(cli: &Cli, config: &AppConfig) -> Result<PathBuf> {
    cli.avd_root
        .clone()
        .or_else(|| config.avd_root.clone())
        .or_else(default_avd_root)
        .context("AVD root not set; pass --avd-root")
}
