/*
[INPUT]:  CLI arguments, YAML configuration file, UQPAY_* environment, Ctrl-C
[OUTPUT]: Pretty-printed JSON of one UQPAY API call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use uqpay_cli::{CliConfig, Command, execute};
use uqpay_sdk::{RequestContext, UqpayClient};

#[derive(Parser, Debug)]
#[command(name = "uqpay", version, about = "UQPAY API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Overall deadline for the call, in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    timeout_secs: Option<u64>,
    /// Validate configuration and exit without calling the API
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    let sdk_config = config.to_sdk_config()?;
    info!(environment = %sdk_config.environment, "configuration loaded");

    let client = UqpayClient::new(sdk_config).context("create client")?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .context("a subcommand is required unless --dry-run is given")?;

    let shutdown = CancellationToken::new();
    setup_signal_handler(shutdown.clone());

    let mut context = RequestContext::new().with_cancellation(shutdown);
    if let Some(secs) = args.timeout_secs {
        context = context.with_timeout(Duration::from_secs(secs));
    }

    let value = execute(&client.with_context(context), command).await?;
    let rendered = serde_json::to_string_pretty(&value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown.cancel();
    });
}
