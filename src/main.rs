use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stacks_mint::chain::Network;
use stacks_mint::config::Config;
use stacks_mint::ui;

#[derive(Parser)]
#[command(name = "stacks-mint", version, about = "Terminal client for a Stacks NFT mint contract")]
struct Args {
    /// Path to the config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Network override
    #[arg(long, value_enum)]
    network: Option<Network>,

    /// Wallet account address override
    #[arg(long)]
    address: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging().context("failed to initialize logging")?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(network) = args.network {
        config.network = network;
    }
    if let Some(address) = args.address {
        config.wallet.address = Some(address);
    }

    tracing::info!(
        network = %config.network,
        contract = %format!("{}.{}", config.contract.address, config.contract.name),
        "starting"
    );

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    ui::runtime::run(config, runtime.handle().clone()).context("UI loop failed")?;
    Ok(())
}

/// The TUI owns stdout, so logs go to a file under the platform data dir.
/// `RUST_LOG` controls verbosity.
fn init_logging() -> anyhow::Result<()> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stacks-mint");
    fs::create_dir_all(&dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("stacks-mint.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
