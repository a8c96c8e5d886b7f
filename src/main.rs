//! Permit2 swap CLI
//!
//! Command-line interface for running a WETH -> wstETH swap through 0x.

use clap::{Parser, Subcommand};
use permit2_swap::swap::report_sources;
use permit2_swap::{
    ChainClient, Config, Network, Result, SecureWallet, SwapOutcome, SwapRunner, SwapSettings,
    ZeroExClient,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "permit2-swap")]
#[command(about = "Swap WETH for wstETH through the 0x Permit2 API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read secrets from this dotenv file instead of the environment
    #[arg(short, long, global = true)]
    env_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full swap: sources, price, approval, quote, permit, submit
    Swap {
        /// Simulate the approval and sign the swap, but broadcast nothing
        #[arg(long)]
        dry_run: bool,

        /// Network (ethereum, arbitrum, optimism, base, scroll)
        #[arg(short, long)]
        network: Option<Network>,

        /// Sell amount in WETH (e.g., 0.1)
        #[arg(short, long)]
        amount: Option<String>,

        /// Affiliate fee in basis points
        #[arg(long)]
        affiliate_fee_bps: Option<u16>,
    },

    /// List the liquidity sources 0x uses on a network
    Sources {
        /// Network (ethereum, arbitrum, optimism, base, scroll)
        #[arg(short, long)]
        network: Option<Network>,
    },

    /// Get an indicative price without approving or swapping
    Price {
        /// Network (ethereum, arbitrum, optimism, base, scroll)
        #[arg(short, long)]
        network: Option<Network>,

        /// Sell amount in WETH (e.g., 0.1)
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    // Secrets are checked before anything touches the network
    let mut config = match &cli.env_file {
        Some(path) => Config::from_env_file(path)?,
        None => Config::from_env()?,
    };

    match cli.command {
        Commands::Swap {
            dry_run,
            network,
            amount,
            affiliate_fee_bps,
        } => {
            apply_overrides(&mut config.swap, network, amount, affiliate_fee_bps);
            run_swap(config, dry_run).await?;
        }
        Commands::Sources { network } => {
            apply_overrides(&mut config.swap, network, None, None);
            run_sources(config).await?;
        }
        Commands::Price { network, amount } => {
            apply_overrides(&mut config.swap, network, amount, None);
            run_price(config).await?;
        }
        Commands::Config => {
            show_config(&config)?;
        }
    }

    Ok(())
}

fn apply_overrides(
    settings: &mut SwapSettings,
    network: Option<Network>,
    amount: Option<String>,
    affiliate_fee_bps: Option<u16>,
) {
    if let Some(network) = network {
        settings.network = network;
    }
    if let Some(amount) = amount {
        settings.sell_amount = amount;
    }
    if let Some(bps) = affiliate_fee_bps {
        settings.affiliate_fee_bps = bps;
    }
}

fn build_runner(config: Config) -> Result<SwapRunner<ZeroExClient, ChainClient>> {
    let wallet = SecureWallet::from_secret(&config.signing_key)?;
    tracing::info!(address = %wallet.address(), "Loaded wallet from PRIVATE_KEY");

    let chain = ChainClient::new(config.rpc_url, wallet, config.swap.network.chain_id());
    let api = ZeroExClient::new(&config.swap.api_base_url, &config.api_key)?;

    Ok(SwapRunner::new(api, chain, config.swap))
}

async fn run_swap(config: Config, dry_run: bool) -> Result<()> {
    let runner = build_runner(config)?.with_dry_run(dry_run);

    match runner.run().await? {
        SwapOutcome::Submitted { tx_hash, .. } => {
            tracing::info!(tx_hash = %tx_hash, "Swap submitted");
        }
        SwapOutcome::Signed { raw_len } => {
            tracing::info!(raw_len, "Dry run complete, nothing broadcast");
        }
        SwapOutcome::PermitNotRequired => {
            tracing::warn!("Quote needed no Permit2 signature, nothing submitted");
        }
        SwapOutcome::NoLiquidity => {
            tracing::error!("No liquidity for this swap, nothing submitted");
        }
    }

    Ok(())
}

async fn run_sources(config: Config) -> Result<()> {
    let api = ZeroExClient::new(&config.swap.api_base_url, &config.api_key)?;
    report_sources(&api, config.swap.network).await?;
    Ok(())
}

async fn run_price(config: Config) -> Result<()> {
    let runner = build_runner(config)?;
    runner.price_only().await?;
    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let wallet = SecureWallet::from_secret(&config.signing_key)?;

    println!("{}", serde_json::to_string_pretty(&config.swap)?);
    println!("Account: {}", wallet.address());
    println!("RPC host: {}", config.rpc_url.host_str().unwrap_or("-"));
    Ok(())
}
