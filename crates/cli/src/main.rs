use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tierpack_core::convert_tiers;

mod config;

use config::{create_example_config, PricingConfig};

#[derive(Parser, Debug)]
#[command(name = "tierpack")]
#[command(about = "Packs promotional price tiers into two transaction-payload registers")]
struct Args {
    /// Path to the tier table configuration file
    #[arg(short, long, default_value = "tiers.toml")]
    config: PathBuf,

    /// Override the configured unit token price
    #[arg(short, long)]
    token_price: Option<u64>,

    /// Write a starter configuration file and exit
    #[arg(long)]
    example_config: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    if args.example_config {
        create_example_config(&args.config)?;
        log::info!("Wrote example configuration to {}", args.config.display());
        return Ok(());
    }

    let config = PricingConfig::load(&args.config)?;
    let token_price = args.token_price.unwrap_or(config.token_price);

    log::info!(
        "Loaded {} tiers from {}",
        config.tiers.len(),
        args.config.display()
    );
    log::debug!("Unit token price: {}", token_price);

    let registers = convert_tiers(&config.tiers, token_price)
        .context("failed to convert price tiers")?;

    println!(
        "Prices1to4: {}. Prices5to8: {}",
        registers.register0, registers.register1
    );

    Ok(())
}
