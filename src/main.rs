//! Prints every configured kernel for a fixed pair of sequences.
//!
//! Run with:
//!   cargo run -- [--config demo.json] [-v]
//!   cargo run -- --write-default demo.json

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ferrite_kernels::{
    softmax, ContrastiveLoss, DemoConfig, KernelError, TripletRankingLoss,
};

#[derive(Parser)]
#[command(name = "ferrite-kernels", about = "Print sample activation and loss values", version)]
struct Cli {
    /// JSON demo configuration; the built-in sample is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the built-in sample configuration to this path and exit.
    #[arg(long)]
    write_default: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), KernelError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(path) = cli.write_default {
        DemoConfig::default().save_json(&path)?;
        tracing::info!("wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match cli.config {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            DemoConfig::load_json(&path)?
        }
        None => DemoConfig::default(),
    };

    for activation in &config.activations {
        println!("{}({}) = {}", activation.name(), config.probe, activation.apply(config.probe));
    }

    for loss in &config.losses {
        let value = loss.evaluate(&config.ground, &config.predicted)?;
        println!("{} = {value}", loss.name());
    }

    println!("softmax = {:?}", softmax(&config.predicted));

    let contrastive = ContrastiveLoss::loss(
        config.contrastive_similar,
        &config.ground,
        &config.predicted,
        config.contrastive_margin,
    )?;
    println!("contrastive = {contrastive}");

    // predicted doubles as anchor and negative, ground as positive.
    let triplet = TripletRankingLoss::loss(
        &config.predicted,
        &config.ground,
        &config.predicted,
        config.triplet_margin,
    )?;
    println!("triplet ranking = {triplet}");

    Ok(())
}
