use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use share_auditor::{
    commands::{self, format_shares},
    config::{RecoverConfig, SplitConfig},
};
use shamir_sharing::AuditOutcome;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[clap(name = "share-auditor", about = "Split secrets into shares, recover them and audit shares for corruption")]
struct Options {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a secret into shares.
    Split {
        /// The path to the config file
        config_path: String,

        /// Seed for the random source.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Recover a secret out of a random subset of the shares.
    Reconstruct {
        /// The path to the config file
        config_path: String,

        /// Seed for the random source.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that every subset of the shares agrees on the secret.
    Audit {
        /// The path to the config file
        config_path: String,
    },
}

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn split(config_path: &str, seed: Option<u64>) -> Result<()> {
    let config = SplitConfig::load(config_path).context("loading config")?;
    let output = commands::split(&config, &mut build_rng(seed))?;
    println!("Prime: {}", output.modulus);
    println!("Shares: {}", format_shares(&output.shares));
    Ok(())
}

fn reconstruct(config_path: &str, seed: Option<u64>) -> Result<()> {
    let config = RecoverConfig::load(config_path).context("loading config")?;
    let secret = commands::reconstruct(&config, &mut build_rng(seed))?;
    println!("Secret recovered is: {secret}");
    Ok(())
}

fn audit(config_path: &str) -> Result<()> {
    let config = RecoverConfig::load(config_path).context("loading config")?;
    let output = commands::audit(&config)?;
    let report = &output.report;
    match report.outcome() {
        AuditOutcome::Consistent(secret) => {
            println!("All {} subsets agree, secret is: {secret}", report.subsets_evaluated());
            return Ok(());
        }
        AuditOutcome::Majority(secret) => println!("Shares are inconsistent, most likely secret is: {secret}"),
        AuditOutcome::Tie(leaders) => {
            let leaders = leaders.iter().map(u64::to_string).collect::<Vec<_>>().join(", ");
            println!("Shares are inconsistent, no unique winner among: {leaders}");
        }
    }
    println!("Secrets reconstructed by {} subsets:", report.subsets_evaluated());
    for (secret, count) in report.histogram() {
        println!("  {secret}: {count}");
    }
    if output.suspects.is_empty() {
        println!("No single share explains the disagreement");
    }
    for suspect in &output.suspects {
        println!(
            "Suspect share #{} ({},{}), the others agree on {}",
            suspect.index,
            suspect.point.x(),
            suspect.point.y(),
            suspect.secret
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(io::stderr)).init();

    let options = Options::parse();
    match options.command {
        Command::Split { config_path, seed } => split(&config_path, seed),
        Command::Reconstruct { config_path, seed } => reconstruct(&config_path, seed),
        Command::Audit { config_path } => audit(&config_path),
    }
}
