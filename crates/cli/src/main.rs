// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use clap::Parser;
use hebench_driver::{run_sweep, SweepConfig, SweepReport};
use hebench_schemes::default_schemes;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Benchmark Paillier, CKKS, BGV and BFV encrypt/decrypt latency and
/// plaintext/ciphertext size over a fixed cardinality sweep.
#[derive(Parser)]
#[command(name = "hebench", version)]
struct Cli {}

fn setup_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn run() -> Result<()> {
    let schemes = default_schemes();
    let rows = run_sweep(&schemes, &SweepConfig::default())?;

    println!("\nBenchmark comparison:");
    println!("{}", SweepReport::new(rows));

    Ok(())
}

fn main() {
    let _cli = Cli::parse();
    setup_tracing(Level::INFO);

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
