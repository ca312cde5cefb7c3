//! sortcss - Main Entry Point

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use sortcss_engine::Engine;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the CSS
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = Engine::new(cli.config()).context("Failed to prepare sorting")?;

    for target in &cli.targets {
        let processed = engine
            .process(target)
            .with_context(|| format!("Failed to sort {}", target.display()))?;

        println!("{}", cli::report(&processed));
    }

    Ok(())
}
