mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use doc_tree::config::Config;
use doc_tree::pipeline;

fn main() -> Result<()> {
    // Started with no arguments at all: ask instead of assuming
    let interactive = std::env::args_os().len() <= 1;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default()?,
    };
    config.apply_env_overrides();
    cli.apply(&mut config);
    config.validate()?;

    let options = if interactive {
        let stdin = std::io::stdin();
        cli::prompt_options(&mut stdin.lock(), &mut std::io::stdout())
            .context("Failed to read answers")?
    } else {
        cli.build_options()
    };

    let summary = pipeline::run(&config, &options)?;
    if let Some(report) = &summary.merge {
        tracing::info!(
            "Merge: {} added, {} removed, {} retained",
            report.added.len(),
            report.removed.len(),
            report.retained.len()
        );
    }
    tracing::info!("Done in {} ms", summary.duration_ms);

    Ok(())
}
