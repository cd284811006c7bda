use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use userdeck::cli::Cli;
use userdeck::config::Config;
use userdeck::random::{RandomSource, SeededRandom, ThreadRandom};
use userdeck::users::pipeline;
use userdeck::{data, logging, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    tracing::debug!("Config loaded: {:?}", config);

    // CLI flags win over the config file
    let data_path = cli.data.or(config.data.path);
    let raw = data::load(data_path.as_deref()).context("failed to load user data")?;
    match &data_path {
        Some(path) => tracing::info!("Loaded {} users from {}", raw.len(), path.display()),
        None => tracing::info!("Loaded {} users from the embedded dataset", raw.len()),
    }

    let mut random: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let processed = pipeline::process(&raw, random.as_mut());
    tracing::info!(
        "Pipeline kept {} adults, dropped {} minors",
        processed.len(),
        raw.len() - processed.len()
    );

    let tick_rate_ms = cli.tick_rate_ms.unwrap_or(config.ui.tick_rate_ms);
    ensure!(tick_rate_ms > 0, "tick rate must be at least 1ms");

    ui::run(processed, random, Duration::from_millis(tick_rate_ms))
        .context("terminal UI failed")?;

    Ok(())
}
