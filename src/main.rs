use anyhow::Context;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cinema_manager::config::{Config, LogFormat};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    // stdout carries the dialogue, logs go to stderr
    let json = config.app.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with((!json).then(|| fmt::layer().with_writer(io::stderr)))
        .with(json.then(|| fmt::layer().json().with_writer(io::stderr)))
        .init();

    info!("Starting Cinema Room Manager");

    let stdin = io::stdin();
    let stdout = io::stdout();
    cinema_manager::run_session(config, stdin.lock(), stdout.lock())
        .context("Console session failed")?;

    info!("Cinema Room Manager stopped");
    Ok(())
}
