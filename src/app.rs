use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::MarketProfiler;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ConfigService;
use crate::interfaces::console;

pub fn run() -> Result<()> {
    let config = ConfigService::new().load_with_args(std::env::args().skip(1))?;
    init_tracing(&config.log_filter)?;

    info!(
        apple = %config.apple_path.display(),
        google = %config.google_path.display(),
        "Profiling app markets"
    );

    let report = MarketProfiler::new(config).profile()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    console::render(&report, &mut out)?;
    out.flush()?;

    Ok(())
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::ConfigError(format!("Invalid log_filter '{}': {}", filter, e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    Ok(())
}
