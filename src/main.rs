mod application;
mod config;
mod infrastructure;
mod model;

use anyhow::Result;
use config::get_config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use application::service::FormatterService;
use infrastructure::{loader::FileLineSource, writer::FileGroupSink};

fn setup_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse()?)
        .from_env_lossy();

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = get_config()?;
    setup_tracing(&config.logging.level)?;
    tracing::debug!(?config, "Full application configuration");

    tracing::info!("Starting city-formatter...");

    let source = FileLineSource::new(&config);
    let sink = FileGroupSink::new(&config);

    let service = FormatterService::new(source, sink);

    if let Err(e) = service.run() {
        tracing::error!("Formatting finished with an error: {:?}", e);
        std::process::exit(1);
    }

    tracing::info!("City list formatted successfully!");
    Ok(())
}
