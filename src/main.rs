use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vinewalk::config::Config;
use vinewalk::engine::build_page;
use vinewalk::error::Error;
use vinewalk::source::source_for;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = err.code, internal = err.is_internal(), "{}", err.message);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    tracing::info!(
        "rendering {} into {} (maps: {})",
        config.routes,
        config.output,
        config.maps_enabled
    );

    let source = source_for(&config.routes)?;
    let page = build_page(&*source, config.maps_enabled).await;

    tokio::fs::write(&config.output, page.to_html()).await?;
    tracing::info!("wrote {} route cards to {}", page.card_count(), config.output);

    Ok(())
}
