use std::sync::Arc;

use clap::Parser;
use tokio::signal;

pub mod controller;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod settings;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::settings::{Cli, load_config};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let grace = config.server.shutdown_grace();
    tracing::info!(
        "Translating {} via {} (timeout {} ms), dictionary {}",
        config.translator.lang_pair(),
        config.translator.api_url,
        config.translator.timeout_ms,
        config.analyzer.dictionary_path.display()
    );

    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);
    let mut server = controller.spawn_tasks();

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        result = &mut server => {
            return match result {
                Ok(Ok(())) => {
                    tracing::warn!("server task exited");
                    Ok(())
                }
                Ok(Err(e)) => Err(e),
                Err(e) => {
                    tracing::error!("server task panicked: {e}");
                    Err(e.into())
                }
            };
        }
    }

    controller.shutdown();
    match tokio::time::timeout(grace, server).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(e.into()),
        Err(_) => {
            tracing::warn!("Server did not stop within {} ms", grace.as_millis());
            Ok(())
        }
    }
}
