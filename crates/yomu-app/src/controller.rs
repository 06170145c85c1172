use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::routes::create_router;
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Start the HTTP server, plus the analyzer preload when enabled
    pub fn spawn_tasks(&self) -> JoinHandle<anyhow::Result<()>> {
        if self.state.config.analyzer.preload {
            let state = self.state.clone();
            tokio::spawn(async move { state.service.analyzer().warm_up().await });
        }

        tokio::spawn(serve(self.state.clone(), self.cancel_token.child_token()))
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

async fn serve(state: Arc<AppState>, cancel: CancellationToken) -> anyhow::Result<()> {
    let addr = state.config.server.socket_addr();
    let base_path = state.config.server.base_path.clone();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind server to {addr}"))?;

    tracing::info!("Listening on http://{}{}/api/tokenize", addr, base_path);

    let app = create_router(state, &base_path);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
