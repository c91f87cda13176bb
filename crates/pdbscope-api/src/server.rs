//! API server implementation

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use pdbscope_client::RcsbClient;
use pdbscope_core::{PdbScopeConfig, StructureSource};

use crate::Result;
use crate::routes::{self, AppState};

/// pdbscope dashboard server
pub struct Server {
    config: PdbScopeConfig,
    source: Arc<dyn StructureSource>,
}

impl Server {
    /// Create a server over an arbitrary structure source.
    pub fn new(config: PdbScopeConfig, source: Arc<dyn StructureSource>) -> Self {
        Self { config, source }
    }

    /// Create a server backed by the RCSB endpoints in `config`.
    pub fn from_config(config: PdbScopeConfig) -> Result<Self> {
        let client = RcsbClient::new(&config.rcsb)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// The address the server will bind to.
    pub fn bind_addr(&self) -> &str {
        &self.config.server.bind
    }

    /// Build the router without binding a socket.
    pub fn router(&self) -> Router {
        let state = AppState::new(
            self.source.clone(),
            self.config.viewer.clone(),
            self.config.rcsb.entity_id,
        );
        routes::router(state)
    }

    /// Bind and serve until interrupted.
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(self.bind_addr()).await?;
        info!(addr = %listener.local_addr()?, "pdbscope listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("pdbscope stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("shutdown requested");
}
