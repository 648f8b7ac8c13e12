//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{PostboxError, Result};
use crate::store::PostStore;

use super::router;

/// HTTP server for Postbox
pub struct Server {
    listener: TcpListener,
    store: Arc<PostStore>,
}

impl Server {
    /// Bind `config.listen_addr`
    pub async fn bind(config: &Config, store: Arc<PostStore>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr).await.map_err(|e| {
            PostboxError::Config(format!("cannot listen on {}: {}", config.listen_addr, e))
        })?;
        Ok(Self { listener, store })
    }

    /// Address actually bound (useful with port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Listening on {}", self.local_addr()?);

        axum::serve(self.listener, router(self.store))
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
