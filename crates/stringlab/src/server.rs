use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use crate::storage::memory::MemoryStringStore;
use crate::storage::StringStore;

pub mod error;
pub mod strings;

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    /// Bind to `addr` with a fresh in-memory store. Port 0 picks a free
    /// port; the actual address is available via [`Server::addr`].
    pub async fn bind(addr: SocketAddr) -> Result<Self, String> {
        Self::with_store(addr, Box::new(MemoryStringStore::new())).await
    }

    /// Bind to `addr`, serving records from the given store.
    pub async fn with_store(
        addr: SocketAddr,
        store: Box<dyn StringStore>,
    ) -> Result<Self, String> {
        let state = Arc::new(ServerState {
            store: RwLock::new(store),
        });
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = Router::new()
            .route("/health", get(health))
            .route("/strings", get(strings::list).post(strings::create))
            .route(
                "/strings/filter-by-natural-language",
                get(strings::filter_by_natural_language),
            )
            .route(
                "/strings/:value",
                get(strings::get_by_value).delete(strings::remove),
            )
            .with_state(state)
            .layer(cors);
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|error| error.to_string())?;
        let addr = listener.local_addr().map_err(|error| error.to_string())?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        tracing::info!(%addr, "string analysis server started");

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> Result<(), String> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| "failed to send server shutdown signal".to_string())
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

async fn health() -> &'static str {
    "ok"
}

pub(crate) struct ServerState {
    pub(crate) store: RwLock<Box<dyn StringStore>>,
}
