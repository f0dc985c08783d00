//! Axum-based HTTP server.

use crate::handlers;
use axum::routing::{get, post};
use axum::Router;
use quizd_engine::SessionEngine;
use quizd_store::{CatalogStore, ResultStore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the API router over a shared engine.
///
/// Exposed separately from [`RpcServer`] so tests can drive it in-process
/// without binding a port.
pub fn routes<S>(engine: Arc<SessionEngine<S>>) -> Router
where
    S: CatalogStore + ResultStore + Send + Sync + 'static,
{
    Router::new()
        .route("/quizzes", post(handlers::create_quiz::<S>))
        .route("/quizzes/:id", get(handlers::get_quiz::<S>))
        .route(
            "/quizzes/:quiz_id/questions/:question_id/submit",
            post(handlers::submit_answer::<S>),
        )
        .route(
            "/quizzes/:quiz_id/results/:user_id",
            get(handlers::get_results::<S>),
        )
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// The HTTP server, configured with a port and a shared engine.
pub struct RpcServer<S> {
    pub port: u16,
    pub engine: Arc<SessionEngine<S>>,
}

impl<S> RpcServer<S>
where
    S: CatalogStore + ResultStore + Send + Sync + 'static,
{
    pub fn new(port: u16, engine: Arc<SessionEngine<S>>) -> Self {
        Self { port, engine }
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn start(&self) -> std::io::Result<()> {
        let app = routes(self.engine.clone());
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("RPC server listening on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { info!("received SIGINT, shutting down"); }
        _ = terminate => { info!("received SIGTERM, shutting down"); }
    }
}
