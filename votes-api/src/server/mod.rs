// Server module - HTTP server setup and routing
pub mod auth;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use votes_engine::VoteEngine;

use crate::errors::ServiceError;
use self::state::AppState;

/// Create the Axum application router with all routes and middleware
pub fn create_app(engine: Arc<VoteEngine>, cors: CorsLayer) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/posts/:id/vote", post(handlers::vote_post))
        .route("/comments/:id/vote", post(handlers::vote_comment))
        .route("/posts/:id/votes", get(handlers::post_tally))
        .route("/comments/:id/votes", get(handlers::comment_tally))
        .route("/users/:id/score", get(handlers::user_score))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the server on the specified address until Ctrl-C is received
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServiceError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("- Vote endpoints: http://{}/posts/:id/vote, http://{}/comments/:id/vote", addr, addr);
    info!("- Health endpoint: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
