//! Main entry point for the Gatehouse backend.
//!
//! This file initializes the Axum web server, loads configuration from the
//! environment, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod errors;
mod middleware;
mod state;

use axum::{routing::get, Router};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let state = AppState::new(&config);

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/api/auth", auth::routes::auth_router())
        .nest("/api/users", api::user::routes::user_router(state.clone()))
        .layer(axum::middleware::from_fn(middleware::log_requests));

    tracing::info!(listen = %config.listen, "starting server");

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}

async fn root_handler() -> &'static str {
    "Welcome to Gatehouse!"
}
