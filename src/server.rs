use axum::{Router, middleware, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res,
    api::{self, AppState},
    config::EnvConfig,
    info,
    spotify::ReqwestClient,
};

pub const STATUS_PATH: &str = "/api/spotify";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(STATUS_PATH, get(api::now_playing).options(api::preflight))
        .route("/health", get(api::health))
        .layer(middleware::map_response(api::cors_headers))
        .with_state(state)
}

/// Serves the status endpoint on `addr` until the process is stopped.
///
/// Credentials come from the process environment and outbound calls use a
/// shared `reqwest` client.
pub async fn start_api_server(addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let state = AppState::new(Arc::new(EnvConfig), Arc::new(ReqwestClient::new()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}{}", addr, STATUS_PATH);
    axum::serve(listener, app).await?;

    Ok(())
}
