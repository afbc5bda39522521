//! HTTP surface: a single POST endpoint carrying JSON-RPC bodies.

use crate::auth::RequestContext;
use crate::dispatch::Dispatcher;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

async fn handle_mcp(
    State(dispatcher): State<Arc<Dispatcher>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let ctx = match headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str())
    {
        Some(Ok(value)) => RequestContext::with_authorization(value),
        // Non-UTF-8 header values cannot be a valid bearer credential;
        // treat them as absent and let auth resolution reject the call.
        Some(Err(_)) | None => RequestContext::default(),
    };

    let body = String::from_utf8_lossy(&body);
    match dispatcher.handle(&body, &ctx).await {
        Some(response) => Json(response).into_response(),
        // Notifications get no body.
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, dispatcher: Arc<Dispatcher>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "gateway listening");
    axum::serve(listener, router(dispatcher)).await?;
    Ok(())
}
