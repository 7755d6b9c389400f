//! HTTP surface of the storefront.
//!
//! `build_router` is the single entry point; `serve` attaches the trace layer
//! and binds a listener. Tests compose the bare router directly.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::core::checkout::{CheckoutError, CheckoutRequestValidator, CheckoutResponse};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_socket_addr;

pub const SERVICE_NAME: &str = "comic-storefront";

#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: CheckoutRequestValidator,
    pub service: &'static str,
    pub version: &'static str,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            validator: CheckoutRequestValidator::new(),
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

impl IntoResponse for CheckoutResponse {
    fn into_response(self) -> Response {
        with_allow_header((self.status, Json(self.body)).into_response())
    }
}

impl IntoResponse for CheckoutError {
    fn into_response(self) -> Response {
        with_allow_header((self.status(), Json(self.body())).into_response())
    }
}

// 405 answers must advertise the accepted method
fn with_allow_header(mut response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
    }
    response
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // every method is routed here so that non-POST requests get the JSON 405 body
        .route("/api/checkout", any(checkout))
        .route("/api/health", get(health))
        .with_state(state)
}

pub(crate) async fn checkout(
    State(st): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> CheckoutResponse {
    tracing::debug!(%method, bytes = body.len(), "Checkout request");
    st.validator.validate(&method, &body)
}

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.service,
            version: st.version,
        }),
    )
}

pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = validate_socket_addr("server.bind", config.bind_address())?;
    let app = build_router(Arc::new(AppState::new())).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🛒 Checkout API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Checkout API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
