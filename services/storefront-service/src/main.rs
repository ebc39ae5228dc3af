use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use is_handoff::WhatsApp;
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

mod catalog;
mod checkout;
mod config;

use config::ServiceConfig;

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    error: String,
}

pub(crate) type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

pub(crate) struct AppState {
    pub(crate) config: ServiceConfig,
    pub(crate) whatsapp: WhatsApp,
}

impl AppState {
    fn new(config: ServiceConfig) -> Self {
        let whatsapp = WhatsApp::new(config.whatsapp.clone());
        Self { config, whatsapp }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServiceConfig::from_env()?;
    let addr = config.bind_addr;
    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "no index.html under {}; only the JSON API will be useful",
            config.static_dir.display()
        );
    }

    let app = app(Arc::new(AppState::new(config)));

    info!("storefront-service listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", err);
    }
    info!("shutting down");
}

pub(crate) fn app(state: Arc<AppState>) -> Router {
    let static_dir = &state.config.static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/catalog/categories", get(catalog::categories))
        .route("/catalog/categories/{id}/products", get(catalog::category_products))
        .route("/catalog/products/{id}", get(catalog::product_detail))
        .route("/catalog/arts", get(catalog::art_categories))
        .route("/catalog/paintings", get(catalog::paintings))
        .route("/catalog/prints", get(catalog::prints))
        .route("/catalog/prints/{code}/price", get(catalog::print_price))
        .route("/catalog/art/{code}", get(catalog::art_detail))
        .route("/checkout/quote", post(checkout::quote))
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "storefront-service",
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "storefront-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub(crate) fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

pub(crate) fn not_found(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

pub(crate) fn internal_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub(crate) fn epoch_ms() -> anyhow::Result<u64> {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    Ok(u64::try_from(millis)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use std::path::Path;
    use tower::ServiceExt;

    pub(crate) fn test_app(static_dir: &Path) -> Router {
        let config = ServiceConfig {
            bind_addr: ([127, 0, 0, 1], 0).into(),
            static_dir: static_dir.to_path_buf(),
            whatsapp: Some("96181773588".to_owned()),
        };
        app(Arc::new(AppState::new(config)))
    }

    pub(crate) async fn send(
        app: Router,
        request: Request<Body>,
    ) -> anyhow::Result<(StatusCode, Vec<u8>)> {
        let response = app.oneshot(request).await?;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, body.to_vec()))
    }

    pub(crate) async fn get_json(
        app: Router,
        uri: &str,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let (status, body) = send(app, request).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }
}
