mod locations;
mod products;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use grocery_core::KrogerConfig;
use grocery_kroger::{KrogerClient, KrogerError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub kroger: Arc<KrogerConfig>,
}

/// Error body returned to the frontend: `{"error": true, "message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: bool,
    message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            error: true,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Parses an optional integer query parameter.
///
/// Absent or empty means `0` (no filter) instead of a `400`, so the frontend
/// may leave the paging fields out. Present but non-integer values are still
/// rejected with `400`.
pub(super) fn parse_int_param(name: &str, raw: Option<&str>) -> Result<i32, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse::<i32>().map_err(|e| {
            ApiError::bad_request(format!(
                "parameter '{name}' value '{value}' is not an integer: {e}"
            ))
        }),
    }
}

/// Builds a fresh client from configuration and authenticates it.
///
/// Failures here are the server's fault (bad credentials, upstream down) and
/// map to `500`.
pub(super) async fn setup_client(
    config: &KrogerConfig,
    req_id: &RequestId,
) -> Result<KrogerClient, ApiError> {
    let mut client = KrogerClient::with_timeout(
        &config.base_url,
        &config.client_id,
        &config.client_secret,
        &config.chain,
        config.timeout_secs,
    )
    .map_err(|e| map_setup_error(req_id, &e))?;

    client
        .authenticate()
        .await
        .map_err(|e| map_setup_error(req_id, &e))?;
    Ok(client)
}

fn map_setup_error(req_id: &RequestId, error: &KrogerError) -> ApiError {
    tracing::error!(request_id = %req_id.0, error = %error, "kroger client setup failed");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

/// Every failure once the client is authenticated is reported as `400`.
pub(super) fn map_query_error(req_id: &RequestId, error: &KrogerError) -> ApiError {
    if error.is_validation() {
        tracing::debug!(request_id = %req_id.0, error = %error, "rejected query parameters");
    } else {
        tracing::warn!(request_id = %req_id.0, error = %error, "kroger query failed");
    }
    ApiError::bad_request(error.to_string())
}

fn build_cors(app_url: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(app_url)
        .with_context(|| format!("invalid frontend origin '{app_url}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300)))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

/// Builds the router with CORS restricted to `app_url`.
///
/// # Errors
///
/// Returns an error if `app_url` is not a valid header value.
pub fn build_app(state: AppState, app_url: &str) -> anyhow::Result<Router> {
    let app = Router::new()
        .route("/health", get(health))
        .route("/locations", get(locations::get_locations))
        .route("/products", get(products::get_products))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors(app_url)?)
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state);
    Ok(app)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
