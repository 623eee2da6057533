mod brands;
mod compare;
mod dashboard;
mod docqa;
mod media;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use spotdash_core::AppConfig;
use spotdash_docqa::AnswerClient;
use spotdash_media::MediaClassifier;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{
    enforce_rate_limit, request_id, require_bearer_auth, AuthState, RateLimitState, RequestId,
};

/// Uploaded documents are capped at 15 MiB.
const MAX_UPLOAD_BYTES: usize = 15 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub media: Arc<MediaClassifier>,
    pub answers: Arc<AnswerClient>,
    pub date_year_prefix: Arc<str>,
}

impl AppState {
    /// Wires the shared state from configuration: the database pool plus
    /// the two outbound clients.
    ///
    /// # Errors
    ///
    /// Fails if either HTTP client cannot be constructed.
    pub fn from_config(pool: PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let media = MediaClassifier::new(
            &config.media_base_url,
            config.media_api_key.as_deref(),
            config.media_request_timeout_secs,
        )?;
        let answers = AnswerClient::new(
            &config.answers_api_url,
            config.answers_api_key.as_deref(),
            config.answers_request_timeout_secs,
        )?;
        Ok(Self {
            pool,
            media: Arc::new(media),
            answers: Arc::new(answers),
            date_year_prefix: Arc::from(config.date_year_prefix.as_str()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_db_error(request_id: String, error: &spotdash_db::DbError) -> ApiError {
    tracing::error!(error = %error, "database query failed");
    ApiError::new(request_id, "internal_error", "database query failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}

fn protected_router(auth: AuthState, rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/dashboard", get(dashboard::get_dashboard))
        .route("/api/v1/dashboard/dates", get(dashboard::list_dates))
        .route("/api/v1/brands/suggest", get(brands::suggest_brands))
        .route("/api/v1/brands/{name}", get(brands::get_brand_detail))
        .route("/api/v1/compare", get(compare::get_comparison))
        .route("/api/v1/compare/export", get(compare::export_comparison))
        .route("/api/v1/media/{uuid}/kind", get(media::get_media_kind))
        .route(
            "/api/v1/docqa",
            post(docqa::ask_document).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    auth,
                    require_bearer_auth,
                )),
        )
}

pub fn build_app(state: AppState, auth: AuthState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(protected_router(auth, rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match spotdash_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    database: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        database: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, Duration::from_secs(60))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppState;
    use spotdash_core::AppConfig;

    /// Configuration whose outbound endpoints point nowhere; tests that
    /// exercise the media or docqa routes inject mock-server URLs instead.
    pub fn test_config() -> AppConfig {
        AppConfig {
            database_url: "postgres://unused".to_string(),
            env: spotdash_core::Environment::Test,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            date_year_prefix: "2025-".to_string(),
            db_max_connections: 2,
            db_min_connections: 0,
            db_acquire_timeout_secs: 5,
            media_base_url: "http://127.0.0.1:1".to_string(),
            media_api_key: None,
            media_request_timeout_secs: 1,
            answers_api_url: "http://127.0.0.1:1/generate".to_string(),
            answers_api_key: None,
            answers_request_timeout_secs: 1,
        }
    }

    pub fn test_state(pool: sqlx::PgPool) -> AppState {
        AppState::from_config(pool, &test_config()).expect("test state construction")
    }
}
