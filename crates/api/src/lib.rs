mod rate_limit;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use sathi_agent::AdvisoryAgent;
use sathi_core::{ChatInput, Locale, OfflineResponder};
use sathi_observability::{AppMetrics, MetricsSnapshot};
use sathi_storage::Store;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::rate_limit::IpRateLimiter;

#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<AdvisoryAgent<Store>>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub limiter: IpRateLimiter,
    pub allowed_origins: Arc<Vec<String>>,
}

pub async fn build_app() -> Result<Router> {
    let metrics = AppMetrics::shared();
    let responder = Arc::new(OfflineResponder::new()?);

    let store = if let Ok(database_url) = env::var("SATHI_DATABASE_URL") {
        Store::sqlite(&database_url).await?
    } else {
        Store::memory()
    };
    let store = Arc::new(store);

    let mut agent = AdvisoryAgent::new(responder, store, metrics.clone());
    if let Some(latency_ms) = env::var("SATHI_SIMULATED_LATENCY_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
    {
        agent = agent.with_simulated_latency(Duration::from_millis(latency_ms));
    }

    let api_key = env::var("SATHI_API_KEY").unwrap_or_else(|_| "dev-sathi-key".to_string());
    let rate_limit_window = Duration::from_secs(
        env::var("SATHI_API_RATE_LIMIT_WINDOW_SECONDS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(60),
    );
    let rate_limit_max = env::var("SATHI_API_RATE_LIMIT_MAX")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(80);
    let allowed_origins = parse_allowed_origins();

    let state = ApiState {
        agent: Arc::new(agent),
        metrics,
        api_key,
        limiter: IpRateLimiter::new(rate_limit_window, rate_limit_max),
        allowed_origins: Arc::new(allowed_origins),
    };

    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat/message", post(chat_message))
        .route("/api/chat/history", get(chat_history).delete(chat_history_clear))
        .route("/api/weather", get(weather))
        .route("/api/market-prices", get(market_prices))
        .layer(build_cors_layer(&state.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    language: Option<String>,
    session_id: Option<String>,
    user_id: Option<String>,
}

async fn chat_message(
    State(state): State<ApiState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let input = ChatInput {
        session_id: request.session_id,
        text: request.message,
        locale: request.language,
        user_id: request.user_id,
    };

    match state.agent.handle_chat(input).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(error) => internal_error(error),
    }
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    session_id: String,
}

async fn chat_history(
    State(state): State<ApiState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    match state.agent.history(&query.session_id).await {
        Ok(Some(session)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "session_id": session.session_id,
                "locale": session.locale,
                "turns": session.turns,
            })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "session_id": query.session_id,
                "locale": Locale::Unknown,
                "turns": [],
            })),
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

async fn chat_history_clear(
    State(state): State<ApiState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    match state.agent.clear_history(&query.session_id).await {
        Ok(cleared) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "session_id": query.session_id,
                "cleared": cleared,
            })),
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    city: Option<String>,
}

async fn weather(State(state): State<ApiState>, Query(query): Query<WeatherQuery>) -> Response {
    let gazetteer = state.agent.responder().gazetteer();
    let city = match query.city.as_deref() {
        Some(name) => gazetteer.extract_or_default(&name.trim().to_lowercase()),
        None => gazetteer.extract_or_default(""),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "city": city.name,
            "state": city.state,
            "temp": city.temp,
            "humidity": city.humidity,
            "condition": city.condition,
            "wind_kmh": city.wind_kmh,
        })),
    )
        .into_response()
}

async fn market_prices(State(_state): State<ApiState>) -> Response {
    (StatusCode::OK, Json(OfflineResponder::market_reading())).into_response()
}

fn internal_error(error: anyhow::Error) -> Response {
    tracing::error!(error = %error, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": "internal",
            "message": "request failed"
        })),
    )
        .into_response()
}

fn is_public_endpoint(path: &str) -> bool {
    matches!(path, "/health")
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if request.method() == Method::OPTIONS || is_public_endpoint(path.as_str()) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header_key != state.api_key {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "unauthorized",
                "message": "missing or invalid x-api-key"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();
    if is_public_endpoint(path.as_str()) {
        return next.run(request).await;
    }

    let ip = request_ip(&request);
    if !state.limiter.allow(&ip) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "message": "rate limit exceeded for this IP"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

fn request_ip(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_allowed_origins() -> Vec<String> {
    env::var("SATHI_ALLOWED_ORIGINS")
        .ok()
        .map(|value| {
            value
                .split(',')
                .map(|origin| origin.trim().trim_end_matches('/').to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn build_cors_layer(allowed_origins: &Arc<Vec<String>>) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let origins = if origins.is_empty() {
        vec![HeaderValue::from_static("http://localhost:5500")]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-api-key"),
        ])
}
