use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::dataset::store::DiseaseTable;
use crate::matching::engine::Matcher;

/// Maximum symptoms accepted in a single request (`DoS` guard)
pub const MAX_SYMPTOMS_PER_REQUEST: usize = 50;

/// Maximum JSON body size in bytes
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub matcher: Matcher,
}

/// Request body for the predict endpoint
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
}

/// Error response shape shared by all endpoints
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with routes and request-hardening layers.
///
/// Rate limiting is applied on the network-facing serve path, not here, so
/// the router can be exercised directly in tests.
pub fn create_router(matcher: Matcher) -> Router {
    let state = Arc::new(AppState { matcher });

    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/diseases", get(diseases_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100))
                // Symptom lists are small; anything bigger is not a prediction request
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let table = DiseaseTable::load_or_fallback(&args.dataset_path());
    tracing::info!(records = table.len(), source = %table.source(), "serving disease table");
    let matcher = Matcher::new(table);

    // Per-IP rate limiting, only meaningful with real peer addresses
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .expect("governor configuration constants are valid");

    let app = create_router(matcher).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting medmatch web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Service info and table status
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let table = state.matcher.table();
    Json(serde_json::json!({
        "service": "medmatch",
        "status": "ok",
        "records": table.len(),
        "dataset_source": format!("{}", table.source()),
    }))
}

/// Predict diseases for a symptom list
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Response {
    // Blank entries are dropped caller-side; the core tolerates anything
    let symptoms: Vec<String> = request
        .symptoms
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if symptoms.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "missing_symptoms",
                "At least one symptom is required for prediction",
                None,
            )),
        )
            .into_response();
    }

    if symptoms.len() > MAX_SYMPTOMS_PER_REQUEST {
        return (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "too_many_symptoms",
                "Too many symptoms in a single request",
                None,
            )),
        )
            .into_response();
    }

    let prediction = state.matcher.predict(&symptoms);

    Json(serde_json::json!({
        "diseases": prediction.diseases,
        "total_symptoms": symptoms.len(),
        "processing_time": prediction.processing_time,
    }))
    .into_response()
}

/// Return the loaded disease table
async fn diseases_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let diseases: Vec<serde_json::Value> = state
        .matcher
        .table()
        .records()
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "symptoms": r.symptoms,
                "symptom_count": r.symptoms.len(),
                "description": r.description,
                "treatment": r.treatment,
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": diseases.len(),
        "diseases": diseases,
    }))
}
