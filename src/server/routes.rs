//! Axum route handlers for the semcoord HTTP server.
//!
//! # Routes
//!
//! - `GET  /health`  -- Returns `{"status": "ok", "version": "0.1.0"}`
//! - `POST /analyze` -- Accepts `{"text": "..."}`, returns the coordinate
//!   with both metrics and per-axis hit counts
//! - `GET  /lexicon` -- Lists the active keyword table grouped by axis

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::coordinate::{Axis, Coordinate};
use crate::extractor::Extractor;
use crate::metrics::{clarity, distance_from_anchor};

/// Shared application state for the HTTP server.
///
/// The extractor (and the table inside it) is read-only, so plain `Arc`
/// sharing is enough.
#[derive(Clone)]
pub struct AppState {
    /// The extractor every request is served with.
    pub extractor: Arc<Extractor>,
}

impl AppState {
    /// State over the built-in keyword table.
    pub fn new() -> Self {
        Self {
            extractor: Arc::new(Extractor::new()),
        }
    }

    /// State over a custom extractor (e.g. a YAML-loaded table).
    pub fn with_extractor(extractor: Extractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .route("/lexicon", get(lexicon_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Response body for `POST /analyze`.
#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    /// Fresh id for this analysis.
    id: Uuid,
    /// Epoch milliseconds at which the analysis ran.
    epoch: i64,
    coordinate: Coordinate,
    distance_from_anchor: f64,
    clarity: f64,
    dominant_axis: Option<Axis>,
    /// Keyword hits per axis, in canonical axis order.
    hits: [u64; 4],
    total_hits: u64,
    total_tokens: u64,
    matched: Vec<String>,
}

/// GET /health -- liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "semcoord",
    }))
}

/// POST /analyze -- analyze a text.
///
/// Request:  `{ "text": "..." }`
/// Response: coordinate, both metrics, dominant axis, and hit counts.
async fn analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<Value>)> {
    let text = body.get("text").and_then(|v| v.as_str()).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Missing 'text' field in request body"})),
        )
    })?;

    let analysis = state.extractor.analyze_detailed(text);
    let coordinate = analysis.coordinate;

    tracing::debug!(
        total_hits = analysis.total_hits,
        total_tokens = analysis.total_tokens,
        "analyzed text"
    );

    Ok(Json(AnalyzeResponse {
        id: Uuid::new_v4(),
        epoch: chrono::Utc::now().timestamp_millis(),
        coordinate,
        distance_from_anchor: distance_from_anchor(&coordinate),
        clarity: clarity(&coordinate),
        dominant_axis: coordinate.dominant_axis(),
        hits: analysis.hits,
        total_hits: analysis.total_hits,
        total_tokens: analysis.total_tokens,
        matched: analysis.matched,
    }))
}

/// GET /lexicon -- the active keyword table grouped by axis.
async fn lexicon_handler(State(state): State<AppState>) -> impl IntoResponse {
    let lexicon = state.extractor.lexicon();
    let axes: Vec<Value> = Axis::ALL
        .iter()
        .map(|axis| {
            let words = lexicon.words_for(*axis);
            serde_json::json!({
                "axis": axis,
                "word_count": words.len(),
                "words": words,
            })
        })
        .collect();

    Json(serde_json::json!({
        "total_keywords": lexicon.len(),
        "axes": axes,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::lexicon::Lexicon;

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_router(AppState::new());

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], crate::VERSION);
        assert_eq!(json["service"], "semcoord");
    }

    #[tokio::test]
    async fn test_analyze_pure_love_sentence() {
        let app = app_router(AppState::new());

        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::json!({"text": "Agape love, selfless compassion, and pure kindness."})
                    .to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["coordinate"]["love"], 1.0);
        assert_eq!(json["coordinate"]["justice"], 0.0);
        assert_eq!(json["clarity"], 1.0);
        assert_eq!(json["dominant_axis"], "love");
        assert_eq!(json["total_hits"], 3);
        let distance = json["distance_from_anchor"].as_f64().unwrap();
        assert!((distance - 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_analyze_no_signal() {
        let app = app_router(AppState::new());

        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::json!({"text": "The sky is blue and the grass is green."}).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["clarity"], 0.0);
        assert_eq!(json["distance_from_anchor"], 2.0);
        assert_eq!(json["dominant_axis"], Value::Null);
        assert_eq!(json["total_hits"], 0);
    }

    #[tokio::test]
    async fn test_analyze_missing_text_is_bad_request() {
        let app = app_router(AppState::new());

        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::json!({"body": "love"}).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("'text'"));
    }

    #[tokio::test]
    async fn test_lexicon_endpoint_lists_all_axes() {
        let app = app_router(AppState::new());

        let request = Request::builder()
            .uri("/lexicon")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let axes = json["axes"].as_array().unwrap();
        assert_eq!(axes.len(), 4);
        assert_eq!(axes[0]["axis"], "love");
        assert!(axes[0]["word_count"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_analyze_with_custom_lexicon_state() {
        let lexicon = Lexicon::from_yaml("power: [thunder]\n").unwrap();
        let state = AppState::with_extractor(Extractor::with_lexicon(lexicon));
        let app = app_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::json!({"text": "thunder and love"}).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let json = body_json(response).await;
        // "love" is not in the custom table, so power takes all the mass.
        assert_eq!(json["coordinate"]["power"], 1.0);
        assert_eq!(json["coordinate"]["love"], 0.0);
    }
}
