//! HTTP endpoints
//!
//! REST API for the lyric translation pipeline.

use axum::{
    extract::{DefaultBodyLimit, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::ports::{AudioFetcher, StagingStore, Transcriber, Translator};
use crate::application::TranslateInput;
use crate::domain::audio::AudioLocator;

use super::state::AppState;

/// Request body ceiling (uploads are referenced by URL, but keep a hard cap)
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Translation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest {
    file_url: Option<String>,
    input_language: Option<String>,
    output_language: Option<String>,
}

/// Translation response
#[derive(Debug, Serialize)]
struct TranslateResponse {
    original: String,
    translated: String,
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create the application router
pub fn create_router<F, S, T, L>(state: AppState<F, S, T, L>) -> Router
where
    F: AudioFetcher + 'static,
    S: StagingStore + 'static,
    T: Transcriber + 'static,
    L: Translator + 'static,
{
    Router::new()
        .route("/api/translate", post(translate::<F, S, T, L>))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Translate endpoint
async fn translate<F, S, T, L>(
    State(state): State<AppState<F, S, T, L>>,
    Json(request): Json<TranslateRequest>,
) -> Response
where
    F: AudioFetcher + 'static,
    S: StagingStore + 'static,
    T: Transcriber + 'static,
    L: Translator + 'static,
{
    // Validation failures return before any outbound call is made
    let locator = match request.file_url.and_then(|url| AudioLocator::parse(url).ok()) {
        Some(locator) => locator,
        None => return error_response(StatusCode::BAD_REQUEST, "No file URL provided"),
    };

    let target_language = match request
        .output_language
        .filter(|lang| !lang.trim().is_empty())
    {
        Some(lang) => lang,
        None => return error_response(StatusCode::BAD_REQUEST, "No output language provided"),
    };

    let source_language = request
        .input_language
        .filter(|lang| !lang.trim().is_empty());

    let input = TranslateInput::new(locator, source_language, target_language);

    match state.pipeline().execute(input).await {
        Ok(output) => (
            StatusCode::OK,
            Json(TranslateResponse {
                original: output.original,
                translated: output.translated,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(stage = e.stage(), error = %e, "pipeline failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
