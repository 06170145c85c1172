use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;
use yomu_core::AnalyzerStatus;
use yomu_types::TokenizeRequest;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub analyzer: AnalyzerStatus,
}

/// `POST /api/tokenize`
pub async fn tokenize(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let span = tracing::info_span!("tokenize", request_id = %Uuid::new_v4());

    async move {
        let request = match parse_request(&body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Rejecting malformed request body: {}", e);
                return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {e}"));
            }
        };
        tracing::debug!("Processing {} chars", request.text.chars().count());

        match state.service.process(&request.text).await {
            Ok(result) => {
                tracing::info!("Returning {} tokens", result.tokens.len());
                Json(result).into_response()
            }
            Err(e) => {
                tracing::error!("Tokenize request failed: {}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
    .instrument(span)
    .await
}

/// Any method other than POST on the tokenize route
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method Not Allowed",
    )
        .into_response()
}

/// `GET /api/health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        analyzer: state.service.analyzer().status(),
    })
}

// An empty body is read as `{}`, which means empty text
fn parse_request(body: &[u8]) -> Result<TokenizeRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TokenizeRequest::default());
    }
    serde_json::from_slice(body)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
