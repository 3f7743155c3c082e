use super::AppState;
use crate::core::form::FormState;
use crate::core::generation::GenerationRequest;
use crate::core::message::GeneratedArtifacts;
use crate::error::GenerationError;
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};

fn method_not_allowed_response() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({"error": "Use POST"})),
    )
        .into_response()
}

/// Body could not be read, e.g. it exceeds the size limit.
fn body_rejected_response(rejection: &BytesRejection) -> Response {
    let status = rejection.status();
    tracing::warn!(%status, "rejected /generate body: {}", rejection.body_text());
    (
        status,
        Json(serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Bad Request"),
            "detail": rejection.body_text(),
            "kind": "request",
        })),
    )
        .into_response()
}

/// `error`/`detail` are the stable envelope; `kind` is informational.
fn server_error_response(error: &GenerationError) -> Response {
    tracing::error!(kind = error.kind(), "generation failed: {error}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": "Server error",
            "detail": error.to_string(),
            "kind": error.kind(),
        })),
    )
        .into_response()
}

/// GET /health
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "model": state.generator.model(),
    }))
}

/// ANY /generate: POST runs one structured generation
pub(super) async fn handle_generate(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method != Method::POST {
        return method_not_allowed_response();
    }
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return body_rejected_response(&rejection),
    };

    let request = match GenerationRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => return server_error_response(&GenerationError::Request(e.to_string())),
    };

    match state.generator.generate(&request).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(error) => server_error_response(&error),
    }
}

/// POST /artifacts: render the template copy for a form state
pub(super) async fn handle_artifacts(
    body: Result<Json<FormState>, axum::extract::rejection::JsonRejection>,
) -> Response {
    match body {
        Ok(Json(state)) => Json(GeneratedArtifacts::from_state(&state)).into_response(),
        Err(e) => (
            e.status(),
            Json(serde_json::json!({"error": format!("Invalid JSON: {}", e.body_text())})),
        )
            .into_response(),
    }
}
