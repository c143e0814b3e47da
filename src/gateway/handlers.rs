//! Request handlers for the tokenizer gateway.
//!
//! These handlers validate inbound request shape, dispatch to the tokenizer
//! registry, and shape the response envelope.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use crate::protocols::tokenize::{TokenPayload, TokenizeRequest, TokenizeResponse, TokenizeResult};
use crate::tokenizer::TokenizerRegistry;

/// Shared state for handlers
pub struct HandlerState {
    pub registry: Arc<TokenizerRegistry>,
}

impl HandlerState {
    pub fn new(registry: Arc<TokenizerRegistry>) -> Self {
        Self { registry }
    }
}

/// Liveness probe
pub async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "Hey there!" }))
}

/// Tokenize endpoint
pub async fn tokenize_handler(
    State(state): State<Arc<HandlerState>>,
    Json(body): Json<TokenizeRequest>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();

    // Payload is validated before model; an empty string counts as absent.
    let payload = match body.payload.filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => return bad_request("Payload is required"),
    };
    let model_id = match body.model.filter(|m| !m.is_empty()) {
        Some(m) => m,
        None => return bad_request("Model is required"),
    };

    let tokenizer = match state.registry.get(&model_id) {
        Some(t) => t,
        None => {
            debug!(request_id = %request_id, model = %model_id, "Unknown model requested");
            return bad_request("Model not supported");
        }
    };

    match tokenizer.encode(&payload).await {
        Ok(tokens) => {
            let value = tokens.unwrap_or_default();
            debug!(
                request_id = %request_id,
                model = %model_id,
                tokens = value.len(),
                "Tokenized payload"
            );
            Json(TokenizeResponse::ok(TokenizeResult {
                encoder: tokenizer.config().clone(),
                tokens: TokenPayload {
                    count: value.len(),
                    value,
                },
            }))
            .into_response()
        }
        Err(e) => {
            // Every encode-time kind is flattened to one generic status for
            // the client; the kind stays visible in the log line.
            error!(
                request_id = %request_id,
                model = %model_id,
                error = %e,
                "Tokenize request failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TokenizeResponse::err("Internal server error")),
            )
                .into_response()
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(TokenizeResponse::err(message)),
    )
        .into_response()
}
