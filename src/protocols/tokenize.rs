//! Request and response types for the tokenize endpoint.

use serde::{Deserialize, Serialize};

use crate::tokenizer::ModelConfig;

/// Request body for `POST /helpers/tokenize`.
///
/// Both fields are optional at the wire level so the handler can report which
/// one is missing; validation order is payload first, then model.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenizeRequest {
    /// Text to encode.
    #[serde(default)]
    pub payload: Option<String>,
    /// Logical model key, e.g. `qwen-2.5-coder-7b`.
    #[serde(default)]
    pub model: Option<String>,
}

/// Encoded token ids plus their count.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPayload {
    pub count: usize,
    pub value: Vec<u32>,
}

/// Successful tokenize result: the encoder's configuration and the tokens.
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeResult {
    pub encoder: ModelConfig,
    pub tokens: TokenPayload,
}

/// Response envelope shared by the success and error paths.
///
/// Exactly one of `result`/`error` is present depending on `success`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TokenizeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenizeResponse {
    pub fn ok(result: TokenizeResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields_default_to_none() {
        let request: TokenizeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.payload.is_none());
        assert!(request.model.is_none());
    }

    #[test]
    fn test_success_envelope_omits_error() {
        let response = TokenizeResponse::ok(TokenizeResult {
            encoder: ModelConfig {
                model_path: "Qwen/Qwen2.5-Coder-7B-Instruct".to_string(),
                max_tokens: 32_768,
            },
            tokens: TokenPayload {
                count: 2,
                value: vec![1, 2],
            },
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["tokens"]["count"], 2);
        assert_eq!(
            json["result"]["encoder"]["MODEL_PATH"],
            "Qwen/Qwen2.5-Coder-7B-Instruct"
        );
        assert_eq!(json["result"]["encoder"]["MAX_TOKENS"], 32_768);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_omits_result() {
        let response = TokenizeResponse::err("Payload is required");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Payload is required");
        assert!(json.get("result").is_none());
    }
}
