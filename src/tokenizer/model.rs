//! Per-model tokenizer wrapper.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use tokio::time::timeout;
use tracing::{debug, error, info};

use super::registry::ModelConfig;
use super::traits::{TextEncoder, TokenizerProvider};
use super::TokenizerError;

/// Tokenizer for exactly one model.
///
/// Owns the external tokenizer handle exclusively. Acquisition happens at
/// most once per process; concurrent first callers share a single in-flight
/// acquisition and every later call reuses the same handle read-only.
pub struct ModelTokenizer {
    model_id: String,
    config: ModelConfig,
    provider: Arc<dyn TokenizerProvider>,
    handle: OnceCell<Arc<dyn TextEncoder>>,
    load_timeout: Duration,
}

impl ModelTokenizer {
    /// Create a tokenizer for `model_id`, capturing its registry entry.
    pub fn new(
        model_id: &str,
        models: &BTreeMap<String, ModelConfig>,
        provider: Arc<dyn TokenizerProvider>,
        load_timeout: Duration,
    ) -> Result<Self, TokenizerError> {
        if model_id.is_empty() {
            return Err(TokenizerError::ModelRequired);
        }

        let config = models
            .get(model_id)
            .cloned()
            .ok_or_else(|| TokenizerError::UnsupportedModel(model_id.to_string()))?;

        Ok(Self {
            model_id: model_id.to_string(),
            config,
            provider,
            handle: OnceCell::new(),
            load_timeout,
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Encode `text` into token ids.
    ///
    /// Empty input is a no-op, not an error: it yields `Ok(None)` without
    /// touching the tokenizer. Callers that require a non-empty body must
    /// reject before calling. The token ceiling is checked after full
    /// encoding; oversized input pays the full encoding cost before being
    /// rejected.
    pub async fn encode(&self, text: &str) -> Result<Option<Vec<u32>>, TokenizerError> {
        if text.is_empty() {
            return Ok(None);
        }

        let encoder = self.encoder().await?;
        let tokens = encoder.encode(text).map_err(|e| {
            error!(model = %self.model_id, error = %e, "Tokenizer encode failed");
            TokenizerError::EncodingFailed
        })?;

        if tokens.len() > self.config.max_tokens {
            return Err(TokenizerError::TokenLimitExceeded {
                count: tokens.len(),
                limit: self.config.max_tokens,
            });
        }

        Ok(Some(tokens))
    }

    /// Get the tokenizer handle, acquiring it on first use.
    ///
    /// Concurrent first callers await the same in-flight acquisition. A
    /// failed acquisition leaves the cell empty, so the next request retries
    /// instead of observing a poisoned handle.
    async fn encoder(&self) -> Result<Arc<dyn TextEncoder>, TokenizerError> {
        if let Some(encoder) = self.handle.get() {
            return Ok(encoder.clone());
        }

        let encoder = self
            .handle
            .get_or_try_init(|| async {
                info!(
                    model = %self.model_id,
                    model_path = %self.config.model_path,
                    "Loading tokenizer"
                );
                match timeout(self.load_timeout, self.provider.load(&self.config.model_path))
                    .await
                {
                    Ok(Ok(encoder)) => Ok(encoder),
                    Ok(Err(e)) => {
                        error!(model = %self.model_id, error = %e, "Tokenizer load failed");
                        Err(TokenizerError::EncodingFailed)
                    }
                    Err(_) => Err(TokenizerError::LoadTimeout {
                        model: self.model_id.clone(),
                        timeout_ms: self.load_timeout.as_millis() as u64,
                    }),
                }
            })
            .await?;

        debug!(model = %self.model_id, "Tokenizer handle ready");
        Ok(encoder.clone())
    }
}
