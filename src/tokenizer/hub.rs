//! Hugging Face hub provider for pretrained tokenizers.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use hf_hub::api::sync::Api;
use tokenizers::Tokenizer;
use tokio::task;
use tracing::info;

use super::traits::{TextEncoder, TokenizerProvider};

/// Fetches `tokenizer.json` for a model from the Hugging Face hub.
///
/// The hub client is synchronous, so acquisition runs on the blocking pool.
/// Downloads are cached by the hub client, so a warm process restart reuses
/// local files.
#[derive(Debug, Default, Clone)]
pub struct HubProvider;

impl HubProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TokenizerProvider for HubProvider {
    async fn load(&self, model_path: &str) -> anyhow::Result<Arc<dyn TextEncoder>> {
        info!(model_path = %model_path, "Fetching tokenizer from hub");

        let model_path = model_path.to_string();
        let tokenizer = task::spawn_blocking(move || -> anyhow::Result<Tokenizer> {
            let api = Api::new().context("Failed to create hub client")?;
            let repo = api.model(model_path.clone());
            let tokenizer_file = repo
                .get("tokenizer.json")
                .with_context(|| format!("Failed to fetch tokenizer.json for {model_path}"))?;
            Tokenizer::from_file(tokenizer_file).map_err(|e| anyhow!("{e}"))
        })
        .await
        .context("Tokenizer fetch task failed")??;

        Ok(Arc::new(HubEncoder { tokenizer }))
    }
}

struct HubEncoder {
    tokenizer: Tokenizer,
}

impl TextEncoder for HubEncoder {
    fn encode(&self, text: &str) -> anyhow::Result<Vec<u32>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| anyhow!("{e}"))?;
        Ok(encoding.get_ids().to_vec())
    }
}
