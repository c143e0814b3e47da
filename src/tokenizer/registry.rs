//! Data-driven registry mapping model keys to their tokenizers.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::model::ModelTokenizer;
use super::traits::TokenizerProvider;
use super::TokenizerError;

/// Per-model configuration.
///
/// Serialized with the upper-case keys the public envelope exposes
/// (`MODEL_PATH`, `MAX_TOKENS`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ModelConfig {
    /// Tokenizer-loading identifier (Hugging Face model path).
    pub model_path: String,
    /// Maximum token count accepted from one encode call.
    pub max_tokens: usize,
}

/// Read-only mapping from logical model key to its [`ModelTokenizer`].
///
/// Built once at startup from the configured model map; dispatch is a single
/// lookup, so adding a model is a configuration entry, not a code branch.
pub struct TokenizerRegistry {
    tokenizers: BTreeMap<String, Arc<ModelTokenizer>>,
}

impl TokenizerRegistry {
    /// Build one tokenizer per configured model.
    pub fn from_models(
        models: &BTreeMap<String, ModelConfig>,
        provider: Arc<dyn TokenizerProvider>,
        load_timeout: Duration,
    ) -> Result<Self, TokenizerError> {
        let mut tokenizers = BTreeMap::new();
        for model_id in models.keys() {
            let tokenizer = ModelTokenizer::new(model_id, models, provider.clone(), load_timeout)?;
            tokenizers.insert(model_id.clone(), Arc::new(tokenizer));
        }
        Ok(Self { tokenizers })
    }

    /// Look up the tokenizer for a model key.
    pub fn get(&self, model_id: &str) -> Option<Arc<ModelTokenizer>> {
        self.tokenizers.get(model_id).cloned()
    }

    /// Model keys served by this registry.
    pub fn model_ids(&self) -> impl Iterator<Item = &str> {
        self.tokenizers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokenizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokenizers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::super::traits::TextEncoder;
    use super::*;

    struct NoopProvider;

    #[async_trait]
    impl TokenizerProvider for NoopProvider {
        async fn load(&self, _model_path: &str) -> anyhow::Result<Arc<dyn TextEncoder>> {
            anyhow::bail!("not used")
        }
    }

    fn models() -> BTreeMap<String, ModelConfig> {
        BTreeMap::from([
            (
                "qwen-2.5-coder-7b".to_string(),
                ModelConfig {
                    model_path: "Qwen/Qwen2.5-Coder-7B-Instruct".to_string(),
                    max_tokens: 32_768,
                },
            ),
            (
                "tiny".to_string(),
                ModelConfig {
                    model_path: "stub/tiny".to_string(),
                    max_tokens: 2,
                },
            ),
        ])
    }

    #[test]
    fn test_one_tokenizer_per_configured_model() {
        let registry =
            TokenizerRegistry::from_models(&models(), Arc::new(NoopProvider), Duration::from_secs(5))
                .unwrap();

        assert_eq!(registry.len(), 2);
        let ids: Vec<&str> = registry.model_ids().collect();
        assert_eq!(ids, vec!["qwen-2.5-coder-7b", "tiny"]);
    }

    #[test]
    fn test_lookup_known_and_unknown_model() {
        let registry =
            TokenizerRegistry::from_models(&models(), Arc::new(NoopProvider), Duration::from_secs(5))
                .unwrap();

        let tokenizer = registry.get("qwen-2.5-coder-7b").unwrap();
        assert_eq!(tokenizer.config().max_tokens, 32_768);
        assert_eq!(
            tokenizer.config().model_path,
            "Qwen/Qwen2.5-Coder-7B-Instruct"
        );

        assert!(registry.get("not-a-model").is_none());
    }

    #[test]
    fn test_model_config_wire_keys() {
        let config = ModelConfig {
            model_path: "stub/tiny".to_string(),
            max_tokens: 2,
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["MODEL_PATH"], "stub/tiny");
        assert_eq!(json["MAX_TOKENS"], 2);

        let parsed: ModelConfig =
            serde_json::from_value(serde_json::json!({ "MODEL_PATH": "stub/tiny", "MAX_TOKENS": 2 }))
                .unwrap();
        assert_eq!(parsed, config);
    }
}
