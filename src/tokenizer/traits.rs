//! Seams for the external tokenizer capability.

use std::sync::Arc;

use async_trait::async_trait;

/// Subword encoder for one pretrained vocabulary.
///
/// Opaque to the gateway: given text, produce an ordered sequence of token
/// ids. Handles are shared across requests after first load, so
/// implementations must be `Send + Sync`.
pub trait TextEncoder: Send + Sync {
    fn encode(&self, text: &str) -> anyhow::Result<Vec<u32>>;
}

/// Source of [`TextEncoder`] handles, keyed by model path.
///
/// Acquisition may be slow (network or disk fetch of model assets) and may
/// fail; callers are expected to bound it with a timeout.
#[async_trait]
pub trait TokenizerProvider: Send + Sync {
    async fn load(&self, model_path: &str) -> anyhow::Result<Arc<dyn TextEncoder>>;
}
