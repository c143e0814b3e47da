//! Tokenizer tier: per-model tokenizer lifecycle and policy.
//!
//! One [`ModelTokenizer`] exists per supported model for the lifetime of the
//! process. The underlying tokenizer handle is acquired lazily on first use
//! under a single-flight guard, then shared read-only across requests. The
//! tier enforces the configured token ceiling and normalizes all other
//! acquisition/encoding faults to a generic error; the distinct kinds below
//! exist for internal logging, not for the client-visible response.
//!
//! # Testing
//!
//! Unit tests stub the provider seam ([`TokenizerProvider`]) so lifecycle
//! behavior is observable without network access:
//! ```bash
//! cargo test tokenizer --lib
//! ```

pub mod hub;
pub mod model;
pub mod registry;
pub mod traits;

pub use hub::HubProvider;
pub use model::ModelTokenizer;
pub use registry::{ModelConfig, TokenizerRegistry};
pub use traits::{TextEncoder, TokenizerProvider};

use thiserror::Error;

/// Errors produced by the tokenizer tier.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Constructed without a model id.
    #[error("Model is required")]
    ModelRequired,

    /// Model id has no entry in the registry configuration.
    #[error("Model {0} is not supported")]
    UnsupportedModel(String),

    /// Encoded length exceeded the model's configured ceiling.
    #[error("Token count {count} exceeds limit of {limit}")]
    TokenLimitExceeded { count: usize, limit: usize },

    /// Handle acquisition did not finish within the configured timeout.
    #[error("Tokenizer for {model} did not load within {timeout_ms}ms")]
    LoadTimeout { model: String, timeout_ms: u64 },

    /// Any other acquisition or encoding fault. The cause is logged
    /// internally and never re-exposed to the caller.
    #[error("Failed to encode text")]
    EncodingFailed,
}
