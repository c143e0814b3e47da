//! Configuration for the tokenizer gateway.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tokenizer::ModelConfig;

/// Configuration for the gateway server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Host to bind the HTTP server
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout for first-use tokenizer acquisition in milliseconds
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,

    /// Supported models, keyed by the logical name clients send
    #[serde(default = "default_models")]
    pub models: BTreeMap<String, ModelConfig>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_load_timeout_ms() -> u64 {
    120_000 // first load may pull model assets over the network
}

/// Registry entries shipped by default.
///
/// qwen-2.5-coder-7b:
/// https://huggingface.co/Qwen/Qwen2.5-Coder-7B-Instruct
pub fn default_models() -> BTreeMap<String, ModelConfig> {
    BTreeMap::from([(
        "qwen-2.5-coder-7b".to_string(),
        ModelConfig {
            model_path: "Qwen/Qwen2.5-Coder-7B-Instruct".to_string(),
            max_tokens: 32_768,
        },
    )])
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            load_timeout_ms: default_load_timeout_ms(),
            models: default_models(),
        }
    }
}

impl GatewayConfig {
    /// Builder pattern: set host
    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Builder pattern: set HTTP port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builder pattern: set acquisition timeout
    pub fn with_load_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.load_timeout_ms = timeout_ms;
        self
    }

    /// Builder pattern: add or replace a model entry
    pub fn with_model(mut self, model_id: impl Into<String>, config: ModelConfig) -> Self {
        self.models.insert(model_id.into(), config);
        self
    }

    /// Get the HTTP bind address
    pub fn http_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
