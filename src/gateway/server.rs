//! HTTP server for the tokenizer gateway.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::{
    config::GatewayConfig,
    handlers::{self, HandlerState},
};
use crate::tokenizer::{HubProvider, TokenizerError, TokenizerProvider, TokenizerRegistry};

/// Gateway server: builds the tokenizer registry and serves the HTTP surface.
pub struct GatewayServer {
    config: GatewayConfig,
    registry: Arc<TokenizerRegistry>,
}

impl GatewayServer {
    /// Create a server backed by the Hugging Face hub provider.
    pub fn new(config: GatewayConfig) -> Result<Self, TokenizerError> {
        Self::with_provider(config, Arc::new(HubProvider::new()))
    }

    /// Create with an explicit provider (for testing or custom setup).
    pub fn with_provider(
        config: GatewayConfig,
        provider: Arc<dyn TokenizerProvider>,
    ) -> Result<Self, TokenizerError> {
        let registry = Arc::new(TokenizerRegistry::from_models(
            &config.models,
            provider,
            Duration::from_millis(config.load_timeout_ms),
        )?);
        info!(models = registry.len(), "Initialized tokenizer registry");
        Ok(Self { config, registry })
    }

    /// Build the axum router.
    pub fn build_router(&self) -> Router {
        let state = Arc::new(HandlerState::new(self.registry.clone()));

        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handlers::root_handler))
            .route("/helpers/tokenize", post(handlers::tokenize_handler))
            .with_state(state)
            .layer(cors)
    }

    /// Get the tokenizer registry
    pub fn registry(&self) -> &Arc<TokenizerRegistry> {
        &self.registry
    }

    /// Start the HTTP server
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.http_bind_addr();
        let router = self.build_router();

        let listener = TcpListener::bind(&addr).await?;
        info!("Gateway listening on {}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_bind_addr() {
        let config = GatewayConfig::default().with_port(8080);
        assert_eq!(config.http_bind_addr(), "0.0.0.0:8080");
    }
}
