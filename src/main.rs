use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tokenizer_gateway::gateway::{GatewayConfig, GatewayServer};

/// HTTP gateway that encodes text with per-model pretrained tokenizers.
#[derive(Debug, Parser)]
#[command(name = "tokenizer-gateway", version)]
struct Args {
    /// Host to bind
    #[arg(long)]
    host: Option<String>,

    /// HTTP port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Timeout for first-use tokenizer acquisition, in milliseconds
    #[arg(long)]
    load_timeout_ms: Option<u64>,

    /// Optional TOML config file with the model registry
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str::<GatewayConfig>(&raw)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => GatewayConfig::default(),
    };

    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(timeout_ms) = args.load_timeout_ms {
        config = config.with_load_timeout_ms(timeout_ms);
    }

    let server = GatewayServer::new(config)?;
    server.serve().await
}
