//! Gateway tier: HTTP surface for the tokenizer service.
//!
//! # Architecture
//!
//! ```text
//! Client → GatewayServer (axum) → handlers → TokenizerRegistry → ModelTokenizer
//! ```
//!
//! Handlers validate the request shape, resolve the model key through the
//! registry, and map tokenizer results and errors to the response envelope.
//! Validation failures get specific 400 messages; every encode-time fault is
//! flattened to one generic 500.
//!
//! # Manual testing
//!
//! ```bash
//! cargo run -- --port 8080
//! curl -X POST http://localhost:8080/helpers/tokenize \
//!   -H "Content-Type: application/json" \
//!   -d '{"payload": "hello world", "model": "qwen-2.5-coder-7b"}'
//! ```

pub mod config;
pub mod handlers;
pub mod server;

pub use config::GatewayConfig;
pub use server::GatewayServer;
