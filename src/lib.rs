//! Tokenizer Gateway
//!
//! A small HTTP service that accepts text and a model identifier, encodes the
//! text with that model's pretrained tokenizer, and returns the token ids plus
//! model metadata.
//!
//! # Architecture
//!
//! ```text
//! Client → Gateway (validate, dispatch) → ModelTokenizer → Tokenizer handle
//! ```
//!
//! The gateway tier validates requests and resolves the model key through a
//! data-driven registry; the tokenizer tier owns one lazily-initialized
//! tokenizer handle per model and enforces the configured token ceiling.

pub mod gateway;
pub mod protocols;
pub mod tokenizer;
