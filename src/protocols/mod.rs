//! Wire protocol types for the gateway's HTTP surface.

pub mod tokenize;
