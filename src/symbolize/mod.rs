//! Address symbolization.
//!
//! This module turns raw addresses into display names:
//! - Batched resolution against the symbol endpoint
//! - An address -> name table with raw-address fallback
//! - Decoding of `--` inline chains in resolved names

pub mod client;
pub mod inline;
pub mod resolver;
pub mod table;

// Re-export main types
pub use client::HttpSymbolResolver;
pub use inline::{decode_inline_chain, InlineChain};
pub use resolver::{resolve_symbols, ResolverConfig, SymbolResolver};
pub use table::SymbolTable;
