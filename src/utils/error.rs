//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed sample records and unresolved addresses are not errors: the
//! parser skips the former and lookups fall back to the raw address for the
//! latter.

use thiserror::Error;

/// Errors that can occur while resolving addresses to symbols
#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid symbol response: {0}")]
    InvalidResponse(String),

    #[error("Symbol batch {batch} failed after {attempts} attempt(s): {source}")]
    BatchFailed {
        batch: usize,
        attempts: usize,
        #[source]
        source: Box<SymbolError>,
    },

    #[error("Failed to read symbol file: {0}")]
    Io(#[from] std::io::Error),
}

/// Internal invariant violations detected in a flame graph tree
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlameGraphError {
    #[error("Root total {total} does not match ingested sample value {expected}")]
    ConservationViolated { expected: u64, total: u64 },

    #[error("Node '{name}' stores total {stored} but its subtree sums to {computed}")]
    TotalMismatch {
        name: String,
        stored: u64,
        computed: u64,
    },

    #[error("Node '{parent}' has more than one child named '{child}'")]
    DuplicateChild { parent: String, child: String },

    #[error("Invalid root node: {0}")]
    InvalidRoot(String),
}

/// Errors that can occur while writing or reading back output files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to parse flame graph JSON: {0}")]
    ParseFailed(#[source] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that fail a whole aggregation pass
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Symbol resolution failed: {0}")]
    Symbols(#[from] SymbolError),

    #[error("Flame graph invariant violated: {0}")]
    FlameGraph(#[from] FlameGraphError),
}
