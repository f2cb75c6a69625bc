//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod build;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use build::{execute_build, validate_args};
pub use models::{BuildArgs, SymbolSource};
pub use utils::{display_version, validate_flame_file};
