//! Flame graph construction.
//!
//! This module folds samples into a call tree, freezes it into an ordered
//! serializable tree, and independently re-checks its value roll-ups.

pub mod builder;
pub mod summary;
pub mod total;
pub mod tree;

// Re-export main types
pub use builder::{build_flame_graph, FlameTreeBuilder};
pub use summary::generate_text_summary;
pub use total::{total, verify_conservation, verify_tree};
pub use tree::FlameNode;
