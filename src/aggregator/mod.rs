//! Flattening of flame graphs into collapsed stacks and metrics.
//!
//! This module transforms a finished flame graph into:
//! - Collapsed stack format (folded `a;b;c value` lines)
//! - Hot path analysis (top self-value consumers)
//! - Value distribution statistics

pub mod metrics;
pub mod stack_builder;

// Re-export main types and functions
pub use metrics::{
    calculate_hot_paths, calculate_value_distribution, HotPath, ValueDistribution,
};
pub use stack_builder::{build_collapsed_stacks, CollapsedStack};
