//! Calculate hot paths and value distribution from collapsed stacks.
//!
//! Hot paths are the call stacks that end the most sampled value.
//! These are the primary targets for optimization.

use super::stack_builder::CollapsedStack;
use log::debug;
use serde::{Deserialize, Serialize};

/// A hot path in the profile (stack trace with its share of the total)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotPath {
    /// Collapsed stack representation (e.g., "clone3;main;rand")
    pub stack: String,

    /// Self value at the end of this path
    pub value: u64,

    /// Percentage of the root total
    pub percentage: f64,
}

/// Calculate hot paths from collapsed stacks
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `stacks` - Collapsed stacks, heaviest first
/// * `total` - Root total used as the percentage base
/// * `top_n` - Number of top paths to return
pub fn calculate_hot_paths(stacks: &[CollapsedStack], total: u64, top_n: usize) -> Vec<HotPath> {
    debug!(
        "Calculating top {} hot paths from {} stacks",
        top_n,
        stacks.len()
    );

    stacks
        .iter()
        .take(top_n)
        .map(|stack| create_hot_path(stack, total))
        .collect()
}

/// Create a HotPath from a CollapsedStack
pub fn create_hot_path(stack: &CollapsedStack, denominator: u64) -> HotPath {
    let percentage = if denominator > 0 {
        (stack.weight as f64 / denominator as f64) * 100.0
    } else {
        0.0
    };

    HotPath {
        stack: stack.stack.clone(),
        value: stack.weight,
        percentage,
    }
}

/// Value distribution statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueDistribution {
    /// Total value across all stacks
    pub total_value: u64,

    /// Number of unique stacks
    pub stack_count: usize,

    pub mean_value_per_stack: u64,

    pub median_value_per_stack: u64,

    /// Percentage of total value in the heaviest 10% of stacks
    pub top_10_percent_percentage: f64,
}

impl ValueDistribution {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Stacks: {} | Mean: {} | Median: {} | Top 10%: {:.1}%",
            self.total_value,
            self.stack_count,
            self.mean_value_per_stack,
            self.median_value_per_stack,
            self.top_10_percent_percentage
        )
    }
}

/// Calculate value distribution statistics
///
/// `stacks` must be sorted heaviest first, as built by
/// [`build_collapsed_stacks`](super::build_collapsed_stacks).
pub fn calculate_value_distribution(stacks: &[CollapsedStack]) -> ValueDistribution {
    if stacks.is_empty() {
        return ValueDistribution::default();
    }

    let total: u64 = stacks.iter().map(|s| s.weight).sum();
    let count = stacks.len();

    let mut weights: Vec<u64> = stacks.iter().map(|s| s.weight).collect();
    weights.sort_unstable();
    let median = weights[weights.len() / 2];

    let top_count = (count as f64 * 0.1).ceil() as usize;
    let top_value: u64 = stacks.iter().take(top_count).map(|s| s.weight).sum();

    ValueDistribution {
        total_value: total,
        stack_count: count,
        mean_value_per_stack: total / count as u64,
        median_value_per_stack: median,
        top_10_percent_percentage: if total > 0 {
            (top_value as f64 / total as f64) * 100.0
        } else {
            0.0
        },
    }
}
