//! Structured sample data produced by the record parser.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which profiler variant produced the raw records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// `<count> @ addrs` - value is the sample count
    #[default]
    Cpu,

    /// `<inuse_count>: <inuse_bytes> [<alloc_count>: <alloc_bytes>] @ addrs` -
    /// value is the in-use byte count
    Heap,
}

/// One observed call stack with its weight.
///
/// The stack is ordered root to leaf. A `Sample` always has at least one frame
/// and a positive value; [`Sample::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    stack: Vec<String>,
    value: u64,
}

impl Sample {
    /// Create a sample from a root-to-leaf stack
    ///
    /// Returns `None` for an empty stack or a zero value.
    pub fn new(stack: Vec<String>, value: u64) -> Option<Self> {
        if stack.is_empty() || value == 0 {
            return None;
        }
        Some(Self { stack, value })
    }

    /// Frames from the outermost caller to the sampled frame
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Output of the record parser
#[derive(Debug, Clone, Default)]
pub struct ParsedProfile {
    /// Samples in input order
    pub samples: Vec<Sample>,

    /// Every address referenced by a retained sample, first-seen order, no duplicates
    pub addresses: Vec<String>,

    /// Non-blank, non-comment lines that were dropped as malformed
    pub skipped_lines: usize,
}

impl ParsedProfile {
    /// Sum of all retained sample values
    pub fn total_value(&self) -> u64 {
        self.samples.iter().map(Sample::value).sum()
    }
}
