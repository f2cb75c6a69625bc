//! Build collapsed stack format from a finished flame graph.
//!
//! Collapsed stacks are the classic folded input of flame graph tools.
//! Format: "parent;child;grandchild weight"
//!
//! Example: "clone3;main;rand 3"
//! This means: clone3 called main which called rand, and 3 samples ended in rand.

use crate::flamegraph::FlameNode;
use log::debug;
use serde::{Deserialize, Serialize};

/// A single collapsed stack entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapsedStack {
    /// Stack trace as semicolon-separated string, root frame excluded
    pub stack: String,

    /// Self value of the frame the stack ends at
    pub weight: u64,
}

impl CollapsedStack {
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Folded line, e.g. `main;rand 3`
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }

    /// Last frame of the stack
    pub fn leaf(&self) -> &str {
        self.stack.rsplit(';').next().unwrap_or(&self.stack)
    }
}

/// Build collapsed stacks from a flame graph
///
/// **Public** - main entry point for stack building
///
/// # Returns
/// One entry per frame with a non-zero self value, heaviest first. Ties are
/// ordered by stack text so output is stable across runs.
pub fn build_collapsed_stacks(root: &FlameNode) -> Vec<CollapsedStack> {
    let mut stacks = Vec::new();
    let mut path: Vec<&str> = Vec::new();

    for child in &root.children {
        collect(child, &mut path, &mut stacks);
    }

    stacks.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.stack.cmp(&b.stack)));
    debug!("Built {} collapsed stacks", stacks.len());

    stacks
}

fn collect<'a>(node: &'a FlameNode, path: &mut Vec<&'a str>, out: &mut Vec<CollapsedStack>) {
    path.push(&node.name);
    if node.value > 0 {
        out.push(CollapsedStack::new(path.join(";"), node.value));
    }
    for child in &node.children {
        collect(child, path, out);
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_stack_to_line() {
        let stack = CollapsedStack::new("clone3;main;rand".to_string(), 3);
        assert_eq!(stack.to_line(), "clone3;main;rand 3");
        assert_eq!(stack.leaf(), "rand");
    }
}
