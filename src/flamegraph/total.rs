//! Independent total-value roll-up and tree validation.
//!
//! These functions recompute totals from self values alone and never read the
//! `total` fields they are checking, so a tree can be validated without
//! trusting the builder that produced it.

use super::tree::FlameNode;
use crate::utils::config::ROOT_NAME;
use crate::utils::error::FlameGraphError;
use std::collections::HashSet;

/// Self value of `node` plus the self values of its whole subtree
///
/// A frame that ends some samples and also has callees from other samples
/// contributes its own value exactly once on top of its children.
pub fn total(node: &FlameNode) -> u64 {
    node.value + node.children.iter().map(total).sum::<u64>()
}

/// Check every structural invariant of a finished tree
///
/// # Returns
/// The recomputed root total
///
/// # Errors
/// * `FlameGraphError::InvalidRoot` - root misnamed or carrying self value
/// * `FlameGraphError::TotalMismatch` - a stored total disagrees with its subtree
/// * `FlameGraphError::DuplicateChild` - two siblings share a name
pub fn verify_tree(root: &FlameNode) -> Result<u64, FlameGraphError> {
    if root.name != ROOT_NAME {
        return Err(FlameGraphError::InvalidRoot(format!(
            "expected '{}', found '{}'",
            ROOT_NAME, root.name
        )));
    }
    if root.value != 0 {
        return Err(FlameGraphError::InvalidRoot(format!(
            "root carries self value {}",
            root.value
        )));
    }
    verify_node(root)
}

/// Check the tree and that it accounts for exactly `expected` value
///
/// # Errors
/// * `FlameGraphError::ConservationViolated` - root total differs from `expected`
/// * anything [`verify_tree`] reports
pub fn verify_conservation(root: &FlameNode, expected: u64) -> Result<(), FlameGraphError> {
    let total = verify_tree(root)?;
    if total != expected {
        return Err(FlameGraphError::ConservationViolated { expected, total });
    }
    Ok(())
}

fn verify_node(node: &FlameNode) -> Result<u64, FlameGraphError> {
    let mut names = HashSet::with_capacity(node.children.len());
    let mut computed = node.value;

    for child in &node.children {
        if !names.insert(child.name.as_str()) {
            return Err(FlameGraphError::DuplicateChild {
                parent: node.name.clone(),
                child: child.name.clone(),
            });
        }
        computed += verify_node(child)?;
    }

    if node.total != computed {
        return Err(FlameGraphError::TotalMismatch {
            name: node.name.clone(),
            stored: node.total,
            computed,
        });
    }

    Ok(computed)
}
