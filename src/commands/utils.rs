use crate::flamegraph::verify_tree;
use crate::output::read_flame_graph;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a flame graph JSON file
///
/// Totals are recomputed from self values and compared with the stored ones.
pub fn validate_flame_file(file_path: PathBuf) -> Result<()> {
    println!("Validating flame graph: {}", file_path.display());

    let root = read_flame_graph(&file_path)?;
    let total = verify_tree(&root)
        .with_context(|| format!("Invalid flame graph {}", file_path.display()))?;

    println!("✓ Valid flame graph JSON");
    println!("  Total:    {}", total);
    println!("  Nodes:    {}", root.node_count());
    println!("  Depth:    {}", root.depth());
    println!("  Top-level frames: {}", root.children.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("flamefold v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Aggregates sampled call stacks into symbol-resolved flame graphs.");
}
