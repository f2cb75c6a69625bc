//! JSON flame graph output writer.
//!
//! Writes FlameNode trees to JSON files with proper formatting.

use crate::flamegraph::FlameNode;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use serde::Deserialize;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a flame graph to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `root` - Root node of the flame graph
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_flame_graph(root: &FlameNode, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing flame graph to: {}", output_path.display());

    super::prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, root).map_err(OutputError::SerializationFailed)?;

    info!(
        "Flame graph written successfully ({} bytes)",
        super::file_size(output_path)
    );

    Ok(())
}

/// Serialize a flame graph to a JSON string
pub fn flame_graph_to_string(root: &FlameNode) -> Result<String, OutputError> {
    serde_json::to_string_pretty(root).map_err(OutputError::SerializationFailed)
}

/// Read a flame graph from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// Nesting depth is unbounded so that any tree [`write_flame_graph`] produced
/// can be read back, however deep its stacks.
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::ParseFailed` - JSON parse error
pub fn read_flame_graph(input_path: impl AsRef<Path>) -> Result<FlameNode, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading flame graph from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;

    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    deserializer.disable_recursion_limit();
    let root = FlameNode::deserialize(&mut deserializer).map_err(OutputError::ParseFailed)?;
    deserializer.end().map_err(OutputError::ParseFailed)?;

    debug!(
        "Flame graph loaded: total {}, {} nodes",
        root.total,
        root.node_count()
    );

    Ok(root)
}
