//! One aggregation pass: parse, resolve, build, normalize, verify.

use crate::flamegraph::{verify_conservation, FlameNode, FlameTreeBuilder};
use crate::parser::{parse_records_with_kind, ParsedProfile, ProfileKind};
use crate::symbolize::{resolve_symbols, ResolverConfig, SymbolResolver, SymbolTable};
use crate::utils::error::{FlameGraphError, PipelineError};
use log::{debug, info};

/// A verified flame graph and the counts that produced it
#[derive(Debug, Clone)]
pub struct FlameGraph {
    pub root: FlameNode,
    pub sample_count: usize,
    pub skipped_lines: usize,
    pub unique_addresses: usize,
    pub resolved_symbols: usize,
}

impl FlameGraph {
    /// Root total, equal to the sum of all ingested sample values
    pub fn total(&self) -> u64 {
        self.root.total
    }
}

/// Run a full pass over raw profiler output
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `raw` - Raw `count @ addrs` records
/// * `kind` - Profiler variant that wrote them
/// * `resolver` - Symbol transport; `None` keeps raw addresses as names
/// * `config` - Batching and retry policy for the resolver
///
/// # Errors
/// * `PipelineError::Symbols` - a symbol batch failed; no tree is built
/// * `PipelineError::FlameGraph` - the built tree broke an invariant
pub fn aggregate(
    raw: &str,
    kind: ProfileKind,
    resolver: Option<&dyn SymbolResolver>,
    config: &ResolverConfig,
) -> Result<FlameGraph, PipelineError> {
    let profile = parse_records_with_kind(raw, kind);
    info!(
        "Parsed {} samples referencing {} addresses",
        profile.samples.len(),
        profile.addresses.len()
    );

    let symbols = match resolver {
        Some(resolver) => resolve_symbols(&profile.addresses, resolver, config)?,
        None => SymbolTable::new(),
    };

    Ok(build_from_profile(&profile, &symbols)?)
}

/// Build and verify a flame graph from already parsed samples
///
/// # Errors
/// * `FlameGraphError` - the tree does not account for every ingested sample
pub fn build_from_profile(
    profile: &ParsedProfile,
    symbols: &SymbolTable,
) -> Result<FlameGraph, FlameGraphError> {
    let mut builder = FlameTreeBuilder::new(symbols);
    builder.add_samples(&profile.samples);
    let root = builder.finish();

    verify_conservation(&root, builder.ingested_value())?;
    debug!(
        "Flame graph verified: total {} over {} nodes",
        root.total,
        root.node_count()
    );

    Ok(FlameGraph {
        root,
        sample_count: builder.sample_count(),
        skipped_lines: profile.skipped_lines,
        unique_addresses: profile.addresses.len(),
        resolved_symbols: symbols.len(),
    })
}
