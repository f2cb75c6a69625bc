//! Build command implementation.
//!
//! The build command:
//! 1. Reads and parses raw stack records
//! 2. Resolves addresses to symbols
//! 3. Builds and verifies the flame graph
//! 4. Writes output files
//! 5. Optionally prints hot paths

use crate::aggregator::{build_collapsed_stacks, calculate_hot_paths, calculate_value_distribution};
use crate::commands::models::{BuildArgs, SymbolSource};
use crate::flamegraph::generate_text_summary;
use crate::output::{write_collapsed, write_flame_graph};
use crate::parser::{parse_records_with_kind, ParsedProfile};
use crate::pipeline::{build_from_profile, FlameGraph};
use crate::symbolize::{resolve_symbols, HttpSymbolResolver, SymbolTable};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read failures
/// * Symbol resolution failures (the whole pass is aborted)
/// * Flame graph invariant violations
/// * File write errors
pub fn execute_build(args: BuildArgs) -> Result<FlameGraph> {
    let start_time = Instant::now();

    info!("Reading profile: {}", args.input.display());
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read profile {}", args.input.display()))?;

    let profile = parse_records_with_kind(&raw, args.kind);
    info!(
        "Parsed {} samples ({} unique addresses, {} lines skipped)",
        profile.samples.len(),
        profile.addresses.len(),
        profile.skipped_lines
    );

    let symbols = load_symbols(&args, &profile).context("Failed to resolve symbols")?;

    info!("Building flame graph...");
    let graph = build_from_profile(&profile, &symbols).context("Failed to build flame graph")?;
    debug!(
        "Flame graph: total {}, {} nodes, depth {}",
        graph.total(),
        graph.root.node_count(),
        graph.root.depth()
    );

    write_outputs(&args, &graph)?;

    if args.print_summary {
        print_summary(&args, &graph);
    }

    info!(
        "Build completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(graph)
}

/// Produce the symbol table for a parsed profile.
///
/// **Private** - internal helper for execute_build
fn load_symbols(args: &BuildArgs, profile: &ParsedProfile) -> Result<SymbolTable> {
    match &args.symbols {
        SymbolSource::None => {
            info!("No symbol source given, frames keep their raw addresses");
            Ok(SymbolTable::new())
        }
        SymbolSource::File(path) => {
            info!("Loading symbols from {}", path.display());
            Ok(SymbolTable::from_file(path)?)
        }
        SymbolSource::Endpoint(url) => {
            let resolver = HttpSymbolResolver::with_timeout(url, args.symbol_timeout)
                .context("Failed to create symbol client")?;
            info!("Resolving symbols via {}", resolver.endpoint());
            Ok(resolve_symbols(
                &profile.addresses,
                &resolver,
                &args.resolver_config,
            )?)
        }
    }
}

/// Write output files (JSON flame graph and optional collapsed stacks).
///
/// **Private** - internal helper for execute_build
fn write_outputs(args: &BuildArgs, graph: &FlameGraph) -> Result<()> {
    write_flame_graph(&graph.root, &args.output_json)
        .context("Failed to write flame graph JSON")?;
    info!("✓ Flame graph written to: {}", args.output_json.display());

    if let Some(path) = &args.output_collapsed {
        let stacks = build_collapsed_stacks(&graph.root);
        write_collapsed(&stacks, path).context("Failed to write collapsed stacks")?;
        info!("✓ Collapsed stacks written to: {}", path.display());
    }

    Ok(())
}

/// Print a human-readable summary to stdout.
///
/// **Private** - internal helper for execute_build
fn print_summary(args: &BuildArgs, graph: &FlameGraph) {
    let stacks = build_collapsed_stacks(&graph.root);
    let distribution = calculate_value_distribution(&stacks);
    let hot_paths = calculate_hot_paths(&stacks, graph.total(), stacks.len());

    println!();
    println!("  FLAME GRAPH SUMMARY");
    println!("  Input:            {}", args.input.display());
    println!("  Samples:          {}", graph.sample_count);
    println!("  Skipped lines:    {}", graph.skipped_lines);
    println!("  Unique addresses: {}", graph.unique_addresses);
    println!("  Resolved symbols: {}", graph.resolved_symbols);
    println!("  Distribution:     {}", distribution.summary());
    println!();
    println!(
        "{}",
        generate_text_summary(&hot_paths, args.top_paths, graph.total())
    );
    println!();
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input profile path cannot be empty");
    }

    if let SymbolSource::Endpoint(url) = &args.symbols {
        if url.is_empty() {
            anyhow::bail!("Symbol URL cannot be empty");
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("Symbol URL must start with http:// or https://");
        }
    }

    if args.resolver_config.batch_size == 0 {
        anyhow::bail!("batch_size must be greater than 0");
    }

    if args.resolver_config.concurrency == 0 {
        anyhow::bail!("concurrency must be greater than 0");
    }

    if args.top_paths == 0 {
        anyhow::bail!("top_paths must be greater than 0");
    }

    if args.top_paths > 1000 {
        anyhow::bail!("top_paths is too large (max 1000)");
    }

    Ok(())
}
