//! flamefold CLI
//!
//! Builds flame graph JSON from raw sampled stacks, resolving addresses
//! against a running process's symbol endpoint or a pre-resolved symbol file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flamefold::commands::{
    display_version, execute_build, validate_args, validate_flame_file, BuildArgs, SymbolSource,
};
use flamefold::parser::ProfileKind;
use flamefold::symbolize::ResolverConfig;
use flamefold::utils::config::{
    ARTIFACTS_DIR, DEFAULT_BATCH_SIZE, DEFAULT_CONCURRENCY, DEFAULT_MAX_RETRIES,
    DEFAULT_SYMBOL_TIMEOUT_SECS,
};

/// flamefold - flame graphs from sampled call stacks
#[derive(Parser, Debug)]
#[command(name = "flamefold")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a flame graph from raw stack records
    Build {
        /// Raw `count @ addr ...` profile text
        #[arg(short, long)]
        input: PathBuf,

        /// Profiler variant that produced the input
        #[arg(long, value_enum, default_value_t = ProfileKind::Cpu)]
        kind: ProfileKind,

        /// Base URL of a process exposing /pprof/symbol
        #[arg(long, env = "FLAMEFOLD_SYMBOL_URL", conflicts_with = "symbols")]
        symbol_url: Option<String>,

        /// Pre-resolved symbol file (`<address> <name>` per line)
        #[arg(long)]
        symbols: Option<PathBuf>,

        /// Addresses per resolution request
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Resolution requests in flight at once
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,

        /// Retries for a failed resolution batch
        #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
        retries: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_SYMBOL_TIMEOUT_SECS)]
        timeout: u64,

        /// Output path for the JSON flame graph (placed in artifacts/ by default)
        #[arg(short, long, default_value = "flamegraph.json")]
        output: PathBuf,

        /// Output path for collapsed stacks (placed in artifacts/ by default)
        #[arg(long, default_missing_value = "stacks.folded", num_args = 0..=1)]
        collapsed: Option<PathBuf>,

        /// Number of top hot paths to print
        #[arg(long, default_value = "20")]
        top_paths: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a flame graph JSON file
    Validate {
        /// Path to flame graph JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Build {
            input,
            kind,
            symbol_url,
            symbols,
            batch_size,
            concurrency,
            retries,
            timeout,
            output,
            collapsed,
            top_paths,
            summary,
        } => {
            let symbols = match (symbol_url, symbols) {
                (Some(url), _) => SymbolSource::Endpoint(url),
                (None, Some(path)) => SymbolSource::File(path),
                (None, None) => SymbolSource::None,
            };

            let resolver_config = ResolverConfig::new()
                .with_batch_size(batch_size)
                .with_concurrency(concurrency)
                .with_max_retries(retries);

            let args = BuildArgs {
                input,
                kind,
                symbols,
                resolver_config,
                symbol_timeout: Duration::from_secs(timeout),
                output_json: in_artifacts(output),
                output_collapsed: collapsed.map(in_artifacts),
                top_paths,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_build(args)?;
        }

        Commands::Validate { file } => {
            validate_flame_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Place bare file names under artifacts/
fn in_artifacts(path: PathBuf) -> PathBuf {
    let has_dir = path
        .parent()
        .map(|p| !p.as_os_str().is_empty())
        .unwrap_or(false);
    if has_dir {
        path
    } else {
        Path::new(ARTIFACTS_DIR).join(path)
    }
}
