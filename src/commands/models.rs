use crate::parser::ProfileKind;
use crate::symbolize::ResolverConfig;
use crate::utils::config::DEFAULT_SYMBOL_TIMEOUT;
use std::path::PathBuf;
use std::time::Duration;

/// Where resolved symbol names come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SymbolSource {
    /// Keep raw addresses as frame names
    #[default]
    None,

    /// Base URL of a process exposing `/pprof/symbol`
    Endpoint(String),

    /// Pre-resolved `<address> <name>` file
    File(PathBuf),
}

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Raw `count @ addrs` profile text
    pub input: PathBuf,

    /// Profiler variant that produced the input
    pub kind: ProfileKind,

    /// Symbol source
    pub symbols: SymbolSource,

    /// Batching, parallelism and retry policy for endpoint resolution
    pub resolver_config: ResolverConfig,

    /// Per-request timeout for endpoint resolution
    pub symbol_timeout: Duration,

    /// Output path for the JSON flame graph
    pub output_json: PathBuf,

    /// Output path for collapsed stacks (optional)
    pub output_collapsed: Option<PathBuf>,

    /// Number of top hot paths to report
    pub top_paths: usize,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            kind: ProfileKind::Cpu,
            symbols: SymbolSource::None,
            resolver_config: ResolverConfig::default(),
            symbol_timeout: DEFAULT_SYMBOL_TIMEOUT,
            output_json: PathBuf::from("flamegraph.json"),
            output_collapsed: None,
            top_paths: 20,
            print_summary: false,
        }
    }
}
