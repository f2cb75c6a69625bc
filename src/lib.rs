//! flamefold
//!
//! Turns sampled call stacks (`count @ addr addr ...` records) into
//! symbol-resolved flame graph trees, expanding `--` inline chains and
//! verifying that every node's total accounts for exactly the samples below it.
//!
//! ## Getting Started
//!
//! ```no_run
//! use flamefold::parser::ProfileKind;
//! use flamefold::pipeline::aggregate;
//! use flamefold::symbolize::{HttpSymbolResolver, ResolverConfig};
//!
//! let raw = std::fs::read_to_string("cpu.addrs").unwrap();
//! let resolver = HttpSymbolResolver::new("http://localhost:8080").unwrap();
//! let graph = aggregate(&raw, ProfileKind::Cpu, Some(&resolver), &ResolverConfig::default()).unwrap();
//! println!("total: {}", graph.total());
//! ```

pub mod aggregator;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod symbolize;
pub mod utils;
