//! Raw stack record parsing.
//!
//! This module handles:
//! - Splitting the profiler's text output into records
//! - Skipping comments and malformed records
//! - Reordering stacks root-first and collecting unique addresses

pub mod records;
pub mod schema;

// Re-export main types
pub use records::{parse_record, parse_records, parse_records_with_kind};
pub use schema::{ParsedProfile, ProfileKind, Sample};
