//! Parser for raw `count @ addr addr ...` stack records.
//!
//! The profiler writes one record per line with the sampled (leaf) frame
//! first. Records that cannot be used are skipped, never reported as errors:
//!
//! ```text
//! # comment
//! 3 @ 0x7f01 0x7f02 0x7f03
//! ```

use super::schema::{ParsedProfile, ProfileKind, Sample};
use indexmap::IndexSet;
use log::debug;

/// Parse CPU records
///
/// **Public** - main entry point for parsing
pub fn parse_records(text: &str) -> ParsedProfile {
    parse_records_with_kind(text, ProfileKind::Cpu)
}

/// Parse records produced by the given profiler variant
///
/// # Returns
/// Samples with root-to-leaf stacks, and the unique addresses they reference
pub fn parse_records_with_kind(text: &str, kind: ProfileKind) -> ParsedProfile {
    let mut samples = Vec::new();
    let mut addresses: IndexSet<String> = IndexSet::new();
    let mut skipped_lines = 0;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_record(line, kind) {
            Some(sample) => {
                addresses.extend(sample.stack().iter().cloned());
                samples.push(sample);
            }
            None => skipped_lines += 1,
        }
    }

    debug!(
        "Parsed {} samples ({} unique addresses, {} lines skipped)",
        samples.len(),
        addresses.len(),
        skipped_lines
    );

    ParsedProfile {
        samples,
        addresses: addresses.into_iter().collect(),
        skipped_lines,
    }
}

/// Parse a single non-comment record
///
/// Returns `None` when the weight is not positive or no address follows `@`.
pub fn parse_record(line: &str, kind: ProfileKind) -> Option<Sample> {
    let (weight, addrs) = line.split_once('@')?;
    let value = parse_weight(weight, kind)?;

    // Leaf first on the wire, root first in a sample
    let mut stack: Vec<String> = addrs.split_whitespace().map(str::to_string).collect();
    stack.reverse();

    Sample::new(stack, value)
}

/// Extract the sample weight from the part of a record before `@`
fn parse_weight(field: &str, kind: ProfileKind) -> Option<u64> {
    let value = match kind {
        ProfileKind::Cpu => field.trim().parse::<u64>().ok()?,
        ProfileKind::Heap => {
            // "<inuse_count>: <inuse_bytes> [<alloc_count>: <alloc_bytes>]"
            let in_use = field.split('[').next()?;
            let (_, bytes) = in_use.split_once(':')?;
            bytes.trim().parse::<u64>().ok()?
        }
    };

    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_cpu() {
        assert_eq!(parse_weight(" 12 ", ProfileKind::Cpu), Some(12));
        assert_eq!(parse_weight("0", ProfileKind::Cpu), None);
        assert_eq!(parse_weight("-1", ProfileKind::Cpu), None);
        assert_eq!(parse_weight("abc", ProfileKind::Cpu), None);
        assert_eq!(parse_weight("", ProfileKind::Cpu), None);
    }

    #[test]
    fn test_parse_weight_heap() {
        assert_eq!(
            parse_weight("   1:     1024 [     2:     2048] ", ProfileKind::Heap),
            Some(1024)
        );
        assert_eq!(parse_weight("0: 0 [ 4: 4096] ", ProfileKind::Heap), None);
        assert_eq!(parse_weight("1024", ProfileKind::Heap), None);
    }

    #[test]
    fn test_parse_record_reverses_stack() {
        let sample = parse_record("3 @ 0x1 0x2 0x3", ProfileKind::Cpu).unwrap();
        assert_eq!(sample.stack(), ["0x3", "0x2", "0x1"]);
        assert_eq!(sample.value(), 3);
    }

    #[test]
    fn test_parse_record_rejects_missing_addresses() {
        assert!(parse_record("3 @    ", ProfileKind::Cpu).is_none());
        assert!(parse_record("3 0x1 0x2", ProfileKind::Cpu).is_none());
    }
}
