use flamefold::parser::{parse_records, parse_records_with_kind, ProfileKind, Sample};

#[test]
fn test_parse_reverses_to_root_first() {
    let profile = parse_records("3 @ 0x1 0x2 0x3\n");

    assert_eq!(profile.samples.len(), 1);
    assert_eq!(profile.samples[0].stack(), ["0x3", "0x2", "0x1"]);
    assert_eq!(profile.samples[0].value(), 3);
}

#[test]
fn test_parse_skips_comments_and_bad_counts() {
    let raw = "# comment\n-1 @ 0x1\n0 @ 0x2\nabc @ 0x3\n5 @   \n\n2 @ 0x4\n";
    let profile = parse_records(raw);

    assert_eq!(profile.samples.len(), 1);
    assert_eq!(profile.samples[0].stack(), ["0x4"]);
    assert_eq!(profile.total_value(), 2);
    assert_eq!(profile.addresses, vec!["0x4".to_string()]);
    assert_eq!(profile.skipped_lines, 4);
}

#[test]
fn test_unique_addresses_first_seen_order() {
    let raw = "1 @ 0xa 0xb\n2 @ 0xc 0xb\n3 @ 0xa 0xd\n";
    let profile = parse_records(raw);

    // Stacks are reversed before addresses are collected
    assert_eq!(profile.addresses, vec!["0xb", "0xa", "0xc", "0xd"]);
    assert_eq!(profile.total_value(), 6);
}

#[test]
fn test_parse_tolerates_extra_whitespace() {
    let profile = parse_records("  7   @   0x1\t0x2  \r\n");

    assert_eq!(profile.samples[0].stack(), ["0x2", "0x1"]);
    assert_eq!(profile.samples[0].value(), 7);
}

#[test]
fn test_parse_heap_records() {
    let raw = "heap_v2/524288\n\
               \x20  1:     1024 [     3:     4096] @ 0x10 0x20\n\
               \x20  0:        0 [     2:      512] @ 0x30\n";
    let profile = parse_records_with_kind(raw, ProfileKind::Heap);

    assert_eq!(profile.samples.len(), 1);
    assert_eq!(profile.samples[0].value(), 1024);
    assert_eq!(profile.samples[0].stack(), ["0x20", "0x10"]);
    assert_eq!(profile.skipped_lines, 2);
}

#[test]
fn test_cpu_kind_rejects_heap_records() {
    let profile = parse_records("1: 1024 [ 3: 4096] @ 0x10");
    assert!(profile.samples.is_empty());
}

#[test]
fn test_sample_rejects_empty_stack_and_zero_value() {
    assert!(Sample::new(vec![], 3).is_none());
    assert!(Sample::new(vec!["0x1".to_string()], 0).is_none());
    assert!(Sample::new(vec!["0x1".to_string()], 1).is_some());
}
