use flamefold::aggregator::metrics::{calculate_hot_paths, calculate_value_distribution, create_hot_path};
use flamefold::aggregator::stack_builder::{build_collapsed_stacks, CollapsedStack};
use flamefold::flamegraph::build_flame_graph;
use flamefold::parser::parse_records;
use flamefold::symbolize::SymbolTable;

fn graph(raw: &str, pairs: &[(&str, &str)]) -> flamefold::flamegraph::FlameNode {
    let mut table = SymbolTable::new();
    for (address, name) in pairs {
        table.insert(*address, *name);
    }
    build_flame_graph(&parse_records(raw).samples, &table)
}

#[test]
fn test_collapsed_stacks_follow_self_values() {
    let root = graph(
        "3 @ 0x1 0x2\n5 @ 0x3 0x2\n2 @ 0x2\n",
        &[("0x1", "rand"), ("0x2", "main"), ("0x3", "malloc")],
    );

    let stacks = build_collapsed_stacks(&root);

    assert_eq!(
        stacks,
        vec![
            CollapsedStack::new("main;malloc".to_string(), 5),
            CollapsedStack::new("main;rand".to_string(), 3),
            CollapsedStack::new("main".to_string(), 2),
        ]
    );
    assert_eq!(stacks.iter().map(|s| s.weight).sum::<u64>(), root.total);
}

#[test]
fn test_collapsed_stacks_include_inline_frames() {
    let root = graph("4 @ 0x1\n", &[("0x1", "outer--inner")]);

    let stacks = build_collapsed_stacks(&root);

    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].to_line(), "outer;[inline] inner 4");
    assert_eq!(stacks[0].leaf(), "[inline] inner");
}

#[test]
fn test_collapsed_ties_sorted_by_stack() {
    let root = graph("1 @ 0xb\n1 @ 0xa\n", &[]);

    let stacks = build_collapsed_stacks(&root);

    assert_eq!(stacks[0].stack, "0xa");
    assert_eq!(stacks[1].stack, "0xb");
}

#[test]
fn test_calculate_hot_paths() {
    let stacks = vec![
        CollapsedStack::new("main;execute".to_string(), 5000),
        CollapsedStack::new("main;storage".to_string(), 3000),
        CollapsedStack::new("main;compute".to_string(), 2000),
    ];

    let hot_paths = calculate_hot_paths(&stacks, 10000, 2);

    assert_eq!(hot_paths.len(), 2);
    assert_eq!(hot_paths[0].stack, "main;execute");
    assert_eq!(hot_paths[0].value, 5000);
    assert_eq!(hot_paths[0].percentage, 50.0);
}

#[test]
fn test_hot_path_zero_total() {
    let stack = CollapsedStack::new("main".to_string(), 10);
    assert_eq!(create_hot_path(&stack, 0).percentage, 0.0);
}

#[test]
fn test_calculate_value_distribution() {
    let stacks = vec![
        CollapsedStack::new("stack1".to_string(), 8500),
        CollapsedStack::new("stack2".to_string(), 1000),
        CollapsedStack::new("stack3".to_string(), 250),
        CollapsedStack::new("stack4".to_string(), 250),
    ];

    let dist = calculate_value_distribution(&stacks);

    assert_eq!(dist.total_value, 10000);
    assert_eq!(dist.stack_count, 4);
    assert_eq!(dist.mean_value_per_stack, 2500);
    assert_eq!(dist.median_value_per_stack, 1000);
    assert!((dist.top_10_percent_percentage - 85.0).abs() < 1e-9);
}

#[test]
fn test_value_distribution_empty() {
    let dist = calculate_value_distribution(&[]);
    assert_eq!(dist.total_value, 0);
    assert_eq!(dist.stack_count, 0);
}
