//! Terminal summary of a flame graph's hottest paths.

use crate::aggregator::HotPath;

const STACK_COLUMN: usize = 52;

/// Create a text summary with percentages and table formatting
///
/// # Arguments
/// * `hot_paths` - Paths to list, heaviest first
/// * `max_lines` - Table rows to print
/// * `total` - Root total of the flame graph
pub fn generate_text_summary(hot_paths: &[HotPath], max_lines: usize, total: u64) -> String {
    let mut lines = Vec::new();
    let rule = "━".repeat(STACK_COLUMN + 2);

    lines.push("  HOT PATHS".to_string());
    lines.push(format!("  ┏{}┳━━━━━━━━━━━━━━┳━━━━━━━━━┓", rule));
    lines.push(format!(
        "  ┃ {:<width$} ┃ {:^12} ┃ {:^7} ┃",
        "Stack (Hottest First)",
        "SELF",
        "%",
        width = STACK_COLUMN
    ));
    lines.push(format!("  ┣{}╋━━━━━━━━━━━━━━╋━━━━━━━━━┫", rule));

    for path in hot_paths.iter().take(max_lines) {
        lines.push(format!(
            "  ┃ {:<width$} ┃ {:>12} ┃ {:>6.1}% ┃",
            truncate_stack(&path.stack, STACK_COLUMN),
            path.value,
            path.percentage,
            width = STACK_COLUMN
        ));
    }

    lines.push(format!("  ┗{}┻━━━━━━━━━━━━━━┻━━━━━━━━━┛", rule));
    lines.push(format!("  Total: {}", total));

    if hot_paths.len() > max_lines {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing top {} of {} paths)",
            max_lines,
            hot_paths.len()
        ));
    }

    lines.join("\n")
}

/// Keep the leaf end of a stack that is too long to display
pub fn truncate_stack(stack: &str, max_chars: usize) -> String {
    let len = stack.chars().count();
    if len <= max_chars || max_chars <= 3 {
        return stack.to_string();
    }
    let tail: String = stack.chars().skip(len - (max_chars - 3)).collect();
    format!("...{}", tail)
}
