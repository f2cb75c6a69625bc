//! Collapsed (folded) stack output writer.

use crate::aggregator::CollapsedStack;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write collapsed stacks as `a;b;c value` lines
pub fn write_collapsed(
    stacks: &[CollapsedStack],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing {} collapsed stacks to: {}",
        stacks.len(),
        output_path.display()
    );

    super::prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    for stack in stacks {
        writeln!(writer, "{}", stack.to_line())?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_collapsed_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("stacks.folded");
        let stacks = vec![
            CollapsedStack::new("clone3;main;rand".to_string(), 3),
            CollapsedStack::new("clone3;main".to_string(), 1),
        ];

        write_collapsed(&stacks, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "clone3;main;rand 3\nclone3;main 1\n");
    }
}
