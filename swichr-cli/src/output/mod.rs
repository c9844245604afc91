//! Run summary formatting

use anyhow::Result;
use serde::{Deserialize, Serialize};
use swichr_engine::{ExecutionMode, RunStats};

/// Trait for summary formatters
pub trait SummaryFormatter {
    /// Write a summary of one run
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()>;
}

/// What a replacement run did, in a serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Input path, or "-" for stdin
    pub input: String,
    /// Output path, or "-" for stdout
    pub output: String,
    /// Execution mode that was used
    pub mode: String,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Lines transformed
    pub lines: usize,
    /// Lines written successfully
    pub lines_written: usize,
    /// Tokens replaced
    pub replacements: usize,
    /// Lines whose write failed
    pub write_failures: usize,
    /// Processing time in milliseconds
    pub elapsed_ms: u128,
}

impl RunSummary {
    /// Build a summary from engine statistics
    pub fn from_stats(input: impl Into<String>, output: impl Into<String>, stats: &RunStats) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            mode: mode_name(stats.mode).to_string(),
            bytes_read: stats.bytes_read,
            lines: stats.lines,
            lines_written: stats.lines_written(),
            replacements: stats.replacements,
            write_failures: stats.write_failures,
            elapsed_ms: stats.elapsed.as_millis(),
        }
    }
}

/// Lower-case name of an execution mode
pub fn mode_name(mode: ExecutionMode) -> &'static str {
    match mode {
        ExecutionMode::Sequential => "sequential",
        ExecutionMode::Parallel => "parallel",
        ExecutionMode::Adaptive => "adaptive",
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_summary_from_stats() {
        let stats = RunStats {
            mode: ExecutionMode::Parallel,
            bytes_read: 120,
            lines: 10,
            replacements: 4,
            write_failures: 1,
            elapsed: Duration::from_millis(7),
        };

        let summary = RunSummary::from_stats("in.txt", "-", &stats);
        assert_eq!(summary.mode, "parallel");
        assert_eq!(summary.lines_written, 9);
        assert_eq!(summary.elapsed_ms, 7);
        assert_eq!(summary.output, "-");
    }
}
