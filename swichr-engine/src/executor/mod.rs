//! Execution strategies for streaming replacement

use crate::{config::EngineConfig, error::Result, sink::LineSink};
use std::borrow::Cow;
use std::io::Read;
use std::time::Duration;
use swichr_core::Replacer;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Transform and write each line as soon as it is assembled
    Sequential,
    /// Transform windows of lines on a worker pool, writing in input order
    Parallel,
    /// Pick sequential or parallel from the input size
    Adaptive,
}

/// Summary of one replacement run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Execution mode that was actually used
    pub mode: ExecutionMode,
    /// Bytes read from the input
    pub bytes_read: u64,
    /// Lines assembled and transformed
    pub lines: usize,
    /// Tokens replaced across all lines
    pub replacements: usize,
    /// Lines whose write to the sink failed
    pub write_failures: usize,
    /// Wall-clock processing time
    pub elapsed: Duration,
}

impl RunStats {
    /// Empty statistics for a run in `mode`
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            mode,
            bytes_read: 0,
            lines: 0,
            replacements: 0,
            write_failures: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Lines written successfully
    pub fn lines_written(&self) -> usize {
        self.lines - self.write_failures
    }
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Stream `source` through `replacer` into `sink`
    fn execute(
        &self,
        source: &mut dyn Read,
        sink: &mut dyn LineSink,
        replacer: &Replacer,
    ) -> Result<RunStats>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve `Adaptive` to a concrete mode from the input size, if known.
///
/// Inputs of unknown size are processed in parallel when available.
pub fn auto_select(estimated_size: Option<usize>, config: &EngineConfig) -> ExecutionMode {
    match config.execution_mode {
        ExecutionMode::Adaptive => match estimated_size {
            Some(size) if size < config.parallel_threshold => ExecutionMode::Sequential,
            _ => parallel_or_fallback(),
        },
        ExecutionMode::Parallel => parallel_or_fallback(),
        ExecutionMode::Sequential => ExecutionMode::Sequential,
    }
}

fn parallel_or_fallback() -> ExecutionMode {
    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}

/// Decode one assembled line, replacing invalid UTF-8
pub(crate) fn decode_line(bytes: &[u8], line_number: usize) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        log::warn!("line {line_number} is not valid UTF-8; invalid bytes were replaced");
    }
    text
}

/// Write one line, recording rather than propagating a failure
pub(crate) fn write_line(sink: &mut dyn LineSink, line: &str, index: usize, stats: &mut RunStats) {
    if let Err(e) = sink.append_line(line) {
        stats.write_failures += 1;
        log::warn!("failed to write line {}: {e}", index + 1);
    }
}

/// Flush the sink at the end of a run, logging a failure
pub(crate) fn flush_sink(sink: &mut dyn LineSink) {
    if let Err(e) = sink.flush() {
        log::warn!("failed to flush output: {e}");
    }
}
