//! Sequential execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{decode_line, flush_sink, write_line, ExecutionMode, Executor, RunStats},
    input::ChunkReader,
    sink::LineSink,
};
use std::io::Read;
use std::time::Instant;
use swichr_core::{LineAssembler, Replacer};

/// Single-threaded executor: each line is transformed and written inline
#[derive(Debug, Clone)]
pub struct SequentialExecutor {
    chunk_size: usize,
}

impl SequentialExecutor {
    /// Create a sequential executor reading `chunk_size` bytes at a time
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }
}

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        source: &mut dyn Read,
        sink: &mut dyn LineSink,
        replacer: &Replacer,
    ) -> Result<RunStats> {
        let start_time = Instant::now();
        let mut stats = RunStats::new(ExecutionMode::Sequential);
        let mut reader = ChunkReader::new(source, self.chunk_size);
        let mut assembler = LineAssembler::new();

        let mut emit = |bytes: &[u8]| {
            let index = stats.lines;
            let line = decode_line(bytes, index + 1);
            let replaced = replacer.replace_line(&line);
            stats.lines += 1;
            stats.replacements += replaced.replacements;
            write_line(sink, &replaced.text, index, &mut stats);
        };

        let outcome = loop {
            match reader.next_chunk() {
                Ok(Some(chunk)) => assembler.push(chunk, &mut emit),
                Ok(None) => {
                    assembler.finish(&mut emit);
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        flush_sink(sink);
        stats.bytes_read = reader.bytes_read();
        stats.elapsed = start_time.elapsed();

        match outcome {
            Ok(()) => Ok(stats),
            Err(source) => {
                let dropped = assembler.discard();
                log::error!(
                    "input failed after {} lines; discarded {dropped} unterminated bytes",
                    stats.lines
                );
                Err(EngineError::Read {
                    bytes_read: stats.bytes_read,
                    source,
                })
            }
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::io::Cursor;

    #[test]
    fn test_sequential_replaces_lines() {
        let executor = SequentialExecutor::new(4);
        let replacer = Replacer::new("cat", "dog");
        let mut sink = MemorySink::new();
        let mut source = Cursor::new("The Cat sat.\nCAT!\nno match".as_bytes());

        let stats = executor.execute(&mut source, &mut sink, &replacer).unwrap();

        assert_eq!(sink.lines, vec!["The Dog sat.", "DOG!", "no match"]);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.replacements, 2);
        assert_eq!(stats.bytes_read, 26);
        assert_eq!(stats.mode, ExecutionMode::Sequential);
        assert_eq!(executor.mode(), stats.mode);
    }
}
