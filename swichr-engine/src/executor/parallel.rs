//! Parallel execution strategy
//!
//! Lines are collected into windows and transformed on a rayon pool. Workers
//! finish in any order; results pass through a [`ReorderBuffer`] so the sink
//! still receives lines strictly in input order.

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    executor::{decode_line, flush_sink, write_line, ExecutionMode, Executor, RunStats},
    input::ChunkReader,
    reorder::ReorderBuffer,
    sink::LineSink,
};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::io::Read;
use std::sync::mpsc;
use std::time::Instant;
use swichr_core::{LineAssembler, ReplacedLine, Replacer};

/// Multi-threaded executor with ordered output
#[derive(Debug)]
pub struct ParallelExecutor {
    chunk_size: usize,
    window_lines: usize,
    pool: ThreadPool,
}

impl ParallelExecutor {
    /// Create a parallel executor with its own worker pool
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let threads = config.threads.unwrap_or_else(num_cpus::get);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("swichr-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        log::debug!("parallel executor using {threads} worker threads");

        Ok(Self {
            chunk_size: config.chunk_size,
            window_lines: config.window_lines.max(1),
            pool,
        })
    }

    /// Number of worker threads
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Transform one window of lines and write the results in order
    fn dispatch(
        &self,
        window: &mut Vec<(usize, String)>,
        reorder: &mut ReorderBuffer<ReplacedLine>,
        sink: &mut dyn LineSink,
        replacer: &Replacer,
        stats: &mut RunStats,
    ) {
        if window.is_empty() {
            return;
        }
        log::trace!("dispatching {} lines from index {}", window.len(), reorder.next_index());

        let (tx, rx) = mpsc::channel::<(usize, ReplacedLine)>();

        // The calling thread drains results while workers run
        self.pool.in_place_scope(|scope| {
            for (index, line) in window.drain(..) {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    // The receiver outlives the scope, so send cannot fail
                    let _ = tx.send((index, replacer.replace_line(&line)));
                });
            }
            drop(tx);

            for (index, replaced) in rx {
                reorder.insert(index, replaced);
                while let Some(ready) = reorder.pop_ready() {
                    let position = reorder.next_index() - 1;
                    stats.replacements += ready.replacements;
                    write_line(sink, &ready.text, position, stats);
                }
            }
        });
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        source: &mut dyn Read,
        sink: &mut dyn LineSink,
        replacer: &Replacer,
    ) -> Result<RunStats> {
        let start_time = Instant::now();
        let mut stats = RunStats::new(ExecutionMode::Parallel);
        let mut reader = ChunkReader::new(source, self.chunk_size);
        let mut assembler = LineAssembler::new();
        let mut reorder = ReorderBuffer::new();
        let mut window: Vec<(usize, String)> = Vec::with_capacity(self.window_lines);

        let mut emit = |bytes: &[u8]| {
            let index = stats.lines;
            window.push((index, decode_line(bytes, index + 1).into_owned()));
            stats.lines += 1;
            if window.len() >= self.window_lines {
                self.dispatch(&mut window, &mut reorder, sink, replacer, &mut stats);
            }
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

        // Lines completed before a read failure are still written
        self.dispatch(&mut window, &mut reorder, sink, replacer, &mut stats);
        debug_assert!(reorder.is_empty());

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
        ExecutionMode::Parallel
    }
}
