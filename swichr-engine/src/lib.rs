//! Streaming orchestration for case-preserving word replacement
//!
//! This crate reads an input in chunks, reassembles lines, runs each line
//! through a [`swichr_core::Replacer`] and appends the results to a sink in
//! input order, sequentially or on a worker pool.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;
pub mod reorder;
pub mod sink;

// Re-export key types
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor, RunStats};
pub use input::{ChunkReader, Input};
pub use processor::{run_replacement, ReplacementProcessor, ReplacementProcessorBuilder};
pub use reorder::ReorderBuffer;
pub use sink::{AppendFileSink, LineSink, MemorySink, WriterSink};

// Re-export from core for convenience
pub use swichr_core::{replace, PunctuationSet, ReplacedLine, Replacer, DEFAULT_PUNCTUATION};
