//! Replacement processor and builder

use crate::{
    config::{EngineConfig, EngineConfigBuilder},
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, RunStats, SequentialExecutor},
    input::Input,
    sink::{AppendFileSink, LineSink},
};
use std::io::Read;
use std::path::Path;
use swichr_core::{PunctuationSet, Replacer};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Streams an input through a [`Replacer`] into a sink
#[derive(Debug, Clone)]
pub struct ReplacementProcessor {
    replacer: Replacer,
    config: EngineConfig,
}

impl ReplacementProcessor {
    /// Create a processor with the default configuration
    pub fn new(target: &str, substitute: &str) -> Self {
        Self {
            replacer: Replacer::new(target, substitute),
            config: EngineConfig::default(),
        }
    }

    /// Start building a processor
    pub fn builder(
        target: impl Into<String>,
        substitute: impl Into<String>,
    ) -> ReplacementProcessorBuilder {
        ReplacementProcessorBuilder::new(target, substitute)
    }

    /// The configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The replacer in use
    pub fn replacer(&self) -> &Replacer {
        &self.replacer
    }

    /// Process `input`, appending transformed lines to `sink`
    pub fn process(&self, input: Input, sink: &mut dyn LineSink) -> Result<RunStats> {
        let mode = auto_select(input.estimated_size(), &self.config);
        let mut source = input.open()?;
        self.run(mode, &mut source, sink)
    }

    /// Process `input`, appending to the file at `output` (created if absent)
    pub fn process_to_file(&self, input: Input, output: &Path) -> Result<RunStats> {
        let mode = auto_select(input.estimated_size(), &self.config);
        // Open the input first so a missing input never creates the output
        let mut source = input.open()?;
        let mut sink = AppendFileSink::open(output)?;
        self.run(mode, &mut source, &mut sink)
    }

    fn run(
        &self,
        mode: ExecutionMode,
        source: &mut dyn Read,
        sink: &mut dyn LineSink,
    ) -> Result<RunStats> {
        log::info!(
            "replacing {:?} with {:?} ({:?} mode)",
            self.replacer.target(),
            self.replacer.substitute(),
            mode
        );

        let executor: Box<dyn Executor> = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => Box::new(ParallelExecutor::new(&self.config)?),
            _ => Box::new(SequentialExecutor::new(self.config.chunk_size)),
        };
        log::debug!("using {:?} executor", executor.mode());

        let stats = executor.execute(source, sink, &self.replacer)?;

        log::info!(
            "processed {} lines ({} bytes), {} replacements, {} write failures in {:?}",
            stats.lines,
            stats.bytes_read,
            stats.replacements,
            stats.write_failures,
            stats.elapsed
        );
        Ok(stats)
    }
}

/// Builder for [`ReplacementProcessor`]
pub struct ReplacementProcessorBuilder {
    target: String,
    substitute: String,
    punctuation: Option<PunctuationSet>,
    config_builder: EngineConfigBuilder,
    config: Option<EngineConfig>,
}

impl ReplacementProcessorBuilder {
    /// Create a new builder
    pub fn new(target: impl Into<String>, substitute: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            substitute: substitute.into(),
            punctuation: None,
            config_builder: EngineConfigBuilder::new(),
            config: None,
        }
    }

    /// Use a custom punctuation set
    pub fn punctuation(mut self, punctuation: PunctuationSet) -> Self {
        self.punctuation = Some(punctuation);
        self
    }

    /// Use a complete engine configuration, replacing individual settings
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config_builder = self.config_builder.execution_mode(mode);
        self
    }

    /// Set the read chunk size in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.config_builder = self.config_builder.chunk_size(bytes);
        self
    }

    /// Set the dispatch window in lines
    pub fn window_lines(mut self, lines: usize) -> Self {
        self.config_builder = self.config_builder.window_lines(lines);
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config_builder = self.config_builder.threads(count);
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<ReplacementProcessor> {
        let config = match self.config {
            Some(config) => {
                config.validate()?;
                config
            }
            None => self.config_builder.build()?,
        };

        let punctuation = self.punctuation.unwrap_or_default();
        Ok(ReplacementProcessor {
            replacer: Replacer::with_punctuation(&self.target, &self.substitute, punctuation),
            config,
        })
    }
}

/// Replace `target_word` with `substitute_word` in the file at `input_path`,
/// appending the result to `output_path`.
///
/// Opening either file or reading the input can fail; failures writing
/// individual lines are logged and counted in the returned statistics.
pub fn run_replacement(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    substitute_word: &str,
    target_word: &str,
) -> Result<RunStats> {
    ReplacementProcessor::new(target_word, substitute_word)
        .process_to_file(Input::from_file(input_path.as_ref()), output_path.as_ref())
}
