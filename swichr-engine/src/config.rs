//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    executor::ExecutionMode,
};

/// Default configuration constants
pub mod defaults {
    /// Bytes requested from the input per read (64KB)
    pub const CHUNK_SIZE: usize = 64 * 1024;

    /// Lines handed to the worker pool per dispatch
    pub const WINDOW_LINES: usize = 1024;

    /// Input size above which adaptive mode goes parallel (1MB)
    pub const PARALLEL_THRESHOLD: usize = 1024 * 1024;
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Bytes requested from the input per read
    pub chunk_size: usize,
    /// Lines dispatched to workers at a time in parallel mode
    pub window_lines: usize,
    /// Number of worker threads (None = one per CPU)
    pub threads: Option<usize>,
    /// Minimum input size for adaptive mode to choose parallel
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            chunk_size: defaults::CHUNK_SIZE,
            window_lines: defaults::WINDOW_LINES,
            threads: None,
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Create a configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
            ..Self::default()
        }
    }

    /// Always dispatch lines to the worker pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(EngineError::ConfigError(
                "chunk_size must be greater than 0".into(),
            ));
        }

        if self.window_lines == 0 {
            return Err(EngineError::ConfigError(
                "window_lines must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(EngineError::ConfigError(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    execution_mode: Option<ExecutionMode>,
    chunk_size: Option<usize>,
    window_lines: Option<usize>,
    threads: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the read chunk size in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = Some(bytes);
        self
    }

    /// Set the dispatch window in lines
    pub fn window_lines(mut self, lines: usize) -> Self {
        self.window_lines = Some(lines);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let mut config = EngineConfig::default();

        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }
        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(lines) = self.window_lines {
            config.window_lines = lines;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if let Some(threshold) = self.parallel_threshold {
            config.parallel_threshold = threshold;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.chunk_size, 64 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfig::sequential().threads, Some(1));
        assert_eq!(
            EngineConfig::parallel().execution_mode,
            ExecutionMode::Parallel
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::builder()
            .execution_mode(ExecutionMode::Sequential)
            .chunk_size(16)
            .window_lines(8)
            .threads(Some(2))
            .parallel_threshold(10)
            .build()
            .unwrap();

        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.window_lines, 8);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.parallel_threshold, 10);
    }

    #[test]
    fn test_builder_rejects_zero_values() {
        assert!(EngineConfig::builder().chunk_size(0).build().is_err());
        assert!(EngineConfig::builder().window_lines(0).build().is_err());
        assert!(EngineConfig::builder().threads(Some(0)).build().is_err());
    }
}
