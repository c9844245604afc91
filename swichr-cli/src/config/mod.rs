//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Replacement configuration
    #[serde(default)]
    pub replace: ReplaceConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Replacement-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReplaceConfig {
    /// Execution mode: "sequential", "parallel" or "adaptive"
    pub mode: String,

    /// Characters stripped before comparing a token (None = built-in set)
    pub punctuation: Option<String>,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            mode: "adaptive".to_string(),
            punctuation: None,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Read size (KB)
    pub chunk_size_kb: usize,

    /// Lines per parallel dispatch window
    pub window_lines: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Input size above which adaptive mode goes parallel (MB)
    pub parallel_threshold_mb: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            chunk_size_kb: 64,
            window_lines: 1024,
            worker_threads: 0,
            parallel_threshold_mb: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.replace.mode, "adaptive");
        assert!(config.replace.punctuation.is_none());
        assert_eq!(config.performance.chunk_size_kb, 64);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[performance]
worker_threads = 2
"#,
        )
        .unwrap();

        assert_eq!(config.performance.worker_threads, 2);
        assert_eq!(config.performance.window_lines, 1024);
        assert_eq!(config.replace, ReplaceConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("swichr.toml");
        fs::write(
            &path,
            r#"
[replace]
mode = "sequential"
punctuation = ".,!?"

[performance]
chunk_size_kb = 8
window_lines = 64
worker_threads = 4
parallel_threshold_mb = 16
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.replace.mode, "sequential");
        assert_eq!(config.replace.punctuation.as_deref(), Some(".,!?"));
        assert_eq!(config.performance.chunk_size_kb, 8);
        assert_eq!(config.performance.parallel_threshold_mb, 16);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/swichr.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[performance]\nchunk_size_kb = \"big\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
