//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   swichr replace -i input.txt -o output.txt -t cat -s dog -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn generate_template() -> String {
        r#"# swichr configuration
#
# Command-line flags take precedence over these values.

[replace]
# Execution mode: "sequential", "parallel" or "adaptive"
mode = "adaptive"

# Characters stripped from a token before it is compared to the target word.
# Uncomment to replace the built-in set (see `swichr list punctuation`).
# punctuation = ".,!?"

[performance]
# Bytes requested from the input per read, in KB
chunk_size_kb = 64

# Lines handed to the worker pool at a time in parallel mode
window_lines = 1024

# Worker threads (0 = one per CPU)
worker_threads = 0

# Inputs of at least this size (MB) run in parallel under adaptive mode
parallel_threshold_mb = 1
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&GenerateConfigArgs::generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("swichr.toml");

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        args.execute().unwrap();

        let loaded = CliConfig::load(&output).unwrap();
        assert_eq!(loaded.replace.mode, "adaptive");
    }

    #[test]
    fn test_execute_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("swichr.toml");
        fs::write(&output, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let forced = GenerateConfigArgs {
            output: output.clone(),
            force: true,
        };
        forced.execute().unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("[performance]"));
    }

    #[test]
    fn test_execute_invalid_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/swichr.toml"),
            force: false,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
