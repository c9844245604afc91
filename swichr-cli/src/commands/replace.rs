//! Replace command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, RunSummary, SummaryFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use swichr_engine::{
    AppendFileSink, EngineConfig, ExecutionMode, Input, PunctuationSet, ReplacementProcessor,
    RunStats, WriterSink,
};

/// Path value standing for stdin or stdout
const STDIO: &str = "-";

/// Arguments for the replace command
#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Input file ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file, appended to and created if absent ("-" for stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Word to replace (matched case-insensitively)
    #[arg(short, long, value_name = "WORD")]
    pub target: String,

    /// Replacement word (takes each occurrence's casing)
    #[arg(short, long, value_name = "WORD")]
    pub substitute: String,

    /// Execution mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of worker threads (default: one per CPU)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Read size in KB
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Lines per parallel dispatch window
    #[arg(long, value_name = "N")]
    pub window_lines: Option<usize>,

    /// Characters stripped before comparing tokens (replaces the default set)
    #[arg(short, long, value_name = "CHARS")]
    pub punctuation: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a run summary in the given format
    #[arg(long, value_enum)]
    pub summary: Option<SummaryFormat>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Execution modes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// One line at a time on the calling thread
    Sequential,
    /// Windows of lines on a worker pool
    Parallel,
    /// Choose from the input size
    Adaptive,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Parallel => ExecutionMode::Parallel,
            Mode::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable text
    Text,
    /// JSON object
    Json,
}

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting replacement");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let engine_config = self.engine_config(&file_config)?;
        let punctuation = self.punctuation_set(&file_config);

        let processor = ReplacementProcessor::builder(&self.target, &self.substitute)
            .punctuation(punctuation)
            .config(engine_config)
            .build()?;

        // The input is opened before the output is touched
        let mut progress = ProgressReporter::new(self.quiet || is_stdio(&self.output));
        let input = self.open_input(&mut progress)?;

        let stats = if is_stdio(&self.output) {
            let mut sink = WriterSink::stdout();
            processor.process(input, &mut sink)
        } else {
            let mut sink = AppendFileSink::open(&self.output)?;
            processor.process(input, &mut sink)
        };
        progress.finish();
        let stats = stats.map_err(|e| {
            CliError::ProcessingError(format!("{}: {e}", self.input.display()))
        })?;

        if stats.write_failures > 0 {
            log::warn!(
                "{} of {} lines could not be written to {}",
                stats.write_failures,
                stats.lines,
                self.output.display()
            );
        }

        self.print_summary(&stats)
    }

    /// Merge command-line flags over the configuration file
    fn engine_config(&self, file_config: &CliConfig) -> Result<EngineConfig> {
        let performance = &file_config.performance;

        let mode = match self.mode {
            Some(mode) => mode.into(),
            None => parse_mode(&file_config.replace.mode)?,
        };
        let threads = self
            .threads
            .or((performance.worker_threads > 0).then_some(performance.worker_threads));

        let chunk_size = scaled(
            self.chunk_kb.unwrap_or(performance.chunk_size_kb),
            1024,
            "chunk size",
        )?;
        let parallel_threshold = scaled(
            performance.parallel_threshold_mb,
            1024 * 1024,
            "parallel threshold",
        )?;

        let config = EngineConfig::builder()
            .execution_mode(mode)
            .chunk_size(chunk_size)
            .window_lines(self.window_lines.unwrap_or(performance.window_lines))
            .threads(threads)
            .parallel_threshold(parallel_threshold)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    fn punctuation_set(&self, file_config: &CliConfig) -> PunctuationSet {
        self.punctuation
            .as_deref()
            .or(file_config.replace.punctuation.as_deref())
            .map(PunctuationSet::from_chars)
            .unwrap_or_default()
    }

    fn open_input(&self, progress: &mut ProgressReporter) -> Result<Input> {
        if is_stdio(&self.input) {
            return Ok(Input::from_reader(io::stdin()));
        }

        if !self.input.exists() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }

        let file = File::open(&self.input)
            .with_context(|| format!("Failed to open {}", self.input.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("Failed to read metadata for {}", self.input.display()))?
            .len();

        progress.init_bytes(size);
        Ok(Input::from_sized_reader(progress.wrap_read(file), size as usize))
    }

    fn print_summary(&self, stats: &RunStats) -> Result<()> {
        let Some(format) = self.summary else {
            return Ok(());
        };

        let summary = RunSummary::from_stats(
            self.input.display().to_string(),
            self.output.display().to_string(),
            stats,
        );

        // Keep stdout clean when it carries the replaced text
        let writer: Box<dyn Write> = if is_stdio(&self.output) {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };

        match format {
            SummaryFormat::Text => TextFormatter::new(writer).write_summary(&summary),
            SummaryFormat::Json => JsonFormatter::new(writer).write_summary(&summary),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Convert a KB/MB setting to bytes
fn scaled(value: usize, unit: usize, name: &str) -> Result<usize, CliError> {
    value
        .checked_mul(unit)
        .ok_or_else(|| CliError::ConfigError(format!("{name} {value} is too large")))
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Parse a mode name from a configuration file
pub fn parse_mode(name: &str) -> Result<ExecutionMode, CliError> {
    match name.to_ascii_lowercase().as_str() {
        "sequential" => Ok(ExecutionMode::Sequential),
        "parallel" => Ok(ExecutionMode::Parallel),
        "adaptive" => Ok(ExecutionMode::Adaptive),
        other => Err(CliError::ConfigError(format!("unknown mode '{other}'"))),
    }
}
