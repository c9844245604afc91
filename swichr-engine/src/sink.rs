//! Append-only line sinks

use crate::error::{EngineError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Destination for transformed lines
pub trait LineSink {
    /// Append one line; the sink adds the trailing newline.
    ///
    /// A line is written whole or not at all from the caller's point of view:
    /// lines never interleave.
    fn append_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink writing newline-terminated lines to any [`Write`]
pub struct WriterSink<W: Write> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W: Write> WriterSink<W> {
    /// Create a new writer sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    /// Create a sink that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        // One write per line keeps the line and its newline together
        self.scratch.clear();
        self.scratch.extend_from_slice(line.as_bytes());
        self.scratch.push(b'\n');
        self.writer.write_all(&self.scratch)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Sink appending to a file, created if absent
///
/// Writes are unbuffered: each line reaches the file in its own write, so a
/// failure is reported for the line that caused it.
pub struct AppendFileSink {
    inner: WriterSink<File>,
}

impl AppendFileSink {
    /// Open `path` in append mode
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| EngineError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            inner: WriterSink::new(file),
        })
    }
}

impl LineSink for AppendFileSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.append_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory sink, mostly useful in tests and for small inputs
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Lines received, in arrival order
    pub lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the received lines as file content
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl LineSink for MemorySink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writer_sink_appends_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.append_line("one").unwrap();
        sink.append_line("").unwrap();
        sink.append_line("three").unwrap();
        assert_eq!(sink.into_inner(), b"one\n\nthree\n");
    }

    #[test]
    fn test_append_file_sink_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let mut sink = AppendFileSink::open(&path).unwrap();
        sink.append_line("Dog").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dog\n");
    }

    #[test]
    fn test_append_file_sink_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "existing\n").unwrap();

        let mut sink = AppendFileSink::open(&path).unwrap();
        sink.append_line("new").unwrap();
        sink.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nnew\n");
    }

    #[test]
    fn test_append_file_sink_bad_directory() {
        let result = AppendFileSink::open(Path::new("/nonexistent/dir/out.txt"));
        assert!(matches!(result, Err(EngineError::Open { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_append_file_sink_reports_each_failed_line() {
        let mut sink = AppendFileSink::open(Path::new("/dev/full")).unwrap();
        assert!(sink.append_line("Dog").is_err());
        assert!(sink.append_line("DOG").is_err());
    }

    #[test]
    fn test_memory_sink_contents() {
        let mut sink = MemorySink::new();
        sink.append_line("a").unwrap();
        sink.append_line("b").unwrap();
        assert_eq!(sink.lines, vec!["a", "b"]);
        assert_eq!(sink.contents(), "a\nb\n");
    }
}
