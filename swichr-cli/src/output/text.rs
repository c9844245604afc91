//! Plain text summary formatter

use super::{RunSummary, SummaryFormatter};
use anyhow::Result;
use std::io::Write;

/// Human-readable summary, one field per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SummaryFormatter for TextFormatter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.writer, "Input:          {}", summary.input)?;
        writeln!(self.writer, "Output:         {}", summary.output)?;
        writeln!(self.writer, "Mode:           {}", summary.mode)?;
        writeln!(self.writer, "Bytes read:     {}", summary.bytes_read)?;
        writeln!(self.writer, "Lines:          {}", summary.lines)?;
        writeln!(self.writer, "Replacements:   {}", summary.replacements)?;
        if summary.write_failures > 0 {
            writeln!(self.writer, "Write failures: {}", summary.write_failures)?;
        }
        writeln!(self.writer, "Elapsed:        {} ms", summary.elapsed_ms)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(write_failures: usize) -> RunSummary {
        RunSummary {
            input: "in.txt".into(),
            output: "out.txt".into(),
            mode: "sequential".into(),
            bytes_read: 42,
            lines: 3,
            lines_written: 3 - write_failures,
            replacements: 2,
            write_failures,
            elapsed_ms: 1,
        }
    }

    #[test]
    fn test_text_summary() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.write_summary(&summary(0)).unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(text.contains("Mode:           sequential"));
        assert!(text.contains("Replacements:   2"));
        assert!(!text.contains("Write failures"));
    }

    #[test]
    fn test_text_summary_reports_failures() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.write_summary(&summary(1)).unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(text.contains("Write failures: 1"));
    }
}
