//! JSON summary formatter

use super::{RunSummary, SummaryFormatter};
use anyhow::Result;
use std::io::Write;

/// Pretty-printed JSON summary
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SummaryFormatter for JsonFormatter<W> {
    fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, summary)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_summary_parses_back() {
        let summary = RunSummary {
            input: "-".into(),
            output: "out.txt".into(),
            mode: "parallel".into(),
            bytes_read: 2048,
            lines: 64,
            lines_written: 64,
            replacements: 12,
            write_failures: 0,
            elapsed_ms: 3,
        };

        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.write_summary(&summary).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(json["mode"], "parallel");
        assert_eq!(json["replacements"], 12);
        assert_eq!(json["input"], "-");
    }
}
