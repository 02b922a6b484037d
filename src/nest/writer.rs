use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Output encoding for materialized records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Pretty,
    /// Compact JSON array
    Compact,
    /// One record per line, no enclosing array
    Ndjson,
}

/// Writes materialized records as JSON to any output
pub struct RecordWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        RecordWriter { writer, format }
    }

    pub fn write_records(&mut self, records: &[Value]) -> Result<()> {
        match self.format {
            OutputFormat::Pretty => {
                let json = serde_json::to_string_pretty(records)
                    .context("Failed to serialize records")?;
                writeln!(self.writer, "{}", json).context("Failed to write records")?;
            }
            OutputFormat::Compact => {
                let json =
                    serde_json::to_string(records).context("Failed to serialize records")?;
                writeln!(self.writer, "{}", json).context("Failed to write records")?;
            }
            OutputFormat::Ndjson => {
                for record in records {
                    let line =
                        serde_json::to_string(record).context("Failed to serialize record")?;
                    writeln!(self.writer, "{}", line).context("Failed to write record")?;
                }
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

/// Write records to `path` as a pretty-printed JSON array file
pub fn save_json<P: AsRef<Path>>(records: &[Value], path: P) -> Result<()> {
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
    let mut writer = RecordWriter::new(std::io::BufWriter::new(file), OutputFormat::Pretty);
    writer.write_records(records)?;
    writer.flush()
}
