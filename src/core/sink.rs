use crate::core::replacer::{ReplacementRules, Replacer};
use crate::domain::model::{OutputFormat, Record};
use crate::utils::error::{Result, TidyError};
use std::io::{BufWriter, Write};

/// Serialization strategy for one output format.
#[derive(Debug, Clone)]
pub enum RecordEncoder {
    /// Every cell quoted, quotes doubled, comma separated.
    Csv(Replacer),
    /// Cells bare, tabs escaped as `\t`, tab separated.
    Tsv(Replacer),
}

impl RecordEncoder {
    pub fn for_format(format: OutputFormat) -> Result<Self> {
        match format {
            OutputFormat::Csv => {
                // `\"` is not a CSV escape; it collapses into a doubled quote as well.
                let rules = ReplacementRules::new()
                    .with("\\\"", "\"\"")
                    .with("\"", "\"\"");
                Ok(RecordEncoder::Csv(Replacer::new(&rules)?))
            }
            OutputFormat::Tsv => {
                let rules = ReplacementRules::new().with("\t", "\\t");
                Ok(RecordEncoder::Tsv(Replacer::new(&rules)?))
            }
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            RecordEncoder::Csv(_) => OutputFormat::Csv,
            RecordEncoder::Tsv(_) => OutputFormat::Tsv,
        }
    }

    /// Formats a whole line, terminator included.
    pub fn encode(&self, record: &Record) -> String {
        let mut line = String::new();

        match self {
            RecordEncoder::Csv(escaper) => {
                for (i, cell) in record.cells().iter().enumerate() {
                    if i > 0 {
                        line.push(',');
                    }
                    line.push('"');
                    line.push_str(&escaper.replace(cell));
                    line.push('"');
                }
            }
            RecordEncoder::Tsv(escaper) => {
                for (i, cell) in record.cells().iter().enumerate() {
                    if i > 0 {
                        line.push('\t');
                    }
                    line.push_str(&escaper.replace(cell));
                }
            }
        }

        line.push('\n');
        line
    }
}

/// Buffered writer of encoded records; flushed once by [`RecordSink::finish`].
pub struct RecordSink<W: Write> {
    writer: BufWriter<W>,
    encoder: RecordEncoder,
    rows: u64,
}

impl<W: Write> RecordSink<W> {
    pub fn new(output: W, encoder: RecordEncoder) -> Self {
        Self {
            writer: BufWriter::new(output),
            encoder,
            rows: 0,
        }
    }

    pub fn with_capacity(capacity: usize, output: W, encoder: RecordEncoder) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            encoder,
            rows: 0,
        }
    }

    /// Writes one row. On failure the row is abandoned as a whole and the
    /// error is recoverable; the next call starts a fresh line.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.rows += 1;
        let line = self.encoder.encode(record);

        self.writer
            .write_all(line.as_bytes())
            .map_err(|source| TidyError::WriteError {
                row: self.rows,
                source,
            })
    }

    /// Flushes buffered output and hands back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| TidyError::IoError(e.into_error()))
    }
}
