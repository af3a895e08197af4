use crate::core::normalizer::CellNormalizer;
use crate::core::sink::{RecordEncoder, RecordSink};
use crate::core::source::RecordSource;
use crate::domain::model::RunSummary;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{Read, Write};

/// Drives records from a source through the normalizer into a sink.
#[derive(Debug, Clone)]
pub struct Engine {
    normalizer: CellNormalizer,
    encoder: RecordEncoder,
}

impl Engine {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self {
            normalizer: CellNormalizer::new(config)?,
            encoder: RecordEncoder::for_format(config.output_format())?,
        })
    }

    /// Processes the whole input stream. Row-level failures are logged and
    /// skipped; anything else stops the run. Output is flushed once, at the end.
    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<RunSummary> {
        let source = RecordSource::new(input);
        let mut sink = RecordSink::new(output, self.encoder.clone());
        let mut summary = RunSummary::default();

        tracing::debug!("Writing {} output", self.encoder.format());

        for item in source {
            let mut record = match item {
                Ok(record) => record,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Skipping row: {}", e);
                    summary.records_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            summary.records_read += 1;

            self.normalizer.normalize_record(&mut record);

            if let Err(e) = sink.write_record(&record) {
                tracing::warn!("{}", e);
                summary.write_failures += 1;
                continue;
            }
            summary.records_written += 1;
        }

        sink.finish()?;

        tracing::debug!(
            "Done: {} read, {} written, {} skipped, {} write failures",
            summary.records_read,
            summary.records_written,
            summary.records_skipped,
            summary.write_failures
        );

        Ok(summary)
    }
}
