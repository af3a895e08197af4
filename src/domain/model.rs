use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// One row of the stream: an ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub cells: Vec<String>,
}

impl Record {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// Invalid UTF-8 sequences are replaced with U+FFFD; the rest of the cell is kept.
impl From<csv::ByteRecord> for Record {
    fn from(record: csv::ByteRecord) -> Self {
        Self {
            cells: record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
        }
    }
}

/// Options resolved once before the first record is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub remove_tab: bool,
    pub remove_newline: bool,
    pub remove_space: bool,
    pub output_format: OutputFormat,
    /// `None` reads standard input.
    pub input_path: Option<PathBuf>,
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records_read: u64,
    pub records_written: u64,
    pub records_skipped: u64,
    pub write_failures: u64,
}
