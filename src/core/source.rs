use crate::domain::model::Record;
use crate::utils::error::{Result, TidyError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Opens the named file, or standard input when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            tracing::debug!("Reading records from {}", path.display());
            let file = File::open(path).map_err(|source| TidyError::OpenInput {
                path: path.display().to_string(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => {
            tracing::debug!("Reading records from stdin");
            Ok(Box::new(std::io::stdin().lock()))
        }
    }
}

/// Rewrites lenient CSV into strict CSV, one physical line at a time.
///
/// Rules, applied per line:
/// - `\r\n` line endings become `\n`; a lone `\r` before EOF is dropped.
/// - A field that does not start with `"` is copied as is, quotes included.
/// - Inside a quoted field, `""` is an escaped quote, `",` and `"` at end of
///   line close the field, and any other `"` is a literal quote (re-escaped
///   as `""`). The field stays open across lines until it is closed.
/// - A quoted field still open at EOF is closed there.
struct LazyQuoteReader<R: BufRead> {
    inner: R,
    line: Vec<u8>,
    out: Vec<u8>,
    pos: usize,
    in_quotes: bool,
    eof: bool,
}

impl<R: BufRead> LazyQuoteReader<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
            out: Vec::new(),
            pos: 0,
            in_quotes: false,
            eof: false,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        self.out.clear();
        self.pos = 0;
        self.line.clear();

        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            self.eof = true;
            if self.in_quotes {
                self.out.push(b'"');
                self.in_quotes = false;
            }
            return Ok(());
        }

        if self.line.ends_with(b"\r\n") {
            let len = self.line.len();
            self.line.truncate(len - 2);
            self.line.push(b'\n');
        } else if self.line.ends_with(b"\r") {
            self.line.pop();
        }

        self.rewrite_line();
        Ok(())
    }

    fn rewrite_line(&mut self) {
        let line = &self.line;
        let out = &mut self.out;
        let mut i = 0;

        while i < line.len() {
            if !self.in_quotes {
                if line[i] == b'"' {
                    out.push(b'"');
                    self.in_quotes = true;
                    i += 1;
                    continue;
                }
                // Unquoted field: up to and including the next comma.
                while i < line.len() {
                    let b = line[i];
                    out.push(b);
                    i += 1;
                    if b == b',' {
                        break;
                    }
                }
                continue;
            }

            let b = line[i];
            if b != b'"' {
                out.push(b);
                i += 1;
                continue;
            }

            match line.get(i + 1) {
                Some(b'"') => {
                    out.extend_from_slice(b"\"\"");
                    i += 2;
                }
                Some(b',') => {
                    out.extend_from_slice(b"\",");
                    self.in_quotes = false;
                    i += 2;
                }
                Some(b'\n') | None => {
                    out.push(b'"');
                    self.in_quotes = false;
                    i += 1;
                }
                Some(_) => {
                    out.extend_from_slice(b"\"\"");
                    i += 1;
                }
            }
        }
    }
}

impl<R: BufRead> Read for LazyQuoteReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pos >= self.out.len() {
            if self.eof {
                return Ok(0);
            }
            self.fill()?;
        }

        let n = buf.len().min(self.out.len() - self.pos);
        buf[..n].copy_from_slice(&self.out[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Lazily parses comma-separated records from a byte stream.
///
/// Quoting is lenient (stray quotes are kept as text) and rows may have any number
/// of cells. Invalid UTF-8 is replaced rather than rejected. A row that still
/// fails to parse is yielded as a recoverable [`TidyError::MalformedRecord`]
/// and the stream continues; an I/O failure is yielded once and ends the stream.
pub struct RecordSource<R: Read> {
    records: csv::ByteRecordsIntoIter<LazyQuoteReader<BufReader<R>>>,
    failed: bool,
}

impl<R: Read> RecordSource<R> {
    pub fn new(input: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(true)
            .double_quote(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_reader(LazyQuoteReader::new(BufReader::new(input)));

        Self {
            records: reader.into_byte_records(),
            failed: false,
        }
    }

    fn classify(err: csv::Error) -> TidyError {
        if err.is_io_error() {
            return TidyError::CsvError(err);
        }

        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        TidyError::MalformedRecord {
            line,
            message: err.to_string(),
        }
    }
}

impl<R: Read> Iterator for RecordSource<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.records.next()? {
            Ok(record) => Some(Ok(Record::from(record))),
            Err(err) => {
                let err = Self::classify(err);
                if !err.is_recoverable() {
                    self.failed = true;
                }
                Some(Err(err))
            }
        }
    }
}
