use thiserror::Error;

/// Process exit code for any run that ends on a fatal error.
pub const EXIT_CODE_ERROR: i32 = 2;

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Cannot open input '{path}': {source}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    #[error("Failed to write row {row}: {source}")]
    WriteError {
        row: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// The current row is dropped and the stream goes on.
    Recoverable,
    /// The run stops.
    Fatal,
}

impl TidyError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TidyError::MalformedRecord { .. } | TidyError::WriteError { .. } => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Fatal,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Recoverable
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TidyError::OpenInput { path, .. } => {
                format!("Input file '{}' could not be opened", path)
            }
            TidyError::ConfigError { .. }
            | TidyError::InvalidConfigValueError { .. }
            | TidyError::TomlError(_) => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TidyError>;
