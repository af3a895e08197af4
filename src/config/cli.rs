use crate::config::toml_config::TomlConfig;
use crate::domain::model::{OutputFormat, Settings};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "csvtidy")]
#[command(version)]
#[command(about = "Clean up cells of a CSV stream and re-emit it as CSV or TSV")]
pub struct CliConfig {
    /// Remove tab characters inside cells
    #[arg(short = 't', long)]
    pub remove_tab: bool,

    /// Remove newlines inside cells instead of escaping them
    #[arg(short = 'n', long)]
    pub remove_newline: bool,

    /// Collapse runs of whitespace and trim cells
    #[arg(short = 's', long)]
    pub remove_space: bool,

    /// Write TSV instead of CSV
    #[arg(short = 'T', long)]
    pub tsv: bool,

    /// Input file (defaults to stdin)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges flags over the optional config file. Boolean flags can only
    /// switch an option on; `--file` replaces the configured path.
    pub fn resolve(&self) -> Result<Settings> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?.to_settings()
            }
            None => Settings::default(),
        };

        Ok(Settings {
            remove_tab: self.remove_tab || base.remove_tab,
            remove_newline: self.remove_newline || base.remove_newline,
            remove_space: self.remove_space || base.remove_space,
            output_format: if self.tsv {
                OutputFormat::Tsv
            } else {
                base.output_format
            },
            input_path: self.file.clone().or(base.input_path),
        })
    }
}
