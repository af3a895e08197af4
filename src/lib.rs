pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    engine::Engine,
    normalizer::CellNormalizer,
    replacer::{ReplacementRules, Replacer},
    sink::{RecordEncoder, RecordSink},
    source::{open_input, RecordSource},
};
pub use domain::model::{OutputFormat, Record, RunSummary, Settings};
pub use domain::ports::ConfigProvider;
pub use utils::error::{Result, TidyError};
