use crate::domain::model::{OutputFormat, Settings};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TidyError};
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional configuration file. Every section and key may be omitted.
///
/// ```toml
/// [input]
/// path = "data.csv"
///
/// [normalize]
/// remove_tab = true
/// remove_newline = false
/// remove_space = true
///
/// [output]
/// format = "tsv"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub normalize: NormalizeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub remove_tab: bool,
    pub remove_newline: bool,
    pub remove_space: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TidyError::ConfigError {
            message: format!("cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for TomlConfig {
    fn remove_tab(&self) -> bool {
        self.normalize.remove_tab
    }

    fn remove_newline(&self) -> bool {
        self.normalize.remove_newline
    }

    fn remove_space(&self) -> bool {
        self.normalize.remove_space
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn input_path(&self) -> Option<&Path> {
        self.input.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}
