use crate::domain::model::Settings;
use crate::utils::error::{Result, TidyError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TidyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TidyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input_path {
            validate_path("input.path", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "data.csv").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "bad\0name.csv").is_err());
    }

    #[test]
    fn test_settings_without_path_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }
}
