//! Error types for loading border specifications

use thiserror::Error;

/// Errors that can occur when loading a `BorderSpec`
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Failed to read border spec file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse border spec TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = SpecError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.toml",
        ));
        assert!(err.to_string().contains("Failed to read"));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_parse_error_display() {
        let toml_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err = SpecError::from(toml_err);
        assert!(err.to_string().starts_with("Failed to parse border spec TOML"));
    }
}
