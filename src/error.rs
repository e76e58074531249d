use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the explicit (`try_*` / `FromStr`) creation paths.
///
/// The `Option` returning selectors never produce one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("no {family} registered for selector '{selector}'")]
    UnknownSelector {
        family: &'static str,
        selector: String,
    },
}

impl FactoryError {
    pub fn unknown(family: &'static str, selector: impl Into<String>) -> Self {
        Self::UnknownSelector {
            family,
            selector: selector.into(),
        }
    }
}

/// Errors raised while loading the demo configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    Parse { message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

pub type Result<T, E = FactoryError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selector_message() {
        let err = FactoryError::unknown("car", "Sedan");
        assert_eq!(err.to_string(), "no car registered for selector 'Sedan'");
    }

    #[test]
    fn test_toml_error_converts_to_parse() {
        let err: ConfigError = toml::from_str::<toml::Value>("sections = [")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
