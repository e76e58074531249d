//! Demo configuration for the `patterns` binary.
//!
//! ```toml
//! sections = ["factory_method", "notifications", "simple_factory", "solid"]
//! color = true
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    FactoryMethod,
    Notifications,
    SimpleFactory,
    Solid,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::FactoryMethod,
        Section::Notifications,
        Section::SimpleFactory,
        Section::Solid,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::FactoryMethod => "Factory Method",
            Section::Notifications => "Factory Method (Notifications)",
            Section::SimpleFactory => "Simple Factory",
            Section::Solid => "SOLID Principles",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub sections: Vec<Section>,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            color: true,
        }
    }
}

impl DemoConfig {
    /// `Some(false)` when colors are switched off. `None` leaves the choice to
    /// terminal detection and `NO_COLOR`.
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            None
        } else {
            Some(false)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded demo config");
        Self::from_toml_str(&content)
    }

    /// An explicit path must exist. Without one, `patterns.toml` is used if
    /// present, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
