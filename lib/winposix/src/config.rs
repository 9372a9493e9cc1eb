use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Settings for the facade's reporting sink.
///
/// ```toml
/// verbose = true
/// warn_unimplemented = false
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosixConfig {
    /// Log successful native calls as well as failures.
    pub verbose: bool,
    /// Log unimplemented-operation notifications at `warn` rather than
    /// `debug`.
    pub warn_unimplemented: bool,
}

impl Default for PosixConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            warn_unimplemented: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration")]
    Parse(#[from] toml::de::Error),
}

impl PosixConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
