//! Builder configuration

use serde::{Deserialize, Serialize};

use crate::error::BuilderError;

/// Builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Indent serialized JSON (raw editor and form field)
    pub pretty_json: bool,
    /// Maximum icon picker results, 0 for unlimited
    pub icon_search_limit: usize,
}

impl BuilderConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_icon_search_limit(mut self, limit: usize) -> Self {
        self.icon_search_limit = limit;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or has unknown value types
    pub fn from_toml_str(text: &str) -> Result<Self, BuilderError> {
        toml::from_str(text).map_err(|e| BuilderError::Config(e.to_string()))
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            icon_search_limit: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BuilderConfig::new();
        assert!(config.pretty_json);
        assert_eq!(config.icon_search_limit, 0);
    }

    #[test]
    fn from_toml_partial() {
        let config = BuilderConfig::from_toml_str("icon_search_limit = 12").unwrap();
        assert_eq!(config, BuilderConfig::new().with_icon_search_limit(12));
    }

    #[test]
    fn from_toml_rejects_bad_types() {
        assert!(BuilderConfig::from_toml_str("pretty_json = \"yes\"").is_err());
    }
}
