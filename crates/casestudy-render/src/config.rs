//! Renderer configuration

use serde::{Deserialize, Serialize};

/// Default banner text when the header has no report title
pub const DEFAULT_REPORT_TITLE: &str = "Development Process Report";

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Banner text used when `header.reportTitle` is absent or empty
    pub default_report_title: String,
    /// Also render the `ux`, `seo` and `other` roadmap buckets
    pub include_schema_only_buckets: bool,
}

impl RenderConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_default_report_title(mut self, title: impl Into<String>) -> Self {
        self.default_report_title = title.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_schema_only_buckets(mut self, include: bool) -> Self {
        self.include_schema_only_buckets = include;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the TOML is invalid
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError(e.to_string()))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_report_title: DEFAULT_REPORT_TITLE.to_string(),
            include_schema_only_buckets: false,
        }
    }
}

/// Invalid renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid render config: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.default_report_title, "Development Process Report");
        assert!(!config.include_schema_only_buckets);
    }

    #[test]
    fn from_toml() {
        let config = RenderConfig::from_toml_str("include_schema_only_buckets = true").unwrap();
        assert!(config.include_schema_only_buckets);
        assert_eq!(config.default_report_title, DEFAULT_REPORT_TITLE);
    }
}
