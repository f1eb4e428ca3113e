//! CLI configuration file
//!
//! ```toml
//! [builder]
//! pretty_json = false
//! icon_search_limit = 12
//!
//! [render]
//! default_report_title = "Case Study"
//! include_schema_only_buckets = true
//! ```

use std::path::Path;

use anyhow::Context;
use casestudy_builder::BuilderConfig;
use casestudy_render::RenderConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CliConfig {
    pub(crate) builder: BuilderConfig,
    pub(crate) render: RenderConfig,
}

impl CliConfig {
    pub(crate) fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Configuration from `path`, or defaults when no file is given
    pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("in config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_tables_keep_defaults() {
        let config = CliConfig::from_toml_str(
            "[builder]\npretty_json = false\n\n[render]\ninclude_schema_only_buckets = true\n",
        )
        .unwrap();
        assert!(!config.builder.pretty_json);
        assert_eq!(config.builder.icon_search_limit, 0);
        assert!(config.render.include_schema_only_buckets);
        assert_eq!(config.render.default_report_title, "Development Process Report");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(CliConfig::from_toml_str("").unwrap(), CliConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(CliConfig::from_toml_str("[builder]\npretty_json = \"yes\"\n").is_err());
    }
}
