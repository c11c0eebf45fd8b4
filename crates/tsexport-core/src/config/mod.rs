mod export;
mod logging;

pub use export::ExportConfig;
pub use logging::LoggingConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ExportError, Result};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "tsexport.toml";

/// Root configuration for tsexport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TsExportConfig {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Export configuration.
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TsExportConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ExportError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Load configuration from a file if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = substitute_env_vars(content);

        toml::from_str(&content)
            .map_err(|e| ExportError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Render this configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ExportError::Serialization(format!("Failed to render config: {}", e)))
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    #[serde(default = "default_project_name")]
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

fn default_project_name() -> String {
    "backend".to_string()
}

/// Substitute environment variables in the format ${VAR_NAME}.
fn substitute_env_vars(content: &str) -> String {
    let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
        return content.to_string();
    };

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaSource;

    #[test]
    fn test_default_config() {
        let config = TsExportConfig::default();
        assert_eq!(config.export.outdir, "./typescript");
        assert_eq!(config.export.source, SchemaSource::Serializers);
        assert!(config.export.exclude.is_empty());
        assert!(!config.export.logs);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = TsExportConfig::parse_toml("").unwrap();
        assert_eq!(config.project.name, "backend");
        assert_eq!(config.export.schema_dir, "schema");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [project]
            name = "shop"

            [export]
            schema_dir = "build/schema"
            outdir = "frontend/src/types"
            source = "models"
            exclude = ["django_extensions", "audit"]
            logs = true

            [logging]
            level = "debug"
        "#;

        let config = TsExportConfig::parse_toml(toml).unwrap();
        assert_eq!(config.project.name, "shop");
        assert_eq!(config.export.schema_dir, "build/schema");
        assert_eq!(config.export.outdir, "frontend/src/types");
        assert_eq!(config.export.source, SchemaSource::Models);
        assert_eq!(config.export.exclude.len(), 2);
        assert!(config.export.logs);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_source_rejected() {
        let toml = r#"
            [export]
            source = "views"
        "#;

        let err = TsExportConfig::parse_toml(toml).unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TSEXPORT_TEST_OUTDIR", "/tmp/generated");

        let toml = r#"
            [export]
            outdir = "${TSEXPORT_TEST_OUTDIR}"
        "#;

        let config = TsExportConfig::parse_toml(toml).unwrap();
        assert_eq!(config.export.outdir, "/tmp/generated");
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = TsExportConfig::default();
        config.export.exclude.push("audit".to_string());

        let rendered = config.to_toml().unwrap();
        let parsed = TsExportConfig::parse_toml(&rendered).unwrap();
        assert_eq!(parsed.export.exclude, ["audit"]);
    }
}
