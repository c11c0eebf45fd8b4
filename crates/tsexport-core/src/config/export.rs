use serde::{Deserialize, Serialize};

use crate::schema::SchemaSource;

/// What to export and where to put it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory holding the schema descriptor documents.
    #[serde(default = "default_schema_dir")]
    pub schema_dir: String,

    /// Output directory for the TypeScript files.
    #[serde(default = "default_outdir")]
    pub outdir: String,

    /// Export models or serializers.
    #[serde(default = "default_source")]
    pub source: SchemaSource,

    /// Namespaces to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Print the fallback-type report after the run.
    #[serde(default)]
    pub logs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            schema_dir: default_schema_dir(),
            outdir: default_outdir(),
            source: default_source(),
            exclude: Vec::new(),
            logs: false,
        }
    }
}

fn default_schema_dir() -> String {
    "schema".to_string()
}

fn default_outdir() -> String {
    "./typescript".to_string()
}

fn default_source() -> SchemaSource {
    SchemaSource::Serializers
}
