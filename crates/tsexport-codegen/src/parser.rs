//! Schema descriptor discovery.
//!
//! The backend dumps its models and serializers as JSON descriptor documents,
//! one per namespace and source kind. This module walks a schema directory
//! and loads them into a [`SchemaRegistry`].

use std::path::Path;

use serde::Deserialize;
use tsexport_core::schema::{EntityDescriptor, SchemaRegistry, SchemaSource};
use tsexport_core::{ExportError, Result as ExportResult};
use walkdir::WalkDir;

use crate::Error;

/// One descriptor document.
#[derive(Debug, Deserialize)]
pub struct SchemaDocument {
    /// Namespace of every entity in the document.
    pub namespace: String,

    #[serde(default)]
    pub source: SchemaSource,

    /// Add the implicit `id` primary key to entities that lack one.
    #[serde(default = "default_auto_id")]
    pub auto_id: bool,

    #[serde(default)]
    pub entities: Vec<EntityDescriptor>,
}

fn default_auto_id() -> bool {
    true
}

/// Load every `*.json` descriptor document of `source` below `schema_dir`.
///
/// Files are read in file name order so repeated runs register entities in
/// the same order. Malformed documents are logged and skipped.
pub fn parse_project(schema_dir: &Path, source: SchemaSource) -> Result<SchemaRegistry, Error> {
    if !schema_dir.is_dir() {
        return Err(Error::Parse {
            path: schema_dir.to_path_buf(),
            message: "schema directory does not exist".to_string(),
        });
    }

    let mut registry = SchemaRegistry::new();

    for entry in WalkDir::new(schema_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
    {
        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = ?entry.path(), error = %e, "Failed to read descriptor document");
                continue;
            }
        };
        match parse_document(&content, source, &mut registry) {
            Ok(0) => {
                tracing::debug!(file = ?entry.path(), "No entities loaded from document");
            }
            Ok(count) => {
                tracing::debug!(file = ?entry.path(), count, "Loaded descriptor document");
            }
            Err(e) => {
                tracing::warn!(file = ?entry.path(), error = %e, "Failed to parse descriptor document");
            }
        }
    }

    Ok(registry)
}

/// Parse one descriptor document into `registry`.
///
/// Returns the number of registered entities; documents describing another
/// source kind register nothing.
pub fn parse_document(
    content: &str,
    source: SchemaSource,
    registry: &mut SchemaRegistry,
) -> ExportResult<usize> {
    let document: SchemaDocument = serde_json::from_str(content)?;

    let namespace = document.namespace.trim();
    if namespace.is_empty() {
        return Err(ExportError::InvalidDescriptor(
            "document namespace is empty".to_string(),
        ));
    }
    if document.source != source {
        return Ok(0);
    }

    let mut entities = Vec::with_capacity(document.entities.len());
    for mut entity in document.entities {
        if entity.name.trim().is_empty() {
            return Err(ExportError::InvalidDescriptor(format!(
                "entity without a name in namespace {}",
                namespace
            )));
        }
        if entity.namespace.is_empty() {
            entity.namespace = namespace.to_string();
        }
        entity.source = document.source;
        if document.auto_id {
            entity = entity.with_primary_key();
        }
        entities.push(entity);
    }

    let count = entities.len();
    for entity in entities {
        registry.register_entity(entity);
    }
    Ok(count)
}
