//! Cross-entity references: referenced type names and relative imports.

use tsexport_core::schema::{EntityDescriptor, FieldDescriptor, ImportStatement, TS_EXTENSION};
use tsexport_core::{ExportError, Result};

/// Resolve the type name and import for a reference to another entity.
///
/// Returns no import when the reference points at the entity being
/// generated, since it is declared in the same file.
pub fn resolve_relation(
    related_exported: &str,
    related_namespace: &str,
    current_namespace: &str,
    current_exported: &str,
) -> (String, Option<ImportStatement>) {
    if related_exported == current_exported {
        return (related_exported.to_string(), None);
    }

    let path = import_path(related_exported, related_namespace, current_namespace);
    (
        related_exported.to_string(),
        Some(ImportStatement::new(related_exported, path)),
    )
}

/// Relative module path from a file in `current_namespace` to the file of
/// `exported` in `related_namespace`.
pub fn import_path(exported: &str, related_namespace: &str, current_namespace: &str) -> String {
    if related_namespace == current_namespace {
        format!("./{}.{}", exported, TS_EXTENSION)
    } else {
        format!(
            "../{}/{}.{}",
            related_namespace.replace('\\', "/"),
            exported,
            TS_EXTENSION
        )
    }
}

/// Resolve the relation carried by `field` of `entity`.
///
/// A relation without a target entity is a structural error, reported as
/// [`ExportError::MissingRelationTarget`].
pub fn resolve_relation_field(
    field: &FieldDescriptor,
    entity: &EntityDescriptor,
) -> Result<(String, Option<ImportStatement>)> {
    let missing = || ExportError::MissingRelationTarget {
        entity: entity.qualified_name(),
        field: field.name.clone(),
    };

    let target = field.relation.as_ref().ok_or_else(missing)?;
    let related_name = target.entity.trim();
    if related_name.is_empty() {
        return Err(missing());
    }

    let related_exported = target
        .exported_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| entity.source.exported_name(related_name));
    let related_namespace = target
        .namespace
        .as_deref()
        .filter(|ns| !ns.is_empty())
        .unwrap_or(&entity.namespace);

    Ok(resolve_relation(
        &related_exported,
        related_namespace,
        &entity.namespace,
        entity.exported_name(),
    ))
}
