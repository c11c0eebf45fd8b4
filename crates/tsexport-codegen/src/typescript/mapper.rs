//! Field descriptor to TypeScript type mapping.

use tsexport_core::schema::{
    EntityDescriptor, FieldDescriptor, FieldKind, SideArtifact, TypeScriptType, TS_MAPPING,
};
use tsexport_core::Result;

use super::diagnostics::Diagnostics;
use super::enums::{enum_name, extract_enum};
use super::infer::{infer_computed_type, ReturnTypeInferrer};
use super::relation::resolve_relation_field;

/// TypeScript type of a scalar kind, or `None` for kinds needing more context.
pub fn scalar_type(kind: &FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Text => Some("string"),
        FieldKind::Integer => Some("number"),
        FieldKind::Boolean => Some("boolean"),
        // ISO-8601 strings on the wire
        FieldKind::DateTime | FieldKind::Date => Some("string"),
        FieldKind::Decimal => Some("number"),
        FieldKind::Uuid => Some("string"),
        FieldKind::Json => Some(TS_MAPPING),
        FieldKind::File => Some("File"),
        FieldKind::ToOne
        | FieldKind::ToMany
        | FieldKind::Choice
        | FieldKind::Computed
        | FieldKind::Other(_) => None,
    }
}

/// Map one field of `entity` to its TypeScript type.
///
/// Fields resolving to `any` are recorded in `diagnostics`. Only structural
/// problems, such as a relation without a target, are returned as errors.
pub fn map_field(
    field: &FieldDescriptor,
    entity: &EntityDescriptor,
    inferrer: &dyn ReturnTypeInferrer,
    diagnostics: &mut Diagnostics,
) -> Result<TypeScriptType> {
    let ts_type = resolve_type(field, entity, inferrer)?;

    if ts_type.is_fallback() {
        tracing::debug!(
            entity = %entity.qualified_name(),
            field = %field.name,
            kind = %field.kind,
            "Field resolved to 'any'"
        );
        diagnostics.record(&entity.namespace, &entity.name, &field.name);
    }

    Ok(ts_type)
}

fn resolve_type(
    field: &FieldDescriptor,
    entity: &EntityDescriptor,
    inferrer: &dyn ReturnTypeInferrer,
) -> Result<TypeScriptType> {
    if field.has_choices() {
        let decl = extract_enum(enum_name(&entity.name, &field.name), &field.choices);
        return Ok(TypeScriptType::plain(decl.name.clone())
            .with_artifact(Some(SideArtifact::Enum(decl))));
    }

    if let Some(expr) = scalar_type(&field.kind) {
        return Ok(TypeScriptType::plain(expr));
    }

    let ts_type = match &field.kind {
        kind if kind.is_relation() => {
            let (name, import) = resolve_relation_field(field, entity)?;
            let expr = if field.kind == FieldKind::ToMany || field.many {
                format!("{}[]", name)
            } else {
                name
            };
            TypeScriptType::plain(expr).with_artifact(import.map(SideArtifact::Import))
        }
        FieldKind::Computed => infer_computed_type(field, entity, inferrer),
        // choice kind without a choice set, or an unsupported kind
        _ => TypeScriptType::fallback(),
    };
    Ok(ts_type)
}
