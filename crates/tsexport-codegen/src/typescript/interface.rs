//! Per-entity interface assembly and rendering.

use std::collections::BTreeSet;

use tsexport_core::schema::{EntityDescriptor, SideArtifact};
use tsexport_core::Result;

use super::diagnostics::Diagnostics;
use super::infer::ReturnTypeInferrer;
use super::mapper::map_field;

/// Everything emitted into one entity's file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceUnit {
    /// Exported interface name.
    pub name: String,
    /// Rendered import statements, unique and sorted.
    pub imports: BTreeSet<String>,
    /// Rendered enum declarations, unique and sorted.
    pub enums: BTreeSet<String>,
    /// `(field, type)` pairs in declaration order.
    pub fields: Vec<(String, String)>,
}

impl InterfaceUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Render the file contents.
    pub fn render(&self) -> String {
        let mut output = String::new();

        if !self.imports.is_empty() {
            output.push_str(&join(&self.imports, "\n"));
            output.push_str("\n\n");
        }

        if !self.enums.is_empty() {
            output.push_str(&join(&self.enums, "\n\n"));
            output.push_str("\n\n");
        }

        output.push_str(&format!("export interface {} {{\n", self.name));
        for (name, ts_type) in &self.fields {
            output.push_str(&format!("  {}: {};\n", name, ts_type));
        }
        output.push_str("}\n\n");

        output
    }
}

fn join(items: &BTreeSet<String>, sep: &str) -> String {
    items.iter().map(String::as_str).collect::<Vec<_>>().join(sep)
}

/// Map every field of `entity` and collect the result into an [`InterfaceUnit`].
///
/// Diagnostics are only merged into `diagnostics` when the whole entity
/// synthesizes; a failed entity leaves no trace in the run report.
pub fn synthesize(
    entity: &EntityDescriptor,
    inferrer: &dyn ReturnTypeInferrer,
    diagnostics: &mut Diagnostics,
) -> Result<InterfaceUnit> {
    let mut local = Diagnostics::new();
    let mut unit = InterfaceUnit::new(entity.exported_name());

    for field in &entity.fields {
        let ts_type = map_field(field, entity, inferrer, &mut local)?;

        match ts_type.artifact {
            Some(SideArtifact::Import(import)) => {
                unit.imports.insert(import.to_string());
            }
            Some(SideArtifact::Enum(decl)) => {
                unit.enums.insert(decl.to_typescript());
            }
            None => {}
        }
        unit.fields.push((field.name.clone(), ts_type.expr));
    }

    diagnostics.extend(local);
    Ok(unit)
}
