//! TypeScript interface generation.
//!
//! [`TypeScriptGenerator`] walks a [`SchemaRegistry`] one entity at a time,
//! synthesizes an interface file per entity and hands it to an
//! [`OutputWriter`].

pub mod diagnostics;
pub mod enums;
pub mod infer;
pub mod interface;
pub mod mapper;
pub mod relation;
pub mod writer;

use std::path::{Path, PathBuf};

use tsexport_core::schema::{EntityDescriptor, SchemaRegistry, TS_EXTENSION};
use tsexport_core::ExportError;

pub use diagnostics::Diagnostics;
pub use infer::{HeuristicInferrer, ReturnTypeInferrer};
pub use interface::{synthesize, InterfaceUnit};
pub use mapper::map_field;
pub use writer::{FileWriter, MemoryWriter, OutputWriter};

/// Generates one TypeScript file per registered entity.
pub struct TypeScriptGenerator {
    /// Output directory for generated files.
    output_dir: PathBuf,
    inferrer: Box<dyn ReturnTypeInferrer>,
}

impl TypeScriptGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            inferrer: Box::new(HeuristicInferrer),
        }
    }

    /// Replace the computed-field return type inferrer.
    pub fn with_inferrer(mut self, inferrer: impl ReturnTypeInferrer + 'static) -> Self {
        self.inferrer = Box::new(inferrer);
        self
    }

    /// File of `entity` relative to the output directory.
    pub fn target_path(entity: &EntityDescriptor) -> PathBuf {
        Path::new(&entity.namespace).join(format!("{}.{}", entity.exported_name(), TS_EXTENSION))
    }

    /// Render a single entity.
    pub fn render_entity(
        &self,
        entity: &EntityDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, Error> {
        let unit = synthesize(entity, self.inferrer.as_ref(), diagnostics)?;
        Ok(unit.render())
    }

    /// Generate every entity of `registry` into `writer`.
    ///
    /// Entities failing with a structural error are skipped and reported;
    /// write failures abort the run.
    pub fn generate(
        &self,
        registry: &SchemaRegistry,
        writer: &mut dyn OutputWriter,
    ) -> Result<ExportReport, Error> {
        let mut report = ExportReport::default();

        for entity in registry.entities() {
            let contents = match self.render_entity(entity, &mut report.diagnostics) {
                Ok(contents) => contents,
                Err(Error::Export(error)) => {
                    tracing::warn!(
                        entity = %entity.qualified_name(),
                        error = %error,
                        "Skipping entity"
                    );
                    report.skipped.push(SkippedEntity {
                        entity: entity.qualified_name(),
                        error,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let target = Self::target_path(entity);
            writer.write(&target, &contents)?;
            tracing::info!(path = %target.display(), "Generated interface");
            report.written.push(target);
        }

        Ok(report)
    }

    /// Generate every entity of `registry` below the output directory.
    pub fn write_all(&self, registry: &SchemaRegistry) -> Result<ExportReport, Error> {
        let mut writer = FileWriter::new(self.output_dir.clone());
        self.generate(registry, &mut writer)
    }
}

/// Outcome of one export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Written files, relative to the output directory.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntity>,
    pub diagnostics: Diagnostics,
}

/// An entity left out of the run.
#[derive(Debug)]
pub struct SkippedEntity {
    /// `namespace.Entity`
    pub entity: String,
    pub error: ExportError,
}

/// Code generation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsexport_core::schema::{
        FieldDescriptor, FieldKind, MethodDescriptor, RelationRef, SchemaSource,
    };

    fn registry() -> SchemaRegistry {
        [
            EntityDescriptor::new("RelatedModel", "tests")
                .field(FieldDescriptor::new("name", FieldKind::Text))
                .with_primary_key(),
            EntityDescriptor::new("TestModel", "tests")
                .field(FieldDescriptor::to_one("foreign_key", RelationRef::new("RelatedModel")))
                .field(FieldDescriptor::new("duration", FieldKind::from_kind_name("DurationField")))
                .with_primary_key(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_target_path() {
        let entity = EntityDescriptor::new("OrderSerializer", "shop")
            .with_source(SchemaSource::Serializers);
        assert_eq!(
            TypeScriptGenerator::target_path(&entity),
            Path::new("shop").join("OrderSerializer.ts")
        );
    }

    #[test]
    fn test_generate_writes_every_entity() {
        let generator = TypeScriptGenerator::new("out");
        let mut writer = MemoryWriter::new();

        let report = generator.generate(&registry(), &mut writer).unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(report.skipped.is_empty());
        assert_eq!(report.diagnostics.fields(), ["tests.TestModel.duration"]);

        let related = writer.get(Path::new("tests").join("RelatedModel.ts")).unwrap();
        assert_eq!(
            related.trim(),
            "export interface RelatedModel {\n  id: number;\n  name: string;\n}"
        );
        let test_model = writer.get(Path::new("tests").join("TestModel.ts")).unwrap();
        assert!(test_model.starts_with("import { RelatedModel } from \"./RelatedModel.ts\";"));
    }

    #[test]
    fn test_structural_error_skips_entity() {
        let mut registry = registry();
        registry.register_entity(
            EntityDescriptor::new("Broken", "tests")
                .field(FieldDescriptor::new("blob", FieldKind::from_kind_name("BinaryField")))
                .field(FieldDescriptor::new("owner", FieldKind::ToOne)),
        );

        let mut writer = MemoryWriter::new();
        let report = TypeScriptGenerator::new("out")
            .generate(&registry, &mut writer)
            .unwrap();

        assert_eq!(writer.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].entity, "tests.Broken");
        assert!(matches!(
            report.skipped[0].error,
            ExportError::MissingRelationTarget { .. }
        ));
        // the broken entity's fallback field is not reported
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_custom_inferrer() {
        struct Dates;
        impl ReturnTypeInferrer for Dates {
            fn infer(&self, _method: &MethodDescriptor) -> Option<String> {
                Some("Date".to_string())
            }
        }

        let registry: SchemaRegistry = [EntityDescriptor::new("EventSerializer", "cal")
            .field(FieldDescriptor::computed("starts_at", None))
            .method(MethodDescriptor::new("get_starts_at"))]
        .into_iter()
        .collect();

        let mut writer = MemoryWriter::new();
        let report = TypeScriptGenerator::new("out")
            .with_inferrer(Dates)
            .generate(&registry, &mut writer)
            .unwrap();

        assert!(report.diagnostics.is_empty());
        let output = writer.get(Path::new("cal").join("EventSerializer.ts")).unwrap();
        assert!(output.contains("  starts_at: Date;\n"));
    }

    #[test]
    fn test_write_all_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let generator = TypeScriptGenerator::new(dir.path());

        let report = generator.write_all(&registry()).unwrap();

        assert_eq!(report.written.len(), 2);
        assert!(dir.path().join("tests/RelatedModel.ts").is_file());
        assert!(dir.path().join("tests/TestModel.ts").is_file());
    }
}
