pub mod config;
pub mod error;
pub mod schema;

pub use config::TsExportConfig;
pub use error::{ExportError, Result};
pub use schema::{
    EntityDescriptor, FieldDescriptor, FieldKind, SchemaRegistry, SchemaSource, TypeScriptType,
};
