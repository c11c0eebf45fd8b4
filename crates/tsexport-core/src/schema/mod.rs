mod entity;
mod field;
mod function;
mod registry;
mod types;

pub use entity::{EntityDescriptor, SchemaSource};
pub use field::{Choice, ComputedRef, FieldDescriptor, FieldKind, RelationRef};
pub use function::MethodDescriptor;
pub use registry::SchemaRegistry;
pub use types::{
    EnumDeclaration, EnumMember, ImportStatement, SideArtifact, TypeScriptType, TS_ANY,
    TS_ANY_ARRAY, TS_EXTENSION, TS_MAPPING,
};
