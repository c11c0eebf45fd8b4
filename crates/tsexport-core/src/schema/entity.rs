use serde::{Deserialize, Serialize};

use super::field::{FieldDescriptor, FieldKind};
use super::function::MethodDescriptor;

/// Where an entity description comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaSource {
    /// Data models.
    #[default]
    Models,
    /// API serializers built on top of models.
    Serializers,
}

impl SchemaSource {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaSource::Models => "models",
            SchemaSource::Serializers => "serializers",
        }
    }

    /// Exported name of the entity generated for `entity` under this source.
    ///
    /// Serializer output names a relation target after its serializer, which
    /// by convention is the model name suffixed with `Serializer`.
    pub fn exported_name(&self, entity: &str) -> String {
        match self {
            SchemaSource::Models => entity.to_string(),
            SchemaSource::Serializers => format!("{}Serializer", entity),
        }
    }
}

impl std::fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SchemaSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "models" => Ok(SchemaSource::Models),
            "serializers" => Ok(SchemaSource::Serializers),
            other => Err(format!(
                "unknown schema source '{}', expected 'models' or 'serializers'",
                other
            )),
        }
    }
}

/// One model or serializer with its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Entity name (class name in the backend).
    pub name: String,

    /// Owning namespace (application label). Also the output directory.
    #[serde(default)]
    pub namespace: String,

    /// Source kind, inherited from the descriptor document.
    #[serde(default)]
    pub source: SchemaSource,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Methods available to computed fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDescriptor>,
}

impl EntityDescriptor {
    /// Create a new entity definition.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            source: SchemaSource::Models,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: SchemaSource) -> Self {
        self.source = source;
        self
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a method.
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Prepend the implicit integer `id` primary key unless one is declared.
    pub fn with_primary_key(mut self) -> Self {
        if !self.fields.iter().any(|f| f.name == "id") {
            self.fields
                .insert(0, FieldDescriptor::new("id", FieldKind::Integer));
        }
        self
    }

    /// Name of the generated TypeScript interface and of its file.
    pub fn exported_name(&self) -> &str {
        &self.name
    }

    /// `namespace.name`, unique across a run.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// Look up a method by name.
    pub fn find_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}
