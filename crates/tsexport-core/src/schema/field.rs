use serde::{Deserialize, Serialize};

/// Category of a schema field, driving TypeScript type selection.
///
/// The set is closed: any kind name the exporter does not understand is kept
/// verbatim as [`FieldKind::Other`] and later resolves to the fallback type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Short or long text.
    Text,
    /// Any integer column, including auto primary keys.
    Integer,
    Boolean,
    /// Date and time.
    DateTime,
    /// Date only.
    Date,
    /// Fixed-point decimal.
    Decimal,
    Uuid,
    /// Free-form structured data.
    Json,
    /// Binary or file attachment.
    File,
    /// Foreign key, one-to-one, or nested single entity.
    ToOne,
    /// Many-to-many or nested list of entities.
    ToMany,
    /// Field constrained to a fixed set of labeled values.
    Choice,
    /// Computed field backed by a method.
    Computed,
    /// Unsupported kind, kept by name.
    Other(String),
}

impl FieldKind {
    /// Convert a kind name to a FieldKind.
    ///
    /// Accepts canonical snake_case names as well as the host framework's
    /// field class names.
    pub fn from_kind_name(name: &str) -> Self {
        match name.trim() {
            "text" | "CharField" | "TextField" | "EmailField" | "SlugField" | "URLField" => {
                FieldKind::Text
            }
            "integer"
            | "IntegerField"
            | "BigIntegerField"
            | "SmallIntegerField"
            | "PositiveIntegerField"
            | "PositiveSmallIntegerField"
            | "AutoField"
            | "BigAutoField" => FieldKind::Integer,
            "boolean" | "BooleanField" => FieldKind::Boolean,
            "datetime" | "DateTimeField" => FieldKind::DateTime,
            "date" | "DateField" => FieldKind::Date,
            "decimal" | "DecimalField" => FieldKind::Decimal,
            "uuid" | "UUIDField" => FieldKind::Uuid,
            "json" | "JSONField" => FieldKind::Json,
            "file" | "FileField" | "ImageField" => FieldKind::File,
            "foreign_key" | "one_to_one" | "to_one" | "ForeignKey" | "OneToOneField"
            | "PrimaryKeyRelatedField" | "NestedSerializer" => FieldKind::ToOne,
            "many_to_many" | "to_many" | "ManyToManyField" | "ManyRelatedField"
            | "ListSerializer" => FieldKind::ToMany,
            "choice" | "ChoiceField" => FieldKind::Choice,
            "computed" | "SerializerMethodField" => FieldKind::Computed,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// Canonical kind name.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "datetime",
            FieldKind::Date => "date",
            FieldKind::Decimal => "decimal",
            FieldKind::Uuid => "uuid",
            FieldKind::Json => "json",
            FieldKind::File => "file",
            FieldKind::ToOne => "to_one",
            FieldKind::ToMany => "to_many",
            FieldKind::Choice => "choice",
            FieldKind::Computed => "computed",
            FieldKind::Other(name) => name,
        }
    }

    /// Check if this kind references another entity.
    pub fn is_relation(&self) -> bool {
        matches!(self, FieldKind::ToOne | FieldKind::ToMany)
    }
}

impl From<String> for FieldKind {
    fn from(name: String) -> Self {
        FieldKind::from_kind_name(&name)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference from a relation field to the entity it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    /// Name of the related entity.
    pub entity: String,

    /// Namespace of the related entity. `None` means the owner's namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Exported TypeScript name, when it differs from the source convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_name: Option<String>,
}

impl RelationRef {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            namespace: None,
            exported_name: None,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn exported_as(mut self, name: impl Into<String>) -> Self {
        self.exported_name = Some(name.into());
        self
    }
}

/// Raw choice values may be strings, numbers, booleans or null.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawChoiceValue {
    Str(String),
    /// Kept as written, so `2.0` stays `2.0`.
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl From<RawChoiceValue> for String {
    fn from(value: RawChoiceValue) -> Self {
        match value {
            RawChoiceValue::Str(s) => s,
            RawChoiceValue::Number(n) => n.to_string(),
            RawChoiceValue::Bool(b) => if b { "True" } else { "False" }.to_string(),
            RawChoiceValue::Null => "None".to_string(),
        }
    }
}

/// One entry of a choice set: raw stored value and display label.
///
/// Serialized as a `[value, label]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(RawChoiceValue, String)", into = "(String, String)")]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<(RawChoiceValue, String)> for Choice {
    fn from((value, label): (RawChoiceValue, String)) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

impl From<Choice> for (String, String) {
    fn from(choice: Choice) -> Self {
        (choice.value, choice.label)
    }
}

/// Reference from a computed field to its backing method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedRef {
    /// Declared method name; `get_<field>` is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Definition of an entity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as exposed by the backend.
    pub name: String,

    /// Field category.
    pub kind: FieldKind,

    /// Whether the field accepts null.
    #[serde(default)]
    pub nullable: bool,

    /// Whether a nested entity field holds a list.
    #[serde(default)]
    pub many: bool,

    /// Related entity for relation kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationRef>,

    /// Ordered choice set, if the field is choice-constrained.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    /// Backing method for computed fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed: Option<ComputedRef>,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            many: false,
            relation: None,
            choices: Vec::new(),
            computed: None,
        }
    }

    /// Create a to-one relation field.
    pub fn to_one(name: impl Into<String>, target: RelationRef) -> Self {
        Self::new(name, FieldKind::ToOne).with_relation(target)
    }

    /// Create a to-many relation field.
    pub fn to_many(name: impl Into<String>, target: RelationRef) -> Self {
        Self::new(name, FieldKind::ToMany).with_relation(target)
    }

    /// Create a computed field, optionally naming its method.
    pub fn computed(name: impl Into<String>, method: Option<&str>) -> Self {
        let mut field = Self::new(name, FieldKind::Computed);
        field.computed = Some(ComputedRef {
            method: method.map(str::to_string),
        });
        field
    }

    pub fn with_relation(mut self, target: RelationRef) -> Self {
        self.relation = Some(target);
        self
    }

    pub fn with_choices<V, L>(mut self, choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        self.choices = choices
            .into_iter()
            .map(|(value, label)| Choice::new(value, label))
            .collect();
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }

    /// Check if this field is choice-constrained.
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Name of the method backing this computed field.
    pub fn method_name(&self) -> String {
        self.computed
            .as_ref()
            .and_then(|c| c.method.clone())
            .unwrap_or_else(|| format!("get_{}", self.name))
    }
}
