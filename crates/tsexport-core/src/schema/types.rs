use std::fmt;

/// Permissive fallback type used when no precise mapping is known.
pub const TS_ANY: &str = "any";

/// Type of free-form structured data.
pub const TS_MAPPING: &str = "{ [key: string]: any }";

/// Type of an untyped sequence.
pub const TS_ANY_ARRAY: &str = "any[]";

/// Module file extension used in import paths and output files.
pub const TS_EXTENSION: &str = "ts";

/// Resolved TypeScript type of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScriptType {
    /// Type expression, e.g. `string` or `RelatedModel[]`.
    pub expr: String,

    /// Import or enum produced while resolving the type.
    pub artifact: Option<SideArtifact>,
}

impl TypeScriptType {
    /// A type with no side artifact.
    pub fn plain(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            artifact: None,
        }
    }

    /// The fallback type.
    pub fn fallback() -> Self {
        Self::plain(TS_ANY)
    }

    pub fn with_artifact(mut self, artifact: Option<SideArtifact>) -> Self {
        self.artifact = artifact;
        self
    }

    /// Check if this is exactly the fallback type.
    pub fn is_fallback(&self) -> bool {
        self.expr == TS_ANY
    }
}

/// Byproduct of mapping one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideArtifact {
    Import(ImportStatement),
    Enum(EnumDeclaration),
}

/// `import { Name } from "path";`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportStatement {
    /// Imported type name.
    pub name: String,
    /// Relative module path with forward slashes and extension.
    pub path: String,
}

impl ImportStatement {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {{ {} }} from \"{}\";", self.name, self.path)
    }
}

/// TypeScript enum synthesized from a choice set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumDeclaration {
    /// Enum name.
    pub name: String,
    /// Members in choice order.
    pub members: Vec<EnumMember>,
}

/// One enum member: identifier and raw string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub name: String,
    pub value: String,
}

impl EnumDeclaration {
    /// Generate the `export enum` block, without a trailing newline.
    pub fn to_typescript(&self) -> String {
        let mut output = format!("export enum {} {{\n", self.name);
        for member in &self.members {
            output.push_str(&format!(
                "  {} = '{}',\n",
                member.name,
                escape_single_quoted(&member.value)
            ));
        }
        output.push('}');
        output
    }
}

impl fmt::Display for EnumDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_typescript())
    }
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
