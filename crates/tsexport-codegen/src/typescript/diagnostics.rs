use std::fmt;

/// Fields that resolved to the fallback type during one export run.
///
/// Each entry is the fully-qualified `namespace.Entity.field` identifier.
/// Entries are only ever appended; the value is dropped with the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    any_fields: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field that fell back to `any`.
    pub fn record(&mut self, namespace: &str, entity: &str, field: &str) {
        self.any_fields
            .push(format!("{}.{}.{}", namespace, entity, field));
    }

    /// Append every entry of `other`, keeping order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.any_fields.extend(other.any_fields);
    }

    pub fn fields(&self) -> &[String] {
        &self.any_fields
    }

    pub fn len(&self) -> usize {
        self.any_fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.any_fields.is_empty()
    }

    /// Human-readable report of the fallback-typed fields.
    pub fn summary(&self) -> String {
        if self.any_fields.is_empty() {
            return "No fields with 'any' type detected.".to_string();
        }

        let mut output = String::from("Fields with 'any' type detected:");
        for field in &self.any_fields {
            output.push('\n');
            output.push_str(field);
        }
        output
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
