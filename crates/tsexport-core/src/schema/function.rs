//! Method definitions backing computed fields.
//!
//! The exporter never calls these methods. The discovery side supplies what
//! it could statically learn about each one: its declared return annotation
//! and its source text.

use serde::{Deserialize, Serialize};

/// Method attached to an entity, looked up by computed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,

    /// Declared return annotation, as written (e.g. `int`, `dict`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_annotation: Option<String>,

    /// Method source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl MethodDescriptor {
    /// Create a method definition with neither annotation nor source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_annotation: None,
            source: None,
        }
    }

    /// Set the declared return annotation.
    pub fn returning(mut self, annotation: impl Into<String>) -> Self {
        self.return_annotation = Some(annotation.into());
        self
    }

    /// Set the method source text.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Declared annotation, ignoring blank strings.
    pub fn annotation(&self) -> Option<&str> {
        self.return_annotation
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_builder() {
        let method = MethodDescriptor::new("get_total")
            .returning("int")
            .with_source("def get_total(self, obj):\n    return 1\n");

        assert_eq!(method.name, "get_total");
        assert_eq!(method.annotation(), Some("int"));
        assert!(method.source.unwrap().contains("return 1"));
    }

    #[test]
    fn test_blank_annotation_ignored() {
        let method = MethodDescriptor::new("get_total").returning("  ");
        assert_eq!(method.annotation(), None);
    }
}
