//! Best-effort return type inference for computed fields.
//!
//! Computed fields carry no type metadata of their own. Their type comes from
//! the backing method: its declared return annotation when there is one,
//! otherwise the shape of its last `return` statement. Anything else falls
//! back to `any`.

use tsexport_core::schema::{
    EntityDescriptor, FieldDescriptor, MethodDescriptor, TypeScriptType, TS_ANY_ARRAY, TS_MAPPING,
};

/// Infers the TypeScript type a method returns.
pub trait ReturnTypeInferrer {
    /// Return `None` when nothing can be inferred.
    fn infer(&self, method: &MethodDescriptor) -> Option<String>;
}

/// Annotation table first, then the last `return` statement.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicInferrer;

impl ReturnTypeInferrer for HeuristicInferrer {
    fn infer(&self, method: &MethodDescriptor) -> Option<String> {
        match method.annotation() {
            Some(annotation) => type_from_annotation(annotation),
            None => method.source.as_deref().and_then(type_from_source),
        }
    }
}

/// Type of a computed field, or the fallback when it cannot be inferred.
pub fn infer_computed_type(
    field: &FieldDescriptor,
    entity: &EntityDescriptor,
    inferrer: &dyn ReturnTypeInferrer,
) -> TypeScriptType {
    let method_name = field.method_name();
    let Some(method) = entity.find_method(&method_name) else {
        tracing::debug!(
            entity = %entity.qualified_name(),
            method = %method_name,
            "Computed field method not found"
        );
        return TypeScriptType::fallback();
    };

    inferrer
        .infer(method)
        .map(TypeScriptType::plain)
        .unwrap_or_else(TypeScriptType::fallback)
}

/// Map a declared return annotation to a TypeScript type.
pub fn type_from_annotation(annotation: &str) -> Option<String> {
    let annotation = annotation.trim().trim_matches(|c| c == '"' || c == '\'');

    let (base, subscripted) = match annotation.split_once('[') {
        Some((base, rest)) if rest.ends_with(']') => (base.trim(), true),
        Some(_) => return None,
        None => (annotation, false),
    };
    if !is_dotted_name(base) {
        return None;
    }

    let bare = base.rsplit('.').next().unwrap_or(base);
    let ts_type = match bare {
        "int" => "number",
        "str" => "string",
        "bool" => "boolean",
        "float" => "number",
        "list" | "List" | "tuple" | "Tuple" | "set" | "Set" | "Sequence" | "Iterable" => {
            TS_ANY_ARRAY
        }
        "dict" | "Dict" | "Mapping" => TS_MAPPING,
        "None" | "NoneType" | "Any" | "object" | "Optional" | "Union" => return None,
        _ if subscripted => return None,
        other => other,
    };
    Some(ts_type.to_string())
}

/// Infer a type from the textual shape of the last `return` statement.
pub fn type_from_source(source: &str) -> Option<String> {
    let expr = source.lines().filter_map(return_expression).last()?;

    let ts_type = if expr.contains('{') && expr.contains('}') {
        TS_MAPPING
    } else if expr.contains('[') && expr.contains(']') {
        TS_ANY_ARRAY
    } else if expr.contains('"') || expr.contains('\'') {
        "string"
    } else if is_numeric_literal(expr) {
        "number"
    } else if contains_word(expr, "True") || contains_word(expr, "False") {
        "boolean"
    } else {
        return None;
    };
    Some(ts_type.to_string())
}

/// Expression of a `return` line, or `None` for any other line.
fn return_expression(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("return")?;
    if rest.starts_with(is_ident_char) {
        return None;
    }
    Some(rest.trim())
}

fn is_numeric_literal(expr: &str) -> bool {
    let digits = expr.strip_prefix(['-', '+']).unwrap_or(expr);
    let mut parts = digits.splitn(2, '.');
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    match (parts.next(), parts.next()) {
        (Some(int), None) => all_digits(int),
        (Some(int), Some(frac)) => all_digits(int) && all_digits(frac),
        _ => false,
    }
}

fn contains_word(expr: &str, word: &str) -> bool {
    expr.split(|c: char| !is_ident_char(c)).any(|token| token == word)
}

fn is_dotted_name(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|part| {
            part.starts_with(|c: char| c.is_alphabetic() || c == '_') && part.chars().all(is_ident_char)
        })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_table() {
        assert_eq!(type_from_annotation("int").as_deref(), Some("number"));
        assert_eq!(type_from_annotation("str").as_deref(), Some("string"));
        assert_eq!(type_from_annotation("bool").as_deref(), Some("boolean"));
        assert_eq!(type_from_annotation("float").as_deref(), Some("number"));
        assert_eq!(type_from_annotation("list").as_deref(), Some("any[]"));
        assert_eq!(
            type_from_annotation("dict").as_deref(),
            Some("{ [key: string]: any }")
        );
    }

    #[test]
    fn test_annotation_named_type() {
        assert_eq!(type_from_annotation("Customer").as_deref(), Some("Customer"));
        assert_eq!(
            type_from_annotation("shop.models.Customer").as_deref(),
            Some("Customer")
        );
        assert_eq!(type_from_annotation("'Customer'").as_deref(), Some("Customer"));
    }

    #[test]
    fn test_annotation_generics() {
        assert_eq!(type_from_annotation("list[int]").as_deref(), Some("any[]"));
        assert_eq!(
            type_from_annotation("typing.Dict[str, int]").as_deref(),
            Some("{ [key: string]: any }")
        );
        assert_eq!(type_from_annotation("Optional[int]"), None);
        assert_eq!(type_from_annotation("Custom[int]"), None);
    }

    #[test]
    fn test_annotation_unmappable() {
        assert_eq!(type_from_annotation("None"), None);
        assert_eq!(type_from_annotation("int | None"), None);
        assert_eq!(type_from_annotation("Any"), None);
    }

    #[test]
    fn test_source_shapes() {
        let cases = [
            ("return {'a': 1}", Some("{ [key: string]: any }")),
            ("return [obj.a, obj.b]", Some("any[]")),
            ("return \"done\"", Some("string")),
            ("return 'done'", Some("string")),
            ("return 42", Some("number")),
            ("return 4.5", Some("number")),
            ("return True", Some("boolean")),
            ("return obj.total", None),
            ("return", None),
        ];
        for (source, expected) in cases {
            assert_eq!(type_from_source(source).as_deref(), expected, "{source}");
        }
    }

    #[test]
    fn test_source_uses_last_return() {
        let source = "def get_label(self, obj):\n    if obj.flag:\n        return True\n    return obj.name.upper() + 'x'\n";
        assert_eq!(type_from_source(source).as_deref(), Some("string"));
    }

    #[test]
    fn test_source_ignores_return_prefixed_names() {
        let source = "def get_total(self, obj):\n    returned = 5\n    return returned\n";
        assert_eq!(type_from_source(source), None);
    }

    #[test]
    fn test_annotation_wins_over_source() {
        let method = MethodDescriptor::new("get_count")
            .returning("int")
            .with_source("def get_count(self, obj):\n    return 'x'\n");
        assert_eq!(HeuristicInferrer.infer(&method).as_deref(), Some("number"));
    }

    #[test]
    fn test_unmappable_annotation_does_not_read_source() {
        let method = MethodDescriptor::new("get_count")
            .returning("Optional[int]")
            .with_source("def get_count(self, obj):\n    return 1\n");
        assert_eq!(HeuristicInferrer.infer(&method), None);
    }

    #[test]
    fn test_computed_type_lookup() {
        let entity = EntityDescriptor::new("OrderSerializer", "shop")
            .method(MethodDescriptor::new("get_total").returning("float"))
            .method(MethodDescriptor::new("compute_tags").with_source("return []"));

        let total = FieldDescriptor::computed("total", None);
        assert_eq!(
            infer_computed_type(&total, &entity, &HeuristicInferrer).expr,
            "number"
        );

        let tags = FieldDescriptor::computed("tags", Some("compute_tags"));
        assert_eq!(
            infer_computed_type(&tags, &entity, &HeuristicInferrer).expr,
            "any[]"
        );
    }

    #[test]
    fn test_missing_method_falls_back() {
        let entity = EntityDescriptor::new("OrderSerializer", "shop");
        let field = FieldDescriptor::computed("total", None);

        assert!(infer_computed_type(&field, &entity, &HeuristicInferrer).is_fallback());
    }

    #[test]
    fn test_pluggable_inferrer() {
        struct Always;
        impl ReturnTypeInferrer for Always {
            fn infer(&self, _method: &MethodDescriptor) -> Option<String> {
                Some("Date".to_string())
            }
        }

        let entity =
            EntityDescriptor::new("EventSerializer", "cal").method(MethodDescriptor::new("get_at"));
        let field = FieldDescriptor::computed("at", None);
        assert_eq!(infer_computed_type(&field, &entity, &Always).expr, "Date");
    }
}
