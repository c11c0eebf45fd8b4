//! Enum declarations for choice-constrained fields.

use std::collections::HashSet;

use tsexport_core::schema::{Choice, EnumDeclaration, EnumMember};

/// Enum name for a choice field: entity, capitalized field, `Enum`.
///
/// Capitalization upper-cases the first character and lower-cases the rest,
/// so `Order.status` gives `OrderStatusEnum`.
pub fn enum_name(entity: &str, field: &str) -> String {
    format!("{}{}Enum", entity, capitalize(field))
}

/// Build the enum declaration for a choice set, keeping choice order.
pub fn extract_enum(name: impl Into<String>, choices: &[Choice]) -> EnumDeclaration {
    let mut used = HashSet::new();
    let members = choices
        .iter()
        .map(|choice| {
            let base = sanitize_label(&choice.label);
            let mut member = base.clone();
            let mut n = 2;
            while !used.insert(member.clone()) {
                member = format!("{}_{}", base, n);
                n += 1;
            }
            EnumMember {
                name: member,
                value: choice.value.clone(),
            }
        })
        .collect();

    EnumDeclaration {
        name: name.into(),
        members,
    }
}

/// Turn a display label into an enum member identifier.
///
/// Every character that is not alphanumeric becomes `_`. A leading numeric
/// character, in any script, is prefixed with `_`.
pub fn sanitize_label(label: &str) -> String {
    let mut ident: String = label
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(char::is_numeric) {
        ident.insert(0, '_');
    }
    ident
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
