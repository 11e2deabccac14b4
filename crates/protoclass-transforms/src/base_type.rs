//! Normalization of `@extends` type expressions.
//!
//! Documentation writes base types as type expressions, not names. Closure
//! style annotations mark them non-nullable (`{!a.b.Base}`); some tools emit
//! `?` or generic arguments. A class heritage clause needs the bare dotted
//! name, so the text goes through these steps, in order:
//!
//! 1. trim whitespace and one pair of enclosing braces
//! 2. drop leading `!` / `?` nullability markers
//! 3. drop generic arguments (`Base<T>` becomes `Base`)
//! 4. require a dotted identifier path (`a.b.Base`)

/// Plain dotted name for a base type expression, or `None` if the text does
/// not reduce to one.
pub fn normalize_base_type(text: &str) -> Option<String> {
    let mut name = text.trim();
    if let Some(inner) = name.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        name = inner.trim();
    }
    name = name.trim_start_matches(['!', '?']).trim_start();
    if let Some(generic_start) = name.find('<') {
        name = name[..generic_start].trim_end();
    }
    if name.split('.').all(is_identifier) {
        Some(name.to_string())
    } else {
        tracing::debug!(base_type = text, "base type does not name a class");
        None
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[path = "../tests/base_type.rs"]
mod tests;
